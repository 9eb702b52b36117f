//! Example: classify a few MPNs with the default catalog.
//! Run with: cargo run --example simple_classification [MPN...]

use partclass::PartCatalog;

fn main() {
    let mpns: Vec<String> = std::env::args().skip(1).collect();
    let mpns = if mpns.is_empty() {
        vec![
            "ABM3-12.000MHZ-B2-T".to_string(),
            "AK8963C".to_string(),
            "SMAJ5.0A".to_string(),
            "RFS-25V471MH3#5".to_string(),
            "NOT-A-PART".to_string(),
        ]
    } else {
        mpns
    };

    let catalog = PartCatalog::new();

    for mpn in &mpns {
        let result = catalog.classify(mpn);
        match &result.manufacturer {
            Some(manufacturer) => {
                println!("{}", result.mpn);
                println!("  manufacturer: {}", manufacturer);
                println!("  series:       {}", result.series);
                if !result.package_code.is_empty() {
                    println!("  package:      {}", result.package_code);
                }
                let types: Vec<String> =
                    result.types.iter().map(|t| t.to_string()).collect();
                println!("  types:        {}", types.join(", "));
            }
            None => println!("{}\n  (not recognized)", result.mpn),
        }
    }
}
