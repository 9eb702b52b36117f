//! Example: plugging a custom manufacturer handler into a catalog.
//! Run with: cargo run --example custom_handler

use partclass::registry::PatternRegistry;
use partclass::{ComponentType, ManufacturerHandler, PartCatalog, PartClassError};

/// Minimal handler for a fictional resistor vendor with `RX`-prefixed MPNs
/// like `RX100K-0805`.
struct ExampleResistorHandler;

impl ManufacturerHandler for ExampleResistorHandler {
    fn name(&self) -> &'static str {
        "example_resistors"
    }

    fn initialize_patterns(&self, registry: &mut PatternRegistry) -> Result<(), PartClassError> {
        registry.register(ComponentType::Resistor, self.name(), r"^RX\d+[RKM]-")
    }

    fn extract_series(&self, mpn: &str) -> String {
        mpn.trim()
            .to_ascii_uppercase()
            .split('-')
            .next()
            .unwrap_or("")
            .to_string()
    }

    fn extract_package_code(&self, mpn: &str) -> String {
        mpn.trim()
            .to_ascii_uppercase()
            .split('-')
            .nth(1)
            .unwrap_or("")
            .to_string()
    }

    fn is_official_replacement(&self, candidate: &str, original: &str) -> bool {
        !candidate.trim().is_empty() && candidate.eq_ignore_ascii_case(original)
    }

    fn supported_types(&self) -> &'static [ComponentType] {
        &[ComponentType::Resistor]
    }
}

fn main() -> Result<(), PartClassError> {
    let catalog = PartCatalog::with_handlers(vec![Box::new(ExampleResistorHandler)])?;

    let result = catalog.classify("RX100K-0805");
    println!("manufacturer: {:?}", result.manufacturer);
    println!("series:       {}", result.series);
    println!("package:      {}", result.package_code);

    assert!(catalog.is_official_replacement("RX100K-0805", "rx100k-0805"));
    Ok(())
}
