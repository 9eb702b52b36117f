//! PartClass CLI - MPN classification and replacement checks from the command line.

use clap::{Parser, Subcommand, ValueEnum};
use partclass::{BomStats, Classification, PartCatalog};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "partclass")]
#[command(about = "MPN classification and replacement-compatibility tool", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one or more manufacturer part numbers
    Classify {
        /// Part numbers to classify
        #[arg(value_name = "MPN", required = true)]
        mpns: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Exit with error code if any MPN is not recognized
        #[arg(long)]
        fail_on_unknown: bool,
    },

    /// Check whether one MPN officially replaces another
    Replace {
        /// Candidate replacement part
        #[arg(value_name = "CANDIDATE")]
        candidate: String,

        /// Part being replaced
        #[arg(value_name = "ORIGINAL")]
        original: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// Classify a BOM list file (one MPN per line, # comments allowed)
    Bom {
        /// Path to the BOM list file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Exit with error code if any MPN is not recognized
        #[arg(long)]
        fail_on_unknown: bool,
    },

    /// List registered manufacturer handlers
    Handlers {
        /// Show supported types per handler
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for scripting
    Json,
}

fn main() {
    let cli = Cli::parse();
    let catalog = PartCatalog::new();

    let exit_code = match cli.command {
        Commands::Classify {
            mpns,
            format,
            fail_on_unknown,
        } => handle_classify(&catalog, &mpns, format, fail_on_unknown),
        Commands::Replace {
            candidate,
            original,
            format,
        } => handle_replace(&catalog, &candidate, &original, format),
        Commands::Bom {
            file,
            format,
            fail_on_unknown,
        } => handle_bom(&catalog, &file, format, fail_on_unknown),
        Commands::Handlers { verbose } => {
            handle_handlers(&catalog, verbose);
            0
        }
    };

    process::exit(exit_code);
}

fn handle_classify(
    catalog: &PartCatalog,
    mpns: &[String],
    format: OutputFormat,
    fail_on_unknown: bool,
) -> i32 {
    let results: Vec<Classification> = mpns.iter().map(|mpn| catalog.classify(mpn)).collect();
    output_classifications(&results, &format);

    if fail_on_unknown && results.iter().any(|r| !r.is_recognized()) {
        return 1;
    }
    0
}

fn handle_replace(
    catalog: &PartCatalog,
    candidate: &str,
    original: &str,
    format: OutputFormat,
) -> i32 {
    let verdict = catalog.is_official_replacement(candidate, original);

    match format {
        OutputFormat::Human => {
            if verdict {
                println!("{} is an official replacement for {}", candidate, original);
            } else {
                println!("{} is NOT an official replacement for {}", candidate, original);
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "candidate": candidate,
                "original": original,
                "official_replacement": verdict,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
    }

    // Scripting contract: 0 = replaceable, 1 = not replaceable.
    if verdict {
        0
    } else {
        1
    }
}

fn handle_bom(
    catalog: &PartCatalog,
    file: &PathBuf,
    format: OutputFormat,
    fail_on_unknown: bool,
) -> i32 {
    let results = match catalog.classify_bom(file) {
        Ok(results) => results,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let stats = BomStats::from_classifications(&results);
    match format {
        OutputFormat::Human => {
            output_classifications(&results, &OutputFormat::Human);
            println!("\nSummary:");
            println!("  Total:        {}", stats.total);
            println!("  Recognized:   {}", stats.recognized);
            println!("  Unrecognized: {}", stats.unrecognized);
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "results": results,
                "stats": stats,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
    }

    if fail_on_unknown && stats.unrecognized > 0 {
        return 1;
    }
    0
}

fn output_classifications(results: &[Classification], format: &OutputFormat) {
    match format {
        OutputFormat::Human => {
            for result in results {
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
        OutputFormat::Json => {
            let output = serde_json::json!({ "results": results });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
    }
}

fn handle_handlers(catalog: &PartCatalog, verbose: bool) {
    println!("Registered manufacturer handlers (dispatch order):\n");
    for handler in catalog.handlers() {
        println!("  {}", handler.name());
        if verbose {
            let types: Vec<String> = handler
                .supported_types()
                .iter()
                .map(|t| t.to_string())
                .collect();
            println!("    types: {}", types.join(", "));
        }
    }
}
