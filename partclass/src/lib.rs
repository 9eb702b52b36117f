//! PartClass - manufacturer part number (MPN) classification library
//!
//! Given a raw alphanumeric part number, this library determines which
//! component categories it belongs to, which manufacturer produced it,
//! extracts normalized attributes (series, package code, electrical
//! ratings), and decides whether one MPN is an official replacement for
//! another. It is the normalization layer procurement and BOM tooling needs
//! to fold free-text part numbers from many vendors into one taxonomy.
//!
//! # Quick Start
//!
//! ```
//! use partclass::PartCatalog;
//!
//! let catalog = PartCatalog::new();
//!
//! let result = catalog.classify("ABM3-12.000MHZ-B2-T");
//! assert_eq!(result.manufacturer.as_deref(), Some("abracon"));
//! assert_eq!(result.series, "ABM3");
//!
//! // Automotive grade replaces standard grade, never the reverse.
//! assert!(catalog.is_official_replacement("DSX321GA", "DSX321G"));
//! assert!(!catalog.is_official_replacement("DSX321G", "DSX321GA"));
//! ```
//!
//! # Design
//!
//! - **Taxonomy**: a closed, two-tier [`ComponentType`] tag set.
//! - **Registry**: [`PatternRegistry`], a build-once table of compiled
//!   case-insensitive rules, populated by handlers at catalog construction.
//! - **Handlers**: one [`ManufacturerHandler`] per vendor; new vendors are
//!   rule additions, not engine changes.
//! - **Dispatch**: [`PartCatalog`] probes handlers in a fixed registration
//!   order; first match wins.
//!
//! Every query is a pure function of its string inputs: empty or
//! unrecognized input yields `false`/`""` sentinels, never an error.

pub mod core;
pub mod decode;
pub mod handlers;
pub mod registry;
pub mod taxonomy;

// Re-export main types
pub use crate::core::{
    discover_bom_files, BomStats, Classification, PartCatalog, PartClassError,
};
pub use crate::handlers::ManufacturerHandler;
pub use crate::registry::{PatternEntry, PatternRegistry};
pub use crate::taxonomy::ComponentType;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        BomStats, Classification, ComponentType, ManufacturerHandler, PartCatalog,
        PartClassError, PatternRegistry,
    };
}
