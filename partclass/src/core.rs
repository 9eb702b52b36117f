//! Core classification API shared by library consumers and the CLI.
//!
//! [`PartCatalog`] owns the handler set and the populated pattern registry.
//! Construction is the only mutating phase: handlers register their patterns
//! in a fixed, documented order, and from then on every operation takes
//! `&self`, so a catalog can be shared freely across threads.

use std::path::{Path, PathBuf};

use crate::handlers::{
    abracon::AbraconHandler, akm::AkmHandler, asmedia::AsmediaHandler, elna::ElnaHandler,
    kds::KdsHandler, littelfuse::LittelfuseHandler, ManufacturerHandler,
};
use crate::registry::PatternRegistry;
use crate::taxonomy::ComponentType;

#[derive(Debug, thiserror::Error)]
pub enum PartClassError {
    #[error("invalid pattern {pattern:?} from handler {handler}: {source}")]
    Pattern {
        handler: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Classification result for a single MPN. Empty strings and an empty type
/// list are the "not recognized" sentinels - queries never fail.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Classification {
    pub mpn: String,
    /// Name of the owning handler, `None` when no handler claims the MPN.
    pub manufacturer: Option<String>,
    /// Every tag whose registered rules match, generic and qualified.
    pub types: Vec<ComponentType>,
    pub series: String,
    pub package_code: String,
}

impl Classification {
    pub fn is_recognized(&self) -> bool {
        self.manufacturer.is_some()
    }

    fn unrecognized(mpn: &str) -> Self {
        Self {
            mpn: mpn.trim().to_string(),
            manufacturer: None,
            types: Vec::new(),
            series: String::new(),
            package_code: String::new(),
        }
    }
}

/// Aggregate counts for a classified BOM list.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct BomStats {
    pub total: usize,
    pub recognized: usize,
    pub unrecognized: usize,
}

impl BomStats {
    pub fn from_classifications(classifications: &[Classification]) -> Self {
        let recognized = classifications.iter().filter(|c| c.is_recognized()).count();
        Self {
            total: classifications.len(),
            recognized,
            unrecognized: classifications.len() - recognized,
        }
    }
}

/// Handler set plus populated registry; the dispatch/lookup service.
pub struct PartCatalog {
    handlers: Vec<Box<dyn ManufacturerHandler + Send + Sync>>,
    registry: PatternRegistry,
}

/// Built-in handlers in registration order. The order is the documented
/// dispatch tie-break: when two vendors' patterns both claim an MPN, the
/// earlier registration wins (alphabetical by handler name here).
fn builtin_handlers() -> Vec<Box<dyn ManufacturerHandler + Send + Sync>> {
    vec![
        Box::new(AbraconHandler::new()),
        Box::new(AkmHandler::new()),
        Box::new(AsmediaHandler::new()),
        Box::new(ElnaHandler::new()),
        Box::new(KdsHandler::new()),
        Box::new(LittelfuseHandler::new()),
    ]
}

impl PartCatalog {
    /// Catalog with all built-in manufacturer handlers.
    ///
    /// A handler whose patterns fail to compile is skipped with a warning
    /// rather than poisoning the whole catalog; built-in patterns are
    /// covered by tests, so this path is not expected to trigger.
    pub fn new() -> Self {
        let mut catalog = Self {
            handlers: Vec::new(),
            registry: PatternRegistry::new(),
        };
        for handler in builtin_handlers() {
            if let Err(e) = handler.initialize_patterns(&mut catalog.registry) {
                tracing::warn!("skipping handler {}: {}", handler.name(), e);
                continue;
            }
            catalog.handlers.push(handler);
        }
        tracing::debug!(
            handlers = catalog.handlers.len(),
            patterns = catalog.registry.pattern_count(),
            "catalog initialized"
        );
        catalog
    }

    /// Catalog with an explicit handler set, in the given registration
    /// order. Used for test isolation and custom vendor sets; fails if any
    /// handler registers an invalid pattern.
    pub fn with_handlers(
        handlers: Vec<Box<dyn ManufacturerHandler + Send + Sync>>,
    ) -> Result<Self, PartClassError> {
        let mut registry = PatternRegistry::new();
        for handler in &handlers {
            handler.initialize_patterns(&mut registry)?;
        }
        Ok(Self { handlers, registry })
    }

    /// The shared pattern registry (read-only after construction).
    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Registered handlers, in dispatch order.
    pub fn handlers(&self) -> impl Iterator<Item = &(dyn ManufacturerHandler + Send + Sync)> {
        self.handlers.iter().map(|h| h.as_ref())
    }

    /// Find the handler that owns `mpn`: probe handlers in registration
    /// order and return the first whose own rules match any of its
    /// supported types.
    pub fn find_handler(&self, mpn: &str) -> Option<&(dyn ManufacturerHandler + Send + Sync)> {
        if mpn.trim().is_empty() {
            return None;
        }
        for handler in &self.handlers {
            let claimed = handler
                .supported_types()
                .iter()
                .any(|ty| handler.matches(mpn, *ty, &self.registry));
            if claimed {
                tracing::trace!(mpn, handler = handler.name(), "dispatch");
                return Some(handler.as_ref());
            }
        }
        None
    }

    /// Classify a single MPN: matched tags, owning manufacturer, normalized
    /// series and package code. Never fails; unrecognized input yields the
    /// empty sentinels.
    pub fn classify(&self, mpn: &str) -> Classification {
        let handler = match self.find_handler(mpn) {
            Some(handler) => handler,
            None => return Classification::unrecognized(mpn),
        };

        let types: Vec<ComponentType> = ComponentType::ALL
            .iter()
            .filter(|ty| self.registry.matches(mpn, **ty))
            .copied()
            .collect();

        Classification {
            mpn: mpn.trim().to_string(),
            manufacturer: Some(handler.name().to_string()),
            types,
            series: handler.extract_series(mpn),
            package_code: handler.extract_package_code(mpn),
        }
    }

    /// Replacement verdict across the whole catalog: both MPNs must belong
    /// to the same handler, and that handler's family rules must accept the
    /// substitution.
    pub fn is_official_replacement(&self, candidate: &str, original: &str) -> bool {
        let candidate_handler = match self.find_handler(candidate) {
            Some(handler) => handler,
            None => return false,
        };
        match self.find_handler(original) {
            Some(original_handler) if original_handler.name() == candidate_handler.name() => {
                candidate_handler.is_official_replacement(candidate, original)
            }
            _ => false,
        }
    }

    /// Classify a BOM list file: one MPN per line, blank lines and `#`
    /// comments skipped.
    pub fn classify_bom(&self, path: &Path) -> Result<Vec<Classification>, PartClassError> {
        let content = std::fs::read_to_string(path)?;
        Ok(self.classify_lines(&content))
    }

    /// Classify every MPN line in a string (the `classify_bom` core,
    /// separated for callers that already hold the content).
    pub fn classify_lines(&self, content: &str) -> Vec<Classification> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| self.classify(line))
            .collect()
    }
}

impl Default for PartCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Discover BOM list files (`.bom` / `.txt`) in a directory, one level deep.
pub fn discover_bom_files(dir: &Path) -> Result<Vec<PathBuf>, PartClassError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
            match ext {
                "bom" | "txt" => files.push(path),
                _ => {}
            }
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_all_builtin_handlers() {
        let catalog = PartCatalog::new();
        let names: Vec<&str> = catalog.handlers().map(|h| h.name()).collect();
        assert_eq!(
            names,
            vec!["abracon", "akm", "asmedia", "elna", "kds", "littelfuse"]
        );
        assert!(catalog.registry().pattern_count() > 0);
    }

    #[test]
    fn test_find_handler_dispatch() {
        let catalog = PartCatalog::new();
        assert_eq!(
            catalog.find_handler("ABM3-12.000MHZ-B2-T").map(|h| h.name()),
            Some("abracon")
        );
        assert_eq!(
            catalog.find_handler("DSX321GA").map(|h| h.name()),
            Some("kds")
        );
        assert_eq!(
            catalog.find_handler("SMAJ5.0A").map(|h| h.name()),
            Some("littelfuse")
        );
        assert!(catalog.find_handler("TOTALLY-UNKNOWN-01").is_none());
        assert!(catalog.find_handler("").is_none());
    }

    #[test]
    fn test_classify_recognized() {
        let catalog = PartCatalog::new();
        let result = catalog.classify("AK8963C");
        assert!(result.is_recognized());
        assert_eq!(result.manufacturer.as_deref(), Some("akm"));
        assert_eq!(result.series, "AK8963");
        assert_eq!(result.package_code, "QFN");
        assert!(result.types.contains(&ComponentType::Sensor));
        assert!(result.types.contains(&ComponentType::SensorAkm));
    }

    #[test]
    fn test_classify_unrecognized_uses_sentinels() {
        let catalog = PartCatalog::new();
        let result = catalog.classify("NOT-A-KNOWN-PART");
        assert!(!result.is_recognized());
        assert!(result.types.is_empty());
        assert_eq!(result.series, "");
        assert_eq!(result.package_code, "");
    }

    #[test]
    fn test_catalog_replacement_requires_same_owner() {
        let catalog = PartCatalog::new();
        assert!(catalog.is_official_replacement("DSX321GA", "DSX321G"));
        assert!(!catalog.is_official_replacement("DSX321G", "ABM3-12.000MHZ"));
        assert!(!catalog.is_official_replacement("", "DSX321G"));
    }

    #[test]
    fn test_classify_lines_skips_comments_and_blanks() {
        let catalog = PartCatalog::new();
        let results = catalog.classify_lines("# header\n\nAK8963C\n  SMAJ5.0A  \n");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].mpn, "AK8963C");
        assert_eq!(results[1].mpn, "SMAJ5.0A");
    }

    #[test]
    fn test_bom_stats() {
        let catalog = PartCatalog::new();
        let results = catalog.classify_lines("AK8963C\nNOPE-123\nSMAJ5.0A\n");
        let stats = BomStats::from_classifications(&results);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.recognized, 2);
        assert_eq!(stats.unrecognized, 1);
    }

    #[test]
    fn test_catalog_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PartCatalog>();
    }
}
