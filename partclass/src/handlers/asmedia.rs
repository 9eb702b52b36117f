//! ASMedia handler: USB-to-SATA / USB-to-NVMe bridge controllers.
//!
//! Bridge generations form a strict partial order: a newer controller with a
//! superset of capabilities (added UASP, TRIM pass-through) is an official
//! replacement for the generation it superseded, never the reverse. The
//! order is a fixed table taken from ASMedia's migration notes, not
//! inferred from the part numbers. NVMe bridges (ASM236x) sit outside the
//! SATA chain entirely - no cross-protocol replacement in either direction.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::PartClassError;
use crate::handlers::{lookup_or_raw, normalize, ManufacturerHandler};
use crate::registry::PatternRegistry;
use crate::taxonomy::ComponentType;

static SERIES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(ASM\d{3,4})([A-Z]{0,3})").expect("asmedia series regex"));

/// Series to package, per datasheet mechanical drawings.
const PACKAGES: &[(&str, &str)] = &[
    ("ASM1051", "QFN-48"),
    ("ASM1053", "QFN-48"),
    ("ASM1153", "QFN-48"),
    ("ASM1351", "QFN-48"),
    ("ASM2362", "QFN-42"),
    ("ASM235", "QFN-64"),
];

/// Upgrade paths: the left part replaces any of the right parts. One
/// direction only.
const GENERATION_UPGRADES: &[(&str, &[&str])] = &[
    ("ASM1153E", &["ASM1153", "ASM1053E", "ASM1053", "ASM1051E", "ASM1051"]),
    ("ASM1153", &["ASM1053", "ASM1051"]),
    ("ASM1053E", &["ASM1053", "ASM1051E", "ASM1051"]),
    ("ASM1053", &["ASM1051"]),
];

pub struct AsmediaHandler;

impl AsmediaHandler {
    pub fn new() -> Self {
        Self
    }

    /// Full normalized controller code (series + capability suffix).
    fn full_code(&self, mpn: &str) -> String {
        let mpn = normalize(mpn);
        SERIES_RE
            .captures(&mpn)
            .map(|caps| {
                format!(
                    "{}{}",
                    caps.get(1).map(|m| m.as_str()).unwrap_or(""),
                    caps.get(2).map(|m| m.as_str()).unwrap_or("")
                )
            })
            .unwrap_or_default()
    }
}

impl Default for AsmediaHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManufacturerHandler for AsmediaHandler {
    fn name(&self) -> &'static str {
        "asmedia"
    }

    fn initialize_patterns(&self, registry: &mut PatternRegistry) -> Result<(), PartClassError> {
        let pattern = r"^ASM\d{3,4}";
        registry.register(ComponentType::Ic, self.name(), pattern)?;
        registry.register(ComponentType::IcAsmedia, self.name(), pattern)?;
        Ok(())
    }

    fn extract_series(&self, mpn: &str) -> String {
        let mpn = normalize(mpn);
        SERIES_RE
            .captures(&mpn)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    }

    fn extract_package_code(&self, mpn: &str) -> String {
        let series = self.extract_series(mpn);
        if series.is_empty() {
            return String::new();
        }
        lookup_or_raw(PACKAGES, &series)
    }

    fn is_official_replacement(&self, candidate: &str, original: &str) -> bool {
        let candidate_code = self.full_code(candidate);
        let original_code = self.full_code(original);
        if candidate_code.is_empty() || original_code.is_empty() {
            return false;
        }
        if candidate_code == original_code {
            return true;
        }
        GENERATION_UPGRADES
            .iter()
            .any(|(newer, replaced)| *newer == candidate_code && replaced.contains(&original_code.as_str()))
    }

    fn supported_types(&self) -> &'static [ComponentType] {
        &[ComponentType::Ic, ComponentType::IcAsmedia]
    }

    fn manufacturer_types(&self) -> &'static [ComponentType] {
        &[ComponentType::IcAsmedia]
    }
}
