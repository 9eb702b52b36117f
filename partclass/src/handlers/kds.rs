//! KDS Daishinku handler: quartz crystal units (DSX/DST/DSB series).
//!
//! KDS base codes carry the series and a cut/variant letter (`DSX321G`);
//! an extra trailing `A` marks the AEC-Q200 qualified automotive grade
//! (`DSX321GA`). Grade introduces the one asymmetric rule in this family:
//! the automotive part is an official replacement for the standard part,
//! the standard part is never a replacement for the automotive one.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::PartClassError;
use crate::handlers::{lookup_or_raw, normalize, ManufacturerHandler};
use crate::registry::PatternRegistry;
use crate::taxonomy::ComponentType;

static SERIES_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(DS[XTB]\d{3,4}[B-Z]?)").expect("kds series regex"));

static FREQUENCY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[- ](\d+(?:\.\d+)?)(?:MHZ)?$").expect("kds frequency regex"));

/// Numeric part of the series encodes the body size.
const PACKAGES: &[(&str, &str)] = &[
    ("DSX321", "3.2 x 2.5 mm"),
    ("DSX221", "2.5 x 1.8 mm"),
    ("DSX531", "5.0 x 3.2 mm"),
    ("DSX1612", "1.6 x 1.2 mm"),
    ("DST310", "3.1 x 1.5 mm"),
    ("DST210", "2.0 x 1.2 mm"),
    ("DSB321", "3.2 x 2.5 mm"),
];

pub struct KdsHandler;

impl KdsHandler {
    pub fn new() -> Self {
        Self
    }

    /// True when the ordering code carries the automotive-grade `A` right
    /// after the base series (`DSX321GA`).
    pub fn is_automotive_grade(&self, mpn: &str) -> bool {
        let mpn = normalize(mpn);
        let series = self.extract_series(&mpn);
        if series.is_empty() {
            return false;
        }
        mpn[series.len()..].starts_with('A')
    }

    /// Nominal frequency in MHz, when the ordering code spells one out.
    pub fn extract_frequency_mhz(&self, mpn: &str) -> Option<f64> {
        let mpn = normalize(mpn);
        FREQUENCY_RE
            .captures(&mpn)?
            .get(1)?
            .as_str()
            .parse::<f64>()
            .ok()
    }
}

impl Default for KdsHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl ManufacturerHandler for KdsHandler {
    fn name(&self) -> &'static str {
        "kds"
    }

    fn initialize_patterns(&self, registry: &mut PatternRegistry) -> Result<(), PartClassError> {
        let patterns = [r"^DSX\d{3,4}[A-Z]", r"^DST\d{3}[A-Z]?", r"^DSB\d{3}[A-Z]?"];
        for pattern in patterns {
            registry.register(ComponentType::Crystal, self.name(), pattern)?;
            registry.register(ComponentType::CrystalKds, self.name(), pattern)?;
        }
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
        // Drop the trailing cut letter: DSX321G -> DSX321.
        let numeric_end = series
            .rfind(|c: char| c.is_ascii_digit())
            .map(|i| i + 1)
            .unwrap_or(series.len());
        lookup_or_raw(PACKAGES, &series[..numeric_end])
    }

    fn is_official_replacement(&self, candidate: &str, original: &str) -> bool {
        let candidate_series = self.extract_series(candidate);
        let original_series = self.extract_series(original);
        if candidate_series.is_empty() || candidate_series != original_series {
            return false;
        }

        if self.extract_frequency_mhz(candidate) != self.extract_frequency_mhz(original) {
            return false;
        }

        // Grade is a strict partial order: automotive replaces standard,
        // never the reverse.
        let candidate_auto = self.is_automotive_grade(candidate);
        let original_auto = self.is_automotive_grade(original);
        candidate_auto == original_auto || (candidate_auto && !original_auto)
    }

    fn supported_types(&self) -> &'static [ComponentType] {
        &[ComponentType::Crystal, ComponentType::CrystalKds]
    }

    fn manufacturer_types(&self) -> &'static [ComponentType] {
        &[ComponentType::CrystalKds]
    }
}
