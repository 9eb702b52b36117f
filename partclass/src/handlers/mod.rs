//! Manufacturer Handlers Module
//!
//! One handler per vendor, each implementing the [`ManufacturerHandler`]
//! trait: it registers that vendor's match rules into a shared
//! [`PatternRegistry`], extracts normalized attributes (series, package
//! code), and answers replacement-compatibility queries for its own parts.
//!
//! Handlers are stateless. They hold no result state between calls, their
//! supported-type sets are `'static` slices fixed at compile time, and they
//! can initialize any number of independent registries - which is what makes
//! per-test catalogs cheap.
//!
//! Built-in vendors:
//! - Abracon (crystals, oscillators)
//! - Asahi Kasei / AKM (magnetic sensors, audio ICs)
//! - ASMedia (USB/SATA/NVMe bridge ICs)
//! - Elna (aluminum electrolytic capacitors)
//! - KDS Daishinku (crystals)
//! - Littelfuse (TVS diodes)

pub mod abracon;
pub mod akm;
pub mod asmedia;
pub mod elna;
pub mod kds;
pub mod littelfuse;

use crate::core::PartClassError;
use crate::registry::PatternRegistry;
use crate::taxonomy::ComponentType;

/// Per-vendor rule ownership: classification patterns, attribute extraction,
/// and the replacement-compatibility predicate.
///
/// Every query is a pure function of its string inputs. Empty or
/// non-matching input yields the documented sentinel (`false` for
/// predicates, `""` for extractors) - never a panic, never an error.
pub trait ManufacturerHandler: Send + Sync {
    /// Stable handler identity, used as the owner tag on registered
    /// patterns and as the manufacturer name in classification results.
    fn name(&self) -> &'static str;

    /// Register all of this vendor's patterns into `registry`.
    ///
    /// Safe to call against any number of independent registry instances;
    /// handlers carry no shared state between them.
    fn initialize_patterns(&self, registry: &mut PatternRegistry) -> Result<(), PartClassError>;

    /// Vendor-scoped match query: does `mpn` match any pattern *this
    /// handler* registered for `component_type`?
    ///
    /// The default delegates to [`PatternRegistry::matches_owned`], which
    /// evaluates the handler's full rule list for the type. Testing only
    /// the first stored rule is a known under-matching defect for types
    /// with several disjoint prefixes; see the regression test in
    /// `tests/registry_tests.rs`.
    fn matches(
        &self,
        mpn: &str,
        component_type: ComponentType,
        registry: &PatternRegistry,
    ) -> bool {
        registry.matches_owned(mpn, component_type, self.name())
    }

    /// Normalized family identifier, or `""` for empty/non-matching input.
    fn extract_series(&self, mpn: &str) -> String;

    /// Normalized package/mechanical descriptor, or `""` on no match.
    /// Unknown suffixes fall back to the raw, unmapped token.
    fn extract_package_code(&self, mpn: &str) -> String;

    /// True iff `candidate` can substitute for `original` under this
    /// vendor's rules. Not symmetric in general: several families define an
    /// upgrade direction (automotive grade, newer generation, premium tier)
    /// where the better part replaces the lesser one but not the reverse.
    fn is_official_replacement(&self, candidate: &str, original: &str) -> bool;

    /// All tags this handler can produce. Fixed at compile time; the
    /// returned slice is immutable by construction.
    fn supported_types(&self) -> &'static [ComponentType];

    /// Manufacturer-qualified tags owned by this handler. May be empty for
    /// handlers that only use generic tags.
    fn manufacturer_types(&self) -> &'static [ComponentType] {
        &[]
    }
}

/// Uppercased, trimmed copy of an MPN. All extraction works on this form so
/// matching stays case-insensitive end to end.
pub(crate) fn normalize(mpn: &str) -> String {
    mpn.trim().to_ascii_uppercase()
}

/// Map `key` through a suffix/prefix lookup table, falling back to the raw
/// token when unmapped so callers always get some string back.
pub(crate) fn lookup_or_raw(table: &[(&str, &str)], key: &str) -> String {
    table
        .iter()
        .find(|(code, _)| code.eq_ignore_ascii_case(key))
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| key.to_string())
}
