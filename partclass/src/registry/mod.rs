//! Pattern Registry
//!
//! Shared table mapping a [`ComponentType`] to the ordered list of compiled
//! match rules registered for it. Handlers populate the registry exactly once
//! during catalog construction; after that every method takes `&self`, so the
//! build-once/read-many discipline is enforced by the borrow checker and the
//! table can be shared across threads without locking.
//!
//! Matching semantics:
//!
//! - [`PatternRegistry::matches`] is the authoritative entry point: logical OR
//!   over *all* rules registered under the type. Registration order never
//!   changes the boolean result.
//! - [`PatternRegistry::first_match`] exists for capture-group extraction,
//!   where first-registered-match-first-used applies.
//!
//! A historical shortcut in part-number matchers is to test only the first
//! rule stored for a type. That collapses a multi-valued lookup into a
//! single-valued one and under-matches any type with two disjoint prefixes;
//! `tests/registry_tests.rs` keeps a regression test pinning the difference.

use std::collections::HashMap;

use regex::{Regex, RegexBuilder};

use crate::core::PartClassError;
use crate::taxonomy::ComponentType;

/// One compiled, case-insensitive match rule plus its registration metadata.
#[derive(Debug)]
pub struct PatternEntry {
    component_type: ComponentType,
    handler: &'static str,
    pattern: String,
    regex: Regex,
    sequence: usize,
}

impl PatternEntry {
    /// The type this rule classifies into.
    pub fn component_type(&self) -> ComponentType {
        self.component_type
    }

    /// Name of the handler that registered this rule.
    pub fn handler(&self) -> &'static str {
        self.handler
    }

    /// Original pattern text, for introspection and logging.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Global registration sequence number (lower registered earlier).
    pub fn sequence(&self) -> usize {
        self.sequence
    }

    /// Test this single rule against an MPN.
    pub fn is_match(&self, mpn: &str) -> bool {
        self.regex.is_match(mpn)
    }
}

/// Ordered, build-once table of classification rules.
#[derive(Debug, Default)]
pub struct PatternRegistry {
    entries: HashMap<ComponentType, Vec<PatternEntry>>,
    next_sequence: usize,
}

impl PatternRegistry {
    /// Create an empty registry. Constructed explicitly (never ambient
    /// global state) so tests can build isolated instances.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule under `component_type`.
    ///
    /// The pattern is compiled case-insensitively. Duplicate or overlapping
    /// patterns for the same type are legal; all of them are tried by
    /// [`matches`](Self::matches). Fails only if the pattern does not
    /// compile.
    pub fn register(
        &mut self,
        component_type: ComponentType,
        handler: &'static str,
        pattern: &str,
    ) -> Result<(), PartClassError> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| PartClassError::Pattern {
                handler,
                pattern: pattern.to_string(),
                source,
            })?;

        let sequence = self.next_sequence;
        self.next_sequence += 1;

        self.entries
            .entry(component_type)
            .or_default()
            .push(PatternEntry {
                component_type,
                handler,
                pattern: pattern.to_string(),
                regex,
                sequence,
            });

        tracing::debug!(
            handler,
            %component_type,
            pattern,
            sequence,
            "registered pattern"
        );
        Ok(())
    }

    /// Authoritative match query: true iff `mpn` is non-empty and at least
    /// one rule registered under `component_type` matches.
    ///
    /// Unknown type or empty MPN returns `false`, never an error.
    pub fn matches(&self, mpn: &str, component_type: ComponentType) -> bool {
        if mpn.trim().is_empty() {
            return false;
        }
        self.entries
            .get(&component_type)
            .map(|rules| rules.iter().any(|rule| rule.is_match(mpn)))
            .unwrap_or(false)
    }

    /// Vendor-scoped match query: like [`matches`](Self::matches) but
    /// restricted to the rules a particular handler registered for the type.
    ///
    /// Generic types such as `Crystal` collect rules from several vendors;
    /// dispatch uses this method so a handler only claims its own prefixes.
    pub fn matches_owned(
        &self,
        mpn: &str,
        component_type: ComponentType,
        handler: &str,
    ) -> bool {
        if mpn.trim().is_empty() {
            return false;
        }
        self.entries
            .get(&component_type)
            .map(|rules| {
                rules
                    .iter()
                    .filter(|rule| rule.handler == handler)
                    .any(|rule| rule.is_match(mpn))
            })
            .unwrap_or(false)
    }

    /// First-registered rule under `component_type` that matches `mpn`.
    ///
    /// This is the entry point whose capture groups feed attribute
    /// extraction: when several rules overlap, the earliest registration
    /// wins.
    pub fn first_match(&self, mpn: &str, component_type: ComponentType) -> Option<&PatternEntry> {
        if mpn.trim().is_empty() {
            return None;
        }
        self.entries
            .get(&component_type)?
            .iter()
            .find(|rule| rule.is_match(mpn))
    }

    /// All rules for a type, in registration order. Empty slice for an
    /// unknown type.
    pub fn entries(&self, component_type: ComponentType) -> &[PatternEntry] {
        self.entries
            .get(&component_type)
            .map(|rules| rules.as_slice())
            .unwrap_or(&[])
    }

    /// Total number of registered rules.
    pub fn pattern_count(&self) -> usize {
        self.entries.values().map(|rules| rules.len()).sum()
    }

    /// Types with at least one registered rule.
    pub fn types(&self) -> Vec<ComponentType> {
        let mut types: Vec<ComponentType> = self.entries.keys().copied().collect();
        types.sort_by_key(|t| t.as_str());
        types
    }
}
