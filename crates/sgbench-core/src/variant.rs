//! Engine/tool option variants compared against the baseline.

use serde::{Deserialize, Serialize};

/// One configuration of the analysis engine and tool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Variant {
    /// Variant name, unique within the variant list.
    pub name: String,

    /// Space-separated flags for the underlying engine, delivered through
    /// the engine environment channel. May be empty.
    pub engine_extra_args: String,

    /// A single extra tool-level argument. Empty means none.
    pub tool_extra_args: String,
}

impl Variant {
    /// Create a new variant.
    pub fn new(name: &str, engine_extra_args: &str, tool_extra_args: &str) -> Self {
        Variant {
            name: name.to_string(),
            engine_extra_args: engine_extra_args.to_string(),
            tool_extra_args: tool_extra_args.to_string(),
        }
    }
}

/// The fixed variant list, run in this order for every corpus.
///
/// `std` is the baseline; the others each toggle one engine knob
/// (result caching, bloom-filter prefiltering, GC tuning) or disable
/// tool-level rule filtering.
pub fn variants() -> Vec<Variant> {
    vec![
        Variant::new("std", "", ""),
        Variant::new("no-cache", "-no_opt_cache", ""),
        Variant::new("max-cache", "-opt_max_cache", ""),
        Variant::new("no-bloom", "-no_bloom_filter", ""),
        Variant::new("no-gc-tuning", "-no_gc_tuning", ""),
        Variant::new("no-filter", "", "--no-rule-filtering"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_variant_names_unique() {
        let list = variants();
        let names: BTreeSet<&str> = list.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names.len(), list.len());
    }

    #[test]
    fn test_baseline_is_first_and_empty() {
        let list = variants();
        assert_eq!(list[0].name, "std");
        assert!(list[0].engine_extra_args.is_empty());
        assert!(list[0].tool_extra_args.is_empty());
    }

    #[test]
    fn test_no_filter_is_tool_level() {
        let list = variants();
        let no_filter = list.iter().find(|v| v.name == "no-filter").unwrap();
        assert!(no_filter.engine_extra_args.is_empty());
        assert!(!no_filter.tool_extra_args.is_empty());
    }
}
