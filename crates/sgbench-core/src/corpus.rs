//! Corpus definitions and the static benchmark registries.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One benchmark case: a rule-set paired with a target codebase.
///
/// Paths may be relative; they are resolved against the corpus working
/// directory only when an invocation is built.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Corpus {
    /// Corpus name, unique within a registry. Also the name of the
    /// corpus subdirectory under the benchmark root.
    pub name: String,

    /// Directory holding the rule files.
    pub rule_dir: PathBuf,

    /// Directory holding the target codebase.
    pub target_dir: PathBuf,
}

impl Corpus {
    /// Create a new corpus entry.
    pub fn new(name: &str, rule_dir: &str, target_dir: &str) -> Self {
        Corpus {
            name: name.to_string(),
            rule_dir: PathBuf::from(rule_dir),
            target_dir: PathBuf::from(target_dir),
        }
    }
}

/// The four disjoint corpus catalogs. Exactly one is active per run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CorpusSet {
    /// Public benchmark set (the default).
    Standard,

    /// Tiny set for fast development iterations.
    Dummy,

    /// GitLab CI-partner rule packs.
    Gitlab,

    /// Internal-only rule packs.
    Internal,
}

impl CorpusSet {
    /// Map the mutually exclusive CLI selection flags to a catalog.
    /// Standard when no flag is given.
    pub fn from_flags(dummy: bool, gitlab: bool, internal: bool) -> Self {
        match (dummy, gitlab, internal) {
            (true, _, _) => CorpusSet::Dummy,
            (_, true, _) => CorpusSet::Gitlab,
            (_, _, true) => CorpusSet::Internal,
            _ => CorpusSet::Standard,
        }
    }

    /// Get the catalog name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            CorpusSet::Standard => "standard",
            CorpusSet::Dummy => "dummy",
            CorpusSet::Gitlab => "gitlab",
            CorpusSet::Internal => "internal",
        }
    }

    /// Build this catalog's corpus list.
    pub fn corpora(&self) -> Vec<Corpus> {
        match self {
            CorpusSet::Standard => standard_corpora(),
            CorpusSet::Dummy => dummy_corpora(),
            CorpusSet::Gitlab => gitlab_corpora(),
            CorpusSet::Internal => internal_corpora(),
        }
    }
}

/// Public benchmark set: real OSS codebases with the matching language
/// rule packs.
pub fn standard_corpora() -> Vec<Corpus> {
    vec![
        Corpus::new("zulip", "rules/python", "targets/zulip"),
        Corpus::new("juice-shop", "rules/javascript", "targets/juice-shop"),
        Corpus::new("netty", "rules/java", "targets/netty"),
        Corpus::new("lodash", "rules/javascript", "targets/lodash"),
    ]
}

/// Minimal set for development: one tiny corpus, seconds to run.
pub fn dummy_corpora() -> Vec<Corpus> {
    vec![Corpus::new("dummy", "rules", "targets")]
}

/// GitLab CI-partner set.
pub fn gitlab_corpora() -> Vec<Corpus> {
    vec![
        Corpus::new("gitlab-rails", "rules/gitlab", "targets/gitlab-rails"),
        Corpus::new("gitaly", "rules/gitlab", "targets/gitaly"),
    ]
}

/// Internal-only set. Rule packs are not published; the preparation hook
/// fetches them from internal storage.
pub fn internal_corpora() -> Vec<Corpus> {
    vec![
        Corpus::new("internal-monorepo", "rules/internal", "targets/monorepo"),
        Corpus::new("internal-services", "rules/internal", "targets/services"),
    ]
}
