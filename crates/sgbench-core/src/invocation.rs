//! Building analysis-tool invocations (containerized or native).

use crate::config::BenchConfig;
use crate::corpus::Corpus;
use crate::error::Result;
use crate::variant::Variant;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

/// Environment variable carrying the engine's low-level option string
/// (caching, filtering, GC tuning). Set on every invocation, possibly
/// to the empty string.
pub const ENGINE_ENV_VAR: &str = "SEMGREP_CORE_EXTRA";

/// Mount point for the rule directory inside the container.
pub const CONTAINER_RULES: &str = "/rules";

/// Mount point for the target directory inside the container.
pub const CONTAINER_TARGETS: &str = "/targets";

// Benchmark inputs are intentionally kept out of version control, hence
// --no-git-ignore. --timeout 0 disables the tool's per-run limit; some
// corpora legitimately take hours.
const REQUIRED_FLAGS: [&str; 5] = ["--strict", "--timeout", "0", "--verbose", "--no-git-ignore"];

/// One fully assembled child-process invocation. Built fresh per
/// (corpus, variant) pair and never reused.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Invocation {
    /// Argument vector; the first element is the executable.
    pub args: Vec<String>,

    /// Environment overrides applied to the child process only.
    pub env: Vec<(String, String)>,
}

/// Resolve a corpus path against the current (corpus) working directory.
fn absolutize(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(env::current_dir()?.join(path))
    }
}

/// Build the invocation for one (corpus, variant) pair.
///
/// With a container image configured, the rule and target directories
/// are bind-mounted at fixed in-container paths; docker does not resolve
/// relative host paths, so both are absolutized first. Native execution
/// passes the absolute paths directly (the tool requires them in that
/// mode).
pub fn build_invocation(
    config: &BenchConfig,
    corpus: &Corpus,
    variant: &Variant,
) -> Result<Invocation> {
    let rule_dir = absolutize(&corpus.rule_dir)?;
    let target_dir = absolutize(&corpus.target_dir)?;

    let mut args: Vec<String> = match &config.docker_image {
        Some(image) => vec![
            "docker".to_string(),
            "run".to_string(),
            "--rm".to_string(),
            "-v".to_string(),
            format!("{}:{}", rule_dir.display(), CONTAINER_RULES),
            "-v".to_string(),
            format!("{}:{}", target_dir.display(), CONTAINER_TARGETS),
            // Valueless -e forwards the runner-applied override into the
            // container.
            "-e".to_string(),
            ENGINE_ENV_VAR.to_string(),
            image.clone(),
            "--config".to_string(),
            CONTAINER_RULES.to_string(),
            CONTAINER_TARGETS.to_string(),
        ],
        None => vec![
            config.tool.clone(),
            "--config".to_string(),
            rule_dir.display().to_string(),
            target_dir.display().to_string(),
        ],
    };

    args.extend(REQUIRED_FLAGS.iter().map(|f| f.to_string()));

    if !variant.tool_extra_args.is_empty() {
        args.push(variant.tool_extra_args.clone());
    }

    Ok(Invocation {
        args,
        env: vec![(
            ENGINE_ENV_VAR.to_string(),
            variant.engine_extra_args.clone(),
        )],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relative_corpus() -> Corpus {
        Corpus::new("c1", "rules", "targets")
    }

    fn native_config() -> BenchConfig {
        BenchConfig::default()
    }

    fn docker_config() -> BenchConfig {
        BenchConfig::default().with_docker_image("semgrep/semgrep:latest")
    }

    fn baseline() -> Variant {
        Variant::new("v1", "", "")
    }

    #[test]
    fn test_native_branch_passes_absolute_paths() {
        let inv =
            build_invocation(&native_config(), &relative_corpus(), &baseline()).unwrap();

        assert_eq!(inv.args[0], "semgrep");
        assert_eq!(inv.args[1], "--config");
        assert!(Path::new(&inv.args[2]).is_absolute(), "rule dir: {}", inv.args[2]);
        assert!(Path::new(&inv.args[3]).is_absolute(), "target dir: {}", inv.args[3]);
        assert!(inv.args[2].ends_with("rules"));
        assert!(inv.args[3].ends_with("targets"));
    }

    #[test]
    fn test_container_branch_mounts_absolute_paths() {
        let inv = build_invocation(&docker_config(), &relative_corpus(), &baseline()).unwrap();

        assert_eq!(inv.args[0], "docker");
        let mounts: Vec<&String> = inv
            .args
            .iter()
            .zip(inv.args.iter().skip(1))
            .filter(|(flag, _)| flag.as_str() == "-v")
            .map(|(_, spec)| spec)
            .collect();
        assert_eq!(mounts.len(), 2);

        let (host_rules, guest_rules) = mounts[0].rsplit_once(':').unwrap();
        assert!(Path::new(host_rules).is_absolute(), "host side: {}", host_rules);
        assert_eq!(guest_rules, CONTAINER_RULES);

        let (host_targets, guest_targets) = mounts[1].rsplit_once(':').unwrap();
        assert!(Path::new(host_targets).is_absolute());
        assert_eq!(guest_targets, CONTAINER_TARGETS);
    }

    #[test]
    fn test_container_branch_targets_image_and_fixed_paths() {
        let inv = build_invocation(&docker_config(), &relative_corpus(), &baseline()).unwrap();

        let image_pos = inv
            .args
            .iter()
            .position(|a| a == "semgrep/semgrep:latest")
            .unwrap();
        assert_eq!(inv.args[image_pos + 1], "--config");
        assert_eq!(inv.args[image_pos + 2], CONTAINER_RULES);
        assert_eq!(inv.args[image_pos + 3], CONTAINER_TARGETS);
    }

    #[test]
    fn test_absolute_corpus_paths_pass_through() {
        let corpus = Corpus::new("c1", "/opt/rules", "/opt/targets");
        let inv = build_invocation(&native_config(), &corpus, &baseline()).unwrap();
        assert_eq!(inv.args[2], "/opt/rules");
        assert_eq!(inv.args[3], "/opt/targets");
    }

    #[test]
    fn test_required_flags_in_both_branches() {
        for config in [native_config(), docker_config()] {
            let inv = build_invocation(&config, &relative_corpus(), &baseline()).unwrap();
            for flag in REQUIRED_FLAGS {
                assert!(
                    inv.args.iter().any(|a| a == flag),
                    "missing {} in {:?}",
                    flag,
                    inv.args
                );
            }
        }
    }

    #[test]
    fn test_tool_extra_args_appended_as_one_argument() {
        let variant = Variant::new("no-filter", "", "--no-rule-filtering");
        let with_extra =
            build_invocation(&native_config(), &relative_corpus(), &variant).unwrap();
        let without =
            build_invocation(&native_config(), &relative_corpus(), &baseline()).unwrap();

        assert_eq!(with_extra.args.len(), without.args.len() + 1);
        assert_eq!(with_extra.args.last().unwrap(), "--no-rule-filtering");
    }

    #[test]
    fn test_engine_env_always_set() {
        let empty = build_invocation(&native_config(), &relative_corpus(), &baseline()).unwrap();
        assert_eq!(
            empty.env,
            vec![(ENGINE_ENV_VAR.to_string(), String::new())]
        );

        let variant = Variant::new("no-cache", "-no_opt_cache", "");
        let set = build_invocation(&native_config(), &relative_corpus(), &variant).unwrap();
        assert_eq!(
            set.env,
            vec![(ENGINE_ENV_VAR.to_string(), "-no_opt_cache".to_string())]
        );
    }

    #[test]
    fn test_container_forwards_engine_env() {
        let inv = build_invocation(&docker_config(), &relative_corpus(), &baseline()).unwrap();
        let e_pos = inv.args.iter().position(|a| a == "-e").unwrap();
        assert_eq!(inv.args[e_pos + 1], ENGINE_ENV_VAR);
    }
}
