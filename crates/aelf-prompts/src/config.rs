//! Target configuration with sensible defaults.
//!
//! [`TargetConfig`] captures where the prompt consumer should look up the
//! AElf sources: either the canonical repository page or one of a rotating
//! set of mirrors chosen by the CI run counter. The counter comes from the
//! `GITHUB_RUN_NUMBER` environment variable via
//! [`from_env`](TargetConfig::from_env).

use tracing::debug;

use crate::error::PromptError;
use crate::index::cyclic_index;

/// Environment variable holding the run counter.
pub const RUN_NUMBER_ENV: &str = "GITHUB_RUN_NUMBER";

/// Counter value that selects the canonical repository instead of a mirror.
pub const CANONICAL_RUN: &str = "0";

/// Number of mirrors the counter rotates through.
pub const DEFAULT_MAX_REPO: u32 = 30;

/// Configuration for resolving the target URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetConfig {
    /// Documentation host. Default: `"https://deepwiki.com"`.
    pub host: String,
    /// Canonical `owner/name` repository. Default: `"AElfProject/AElf"`.
    pub source_repo: String,
    /// Owner of the mirror repositories. Default: `"grass-dev-pa"`.
    pub mirror_owner: String,
    /// Mirror repository stem; mirrors are named `{stem}-NNN`. Default: `"aelf"`.
    pub repo_name: String,
    /// Number of mirrors. Default: `30`.
    pub max_repo: u32,
    /// Raw run counter. Default: `"0"`.
    pub run_number: String,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            host: "https://deepwiki.com".to_string(),
            source_repo: "AElfProject/AElf".to_string(),
            mirror_owner: "grass-dev-pa".to_string(),
            repo_name: "aelf".to_string(),
            max_repo: DEFAULT_MAX_REPO,
            run_number: CANONICAL_RUN.to_string(),
        }
    }
}

impl TargetConfig {
    /// Defaults, with the run counter read from `GITHUB_RUN_NUMBER`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) but with a caller-supplied lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let run_number = lookup(RUN_NUMBER_ENV).unwrap_or_else(|| CANONICAL_RUN.to_string());
        Self::default().with_run_number(run_number)
    }

    pub fn with_run_number(mut self, run_number: impl Into<String>) -> Self {
        self.run_number = run_number.into();
        self
    }

    pub fn with_max_repo(mut self, max_repo: u32) -> Self {
        self.max_repo = max_repo;
        self
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_source_repo(mut self, source_repo: impl Into<String>) -> Self {
        self.source_repo = source_repo.into();
        self
    }

    pub fn with_mirror(mut self, owner: impl Into<String>, repo_name: impl Into<String>) -> Self {
        self.mirror_owner = owner.into();
        self.repo_name = repo_name.into();
        self
    }

    /// Check the values that cannot be recovered from at resolution time.
    pub fn validate(&self) -> Result<(), PromptError> {
        if self.max_repo == 0 {
            return Err(PromptError::configuration("max_repo must be at least 1"));
        }
        let fields = [
            ("host", &self.host),
            ("source_repo", &self.source_repo),
            ("mirror_owner", &self.mirror_owner),
            ("repo_name", &self.repo_name),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(PromptError::configuration(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }

    /// Resolve the URL the prompt consumer should read the sources from.
    ///
    /// A counter of exactly `"0"` selects the canonical repository. Anything
    /// else must parse as an integer and picks mirror
    /// `cyclic_index(counter, max_repo)`, zero-padded to three digits.
    pub fn target_url(&self) -> Result<String, PromptError> {
        self.validate()?;
        let host = self.host.trim_end_matches('/');

        if self.run_number == CANONICAL_RUN {
            debug!("run counter is {CANONICAL_RUN}, using canonical repository");
            return Ok(format!("{host}/{}", self.source_repo));
        }

        let run: i64 = self.run_number.trim().parse().map_err(|_| {
            PromptError::invalid_input(format!(
                "run counter '{}' is not an integer",
                self.run_number
            ))
        })?;
        let index = cyclic_index(run, self.max_repo)?;
        debug!(run, index, max_repo = self.max_repo, "resolved mirror index");

        Ok(format!(
            "{host}/{}/{}-{index:03}",
            self.mirror_owner, self.repo_name
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_canonical_repo() {
        let config = TargetConfig::default();
        assert_eq!(config.max_repo, 30);
        assert_eq!(config.run_number, "0");
        assert_eq!(
            config.target_url().unwrap(),
            "https://deepwiki.com/AElfProject/AElf"
        );
    }

    #[test]
    fn lookup_reads_run_number() {
        let config = TargetConfig::from_lookup(|key| {
            (key == RUN_NUMBER_ENV).then(|| "7".to_string())
        });
        assert_eq!(config.run_number, "7");
        assert_eq!(
            config.target_url().unwrap(),
            "https://deepwiki.com/grass-dev-pa/aelf-007"
        );
    }

    #[test]
    fn missing_variable_defaults_to_zero() {
        let config = TargetConfig::from_lookup(|_| None);
        assert_eq!(config.run_number, CANONICAL_RUN);
    }

    #[test]
    fn canonical_url_has_no_suffix() {
        let url = TargetConfig::default().target_url().unwrap();
        assert!(!url.contains("grass-dev-pa"));
        assert!(!url.ends_with("-000"));
        assert_eq!(url.matches("AElfProject/AElf").count(), 1);
    }

    #[test]
    fn counter_wraps_onto_first_mirror() {
        let url = TargetConfig::default()
            .with_run_number("31")
            .target_url()
            .unwrap();
        assert_eq!(url, "https://deepwiki.com/grass-dev-pa/aelf-001");
    }

    #[test]
    fn last_mirror_and_padding() {
        let config = TargetConfig::default();
        let url = |run: &str| config.clone().with_run_number(run).target_url().unwrap();
        assert!(url("30").ends_with("/aelf-030"));
        assert!(url("12").ends_with("/aelf-012"));
        assert!(url("-1").ends_with("/aelf-029"));
        // Only the literal "0" is canonical.
        assert!(url("00").ends_with("/aelf-030"));
        assert!(url(" 31 ").ends_with("/aelf-001"));
    }

    #[test]
    fn wide_indices_are_not_truncated() {
        let url = TargetConfig::default()
            .with_max_repo(5000)
            .with_run_number("1234")
            .target_url()
            .unwrap();
        assert!(url.ends_with("/aelf-1234"));
    }

    #[test]
    fn non_numeric_counter_is_invalid_input() {
        for bad in ["abc", "", "1.5", "12abc", "99999999999999999999"] {
            let err = TargetConfig::default()
                .with_run_number(bad)
                .target_url()
                .unwrap_err();
            assert!(matches!(err, PromptError::InvalidInput(_)), "{bad}: {err}");
        }
    }

    #[test]
    fn zero_bound_is_configuration_error() {
        let config = TargetConfig::default().with_max_repo(0);
        assert!(matches!(
            config.validate(),
            Err(PromptError::Configuration(_))
        ));
        // Rejected even for the canonical counter.
        assert!(matches!(
            config.target_url(),
            Err(PromptError::Configuration(_))
        ));
    }

    #[test]
    fn empty_components_are_rejected() {
        let config = TargetConfig::default().with_mirror("", "aelf");
        assert!(matches!(
            config.validate(),
            Err(PromptError::Configuration(msg)) if msg.contains("mirror_owner")
        ));
    }

    #[test]
    fn custom_host_and_repo() {
        let config = TargetConfig::default()
            .with_host("https://wiki.example.org/")
            .with_source_repo("acme/chain")
            .with_mirror("mirrors", "chain");
        assert_eq!(
            config.target_url().unwrap(),
            "https://wiki.example.org/acme/chain"
        );
        assert_eq!(
            config.with_run_number("2").target_url().unwrap(),
            "https://wiki.example.org/mirrors/chain-002"
        );
    }
}
