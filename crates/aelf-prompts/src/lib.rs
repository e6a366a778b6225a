//! Prompt builders for LLM-assisted security audits of the AElf contract suite.
//!
//! `aelf-prompts` turns a file path, a question, or a vulnerability report
//! into a ready-to-send prompt. It never talks to a model itself; the output
//! is plain text for whatever consumer runs the audit.
//!
//! Four builders cover the workflow:
//!
//! - [`question_prompt`]: generate audit questions for one contract file.
//! - [`validation_prompt`]: judge whether a reported vulnerability is real.
//! - [`audit_prompt`]: investigate one security question end to end.
//! - [`scan_prompt`]: look for analogs of another protocol's vulnerability.
//!
//! [`TargetConfig`] resolves which repository page the consumer should read,
//! rotating through mirrors by CI run number.
//!
//! # Library usage
//!
//! ```ignore
//! use aelf_prompts::{TargetConfig, audit_prompt};
//!
//! let url = TargetConfig::from_env().target_url()?;
//! let prompt = audit_prompt("Can a non-miner update the consensus round?");
//! ```
//!
//! # Binary
//!
//! ```sh
//! aelf-prompts questions contract/AElf.Contracts.Vote/VoteContract.cs
//! aelf-prompts validate --file finding.md
//! cat external.md | aelf-prompts --json scan --stdin
//! GITHUB_RUN_NUMBER=31 aelf-prompts target-url
//! ```

pub mod config;
pub mod error;
pub mod index;
pub mod input;
pub mod prompt;
pub mod scope;
pub mod template;

pub use config::TargetConfig;
pub use error::PromptError;
pub use index::cyclic_index;
pub use prompt::{
    PromptKind, RenderedPrompt, audit_prompt, question_prompt, scan_prompt, validation_prompt,
};
pub use scope::{SCOPE_FILES, is_in_scope};
