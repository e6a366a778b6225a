//! The four prompt builders.
//!
//! Each builder substitutes its input into an embedded template from
//! `templates/` and returns the result. They are pure: identical input gives
//! byte-identical output, and the input is embedded verbatim.

use serde::Serialize;

use crate::scope::scope_literal;
use crate::template::Template;

const QUESTIONS: Template = Template::new(include_str!("../templates/questions.md"));
const VALIDATION: Template = Template::new(include_str!("../templates/validation.md"));
const AUDIT: Template = Template::new(include_str!("../templates/audit.md"));
const SCAN: Template = Template::new(include_str!("../templates/scan.md"));

/// Prompt asking for targeted audit questions about one contract file.
///
/// `target_file` is not checked against the scope list here; see
/// [`is_in_scope`](crate::scope::is_in_scope).
pub fn question_prompt(target_file: &str) -> String {
    QUESTIONS.render(&[("target_file", target_file), ("scope_files", scope_literal())])
}

/// Prompt asking a judge model to validate (or reject) a vulnerability report.
pub fn validation_prompt(report: &str) -> String {
    VALIDATION.render(&[("report", report), ("scope_files", scope_literal())])
}

/// Prompt asking for a full investigation of one security question.
pub fn audit_prompt(question: &str) -> String {
    AUDIT.render(&[("question", question)])
}

/// Prompt mapping an external protocol's vulnerability report onto the
/// AElf contracts.
pub fn scan_prompt(external_report: &str) -> String {
    SCAN.render(&[("report", external_report)])
}

/// Which builder to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    Questions,
    Validation,
    Audit,
    Scan,
}

impl PromptKind {
    pub const ALL: [PromptKind; 4] = [Self::Questions, Self::Validation, Self::Audit, Self::Scan];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Questions => "questions",
            Self::Validation => "validation",
            Self::Audit => "audit",
            Self::Scan => "scan",
        }
    }

    /// Run the matching builder on `input`.
    pub fn build(self, input: &str) -> String {
        match self {
            Self::Questions => question_prompt(input),
            Self::Validation => validation_prompt(input),
            Self::Audit => audit_prompt(input),
            Self::Scan => scan_prompt(input),
        }
    }

    /// The embedded template behind this builder.
    pub fn template(self) -> Template {
        match self {
            Self::Questions => QUESTIONS,
            Self::Validation => VALIDATION,
            Self::Audit => AUDIT,
            Self::Scan => SCAN,
        }
    }
}

impl std::fmt::Display for PromptKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A built prompt plus the context needed to use it, as emitted by the
/// binary's `--json` mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedPrompt {
    pub kind: PromptKind,
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_url: Option<String>,
    pub prompt: String,
}

impl RenderedPrompt {
    pub fn new(kind: PromptKind, input: impl Into<String>) -> Self {
        let input = input.into();
        let prompt = kind.build(&input);
        Self {
            kind,
            input,
            target_url: None,
            prompt,
        }
    }

    pub fn with_target_url(mut self, url: impl Into<String>) -> Self {
        self.target_url = Some(url.into());
        self
    }
}
