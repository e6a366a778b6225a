//! Placeholder substitution over embedded prompt templates.
//!
//! Templates are plain text with `{name}` placeholders, where `name` is made
//! of lowercase ASCII letters and underscores. Any other brace text is copied
//! through untouched. Rendering is a single left-to-right pass, so substituted
//! values are never scanned for placeholders themselves.

/// A static prompt template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Template {
    source: &'static str,
}

impl Template {
    /// Wrap a template body, usually one pulled in with `include_str!`.
    pub const fn new(source: &'static str) -> Self {
        Self { source }
    }

    /// The raw template text.
    pub fn source(&self) -> &'static str {
        self.source
    }

    /// Substitute `vars` into the template.
    ///
    /// Placeholders with no matching entry in `vars` are left as they are.
    pub fn render(&self, vars: &[(&str, &str)]) -> String {
        let extra: usize = vars.iter().map(|(_, v)| v.len()).sum();
        let mut out = String::with_capacity(self.source.len() + extra);
        let mut rest = self.source;

        while let Some(open) = rest.find('{') {
            let (before, tail) = rest.split_at(open);
            out.push_str(before);
            let (brace, after) = tail.split_at(1);

            let substituted = split_placeholder(after).and_then(|(name, remainder)| {
                vars.iter()
                    .find(|(key, _)| *key == name)
                    .map(|(_, value)| (*value, remainder))
            });
            match substituted {
                Some((value, remainder)) => {
                    out.push_str(value);
                    rest = remainder;
                }
                None => {
                    out.push_str(brace);
                    rest = after;
                }
            }
        }
        out.push_str(rest);
        out
    }

    /// Distinct placeholder names in first-seen order.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        let mut rest = self.source;
        while let Some(open) = rest.find('{') {
            let (_, tail) = rest.split_at(open + 1);
            match split_placeholder(tail) {
                Some((name, remainder)) => {
                    if !names.contains(&name) {
                        names.push(name);
                    }
                    rest = remainder;
                }
                None => rest = tail,
            }
        }
        names
    }
}

/// Given the text just after a `{`, return the placeholder name and the text
/// after the closing `}`, or `None` if this is not a placeholder.
fn split_placeholder(s: &str) -> Option<(&str, &str)> {
    let close = s.find('}')?;
    let (name, tail) = s.split_at(close);
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_lowercase() || c == '_') {
        return None;
    }
    Some((name, tail.strip_prefix('}')?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substitutes_every_occurrence() {
        let t = Template::new("Focus on `{file}`. Again: {file}.");
        assert_eq!(
            t.render(&[("file", "Vote.cs")]),
            "Focus on `Vote.cs`. Again: Vote.cs."
        );
    }

    #[test]
    fn multiple_names() {
        let t = Template::new("{a}-{b}-{a}");
        assert_eq!(t.render(&[("a", "1"), ("b", "2")]), "1-2-1");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let t = Template::new("claim: {report} / files: {scope}");
        let out = t.render(&[("report", "see {scope} and {report}"), ("scope", "[]")]);
        assert_eq!(out, "claim: see {scope} and {report} / files: []");
    }

    #[test]
    fn non_placeholder_braces_pass_through() {
        let t = Template::new(r#"{"keyword": "x"} {} {Name} {a-b} { {x"#);
        assert_eq!(t.render(&[("x", "!")]), r#"{"keyword": "x"} {} {Name} {a-b} { {x"#);
    }

    #[test]
    fn missing_values_are_left_verbatim() {
        let t = Template::new("hello {who}");
        assert_eq!(t.render(&[]), "hello {who}");
    }

    #[test]
    fn unicode_around_placeholders() {
        let t = Template::new("❌ {x} → ✅");
        assert_eq!(t.render(&[("x", "é")]), "❌ é → ✅");
    }

    #[test]
    fn lists_placeholders_once_in_order() {
        let t = Template::new("{b} {a} {b} {not-one} {c}");
        assert_eq!(t.placeholders(), vec!["b", "a", "c"]);
        assert!(Template::new("no braces").placeholders().is_empty());
    }

    #[test]
    fn nested_brace_before_placeholder() {
        let t = Template::new("{{x}}");
        assert_eq!(t.placeholders(), vec!["x"]);
        assert_eq!(t.render(&[("x", "1")]), "{1}");
    }
}
