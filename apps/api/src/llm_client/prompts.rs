// Shared prompt fragments.
// Each feature that needs LLM calls defines its own prompts.rs alongside it.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Persona shared by the career copilot and the narrative writers.
pub const PLACEMENT_ASSISTANT_SYSTEM: &str = "You are PlacementIQ, a friendly placement \
    assistant for university students. You help with interview preparation, data structures \
    and algorithms practice, resume improvements and career planning. Keep answers short, \
    concrete and actionable.";

/// Truncates to at most `max_chars` characters without splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Fills `{name}` placeholders in a single pass over the template.
/// Substituted values are never rescanned, so user text that happens to
/// contain `{name}` stays literal. Unknown braces are copied through.
pub fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let hit = values.iter().find_map(|(name, value)| {
            tail.strip_prefix(*name)
                .and_then(|after| after.strip_prefix('}'))
                .map(|after| (*value, after))
        });
        match hit {
            Some((value, after)) => {
                out.push_str(value);
                rest = after;
            }
            None => {
                out.push('{');
                rest = tail;
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template_replaces_known_placeholders() {
        let filled = fill_template("Role: {role}, skills: {skills}.", &[("role", "SDE"), ("skills", "Go")]);
        assert_eq!(filled, "Role: SDE, skills: Go.");
    }

    #[test]
    fn test_fill_template_keeps_json_braces() {
        let filled = fill_template("{\n  \"questions\": []\n} for {role}", &[("role", "SDE")]);
        assert_eq!(filled, "{\n  \"questions\": []\n} for SDE");
    }

    #[test]
    fn test_fill_template_does_not_expand_inside_values() {
        let filled = fill_template(
            "{role} knows {skills}",
            &[("role", "Dev {skills}"), ("skills", "Rust")],
        );
        assert_eq!(filled, "Dev {skills} knows Rust");
    }

    #[test]
    fn test_truncate_shorter_text_unchanged() {
        assert_eq!(truncate_chars("abc", 10), "abc");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo");
    }

    #[test]
    fn test_truncate_exact_length() {
        assert_eq!(truncate_chars("abcde", 5), "abcde");
    }
}
