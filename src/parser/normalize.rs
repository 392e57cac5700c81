/// Strip a markdown code fence from a raw model reply.
///
/// The model is instructed to return bare JSON but will sometimes wrap it in a
/// fenced code block, with or without a `json` tag. A fence tagged `json` wins
/// over an untagged one. This is a best-effort heuristic that assumes at most
/// one relevant fenced block, not a markdown parser; nested fences are not
/// handled and an unterminated fence falls back to the trimmed input.
pub fn normalize_response(raw: &str) -> &str {
    if let Some(inner) = fenced_block(raw, "```json").or_else(|| fenced_block(raw, "```")) {
        return inner;
    }
    raw.trim()
}

/// Return the content between the first fence starting with `opener` and the
/// next closing fence, if both exist.
fn fenced_block<'a>(raw: &'a str, opener: &str) -> Option<&'a str> {
    let start = raw.find(opener)? + opener.len();
    let rest = &raw[start..];

    // Content begins after the remainder of the opener line, which may carry a
    // language tag.
    let content_start = rest.find('\n').map(|i| i + 1).unwrap_or(rest.len());
    let content = &rest[content_start..];

    let end = content.find("```")?;
    Some(content[..end].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_tagged_fence_is_stripped() {
        let raw = "```json\n[{\"title\":\"A\",\"date\":\"2024-01-01\"}]\n```";
        assert_eq!(
            normalize_response(raw),
            "[{\"title\":\"A\",\"date\":\"2024-01-01\"}]"
        );
    }

    #[test]
    fn test_untagged_fence_is_stripped() {
        let raw = "```\n[1, 2, 3]\n```";
        assert_eq!(normalize_response(raw), "[1, 2, 3]");
    }

    #[test]
    fn test_fence_with_other_tag_is_stripped() {
        let raw = "```text\n[1, 2, 3]\n```";
        assert_eq!(normalize_response(raw), "[1, 2, 3]");
    }

    #[test]
    fn test_surrounding_prose_is_dropped() {
        let raw = "Here is the result:\n```json\n[]\n```\nLet me know if you need more.";
        assert_eq!(normalize_response(raw), "[]");
    }

    #[test]
    fn test_bare_json_is_unchanged() {
        let raw = "[{\"title\":\"A\",\"date\":\"2024-01-01\"}]";
        assert_eq!(normalize_response(raw), raw);
    }

    #[test]
    fn test_bare_text_is_trimmed() {
        assert_eq!(normalize_response("  [1]\n"), "[1]");
    }

    #[test]
    fn test_idempotent_on_already_normalized_input() {
        let raw = "```json\n[null]\n```";
        let once = normalize_response(raw);
        assert_eq!(normalize_response(once), once);
    }

    #[test]
    fn test_unterminated_fence_falls_back_to_trimmed_input() {
        let raw = "```json\n[1, 2, 3]";
        assert_eq!(normalize_response(raw), raw.trim());
    }
}
