/// Quality keywords appended by [`enhance_prompt`]. The first keyword doubles
/// as the marker: a prompt already carrying it is returned unchanged.
pub const ENHANCEMENT_KEYWORDS: &str =
    "highly detailed, sharp focus, 8k, cinematic lighting";

const MARKER: &str = "highly detailed";

/// Appends the fixed quality-boosting keywords to a prompt. Purely local
/// text transformation; idempotent.
pub fn enhance_prompt(prompt: &str) -> String {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    if trimmed.to_lowercase().contains(MARKER) {
        return trimmed.to_string();
    }

    let base = trimmed.trim_end_matches([',', '.']).trim_end();
    format!("{}, {}", base, ENHANCEMENT_KEYWORDS)
}

#[cfg(test)]
mod tests {
    use super::{enhance_prompt, ENHANCEMENT_KEYWORDS};

    #[test]
    fn appends_quality_keywords() {
        let out = enhance_prompt("a fox in the snow");
        assert_eq!(
            out,
            format!("a fox in the snow, {}", ENHANCEMENT_KEYWORDS)
        );
    }

    #[test]
    fn enhancement_is_idempotent() {
        let once = enhance_prompt("a fox in the snow");
        assert_eq!(enhance_prompt(&once), once);
    }

    #[test]
    fn trailing_punctuation_is_not_doubled() {
        let out = enhance_prompt("a fox in the snow,");
        assert_eq!(
            out,
            format!("a fox in the snow, {}", ENHANCEMENT_KEYWORDS)
        );
    }

    #[test]
    fn empty_prompt_stays_empty() {
        assert_eq!(enhance_prompt("   "), "");
    }
}
