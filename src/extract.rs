//! Artifact extraction from raw chat exports.
//!
//! An export can contain several `<boltArtifact>` blocks as the chat
//! iterates on the project. Only the last block matters: it is the most
//! recent snapshot of the files and commands.

use once_cell::sync::Lazy;
use regex::Regex;

static ARTIFACT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<boltArtifact\b[^>]*>([\s\S]*?)</boltArtifact>").expect("Valid regex pattern")
});

/// Return the trimmed body of the last `<boltArtifact>` block in `input`.
///
/// Attributes on the opening tag are ignored. Inputs without any artifact
/// block come back unchanged: the caller may already hold a pre-extracted
/// fragment instead of a full export, so absence of a match is not an
/// error.
pub fn extract_last_artifact(input: &str) -> &str {
    ARTIFACT_REGEX
        .captures_iter(input)
        .last()
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_artifact_returns_input_unchanged() {
        let input = "plain text with no markup at all";
        assert_eq!(extract_last_artifact(input), input);
    }

    #[test]
    fn test_single_artifact_body_is_trimmed() {
        let input = "before <boltArtifact id=\"a\">\n  body text\n</boltArtifact> after";
        assert_eq!(extract_last_artifact(input), "body text");
    }

    #[test]
    fn test_last_of_multiple_artifacts_wins() {
        let input = "<boltArtifact id=\"a\">first</boltArtifact>\n\
                     noise between blocks\n\
                     <boltArtifact id=\"b\">second</boltArtifact>";
        assert_eq!(extract_last_artifact(input), "second");
    }

    #[test]
    fn test_opening_tag_attributes_are_ignored() {
        let input = r#"<boltArtifact id="proj" title="My App" type="bundled">content</boltArtifact>"#;
        assert_eq!(extract_last_artifact(input), "content");
    }

    #[test]
    fn test_unclosed_artifact_falls_back_to_input() {
        let input = "<boltArtifact id=\"a\">never closed";
        assert_eq!(extract_last_artifact(input), input);
    }

    #[test]
    fn test_body_spanning_many_lines() {
        let input = "<boltArtifact id=\"a\">line one\nline two\nline three</boltArtifact>";
        assert_eq!(
            extract_last_artifact(input),
            "line one\nline two\nline three"
        );
    }

    #[test]
    fn test_empty_artifact_body() {
        let input = "<boltArtifact id=\"a\"></boltArtifact>";
        assert_eq!(extract_last_artifact(input), "");
    }

    #[test]
    fn test_prefix_tag_name_does_not_match() {
        // \b after the tag name keeps boltArtifactExtra from matching
        let input = "<boltArtifactExtra>nope</boltArtifactExtra>";
        assert_eq!(extract_last_artifact(input), input);
    }
}
