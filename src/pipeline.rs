//! End-to-end conversion of a chat export into a restore script.

use crate::compile::compile_actions;
use crate::error::Result;
use crate::extract::extract_last_artifact;
use crate::normalize::normalize_literals;

/// Convert a raw chat export (or a bare artifact fragment) into restore
/// script text.
///
/// The stages run in a fixed order: pick the last artifact block,
/// normalize escaped literals, compile the action directives. The only
/// failure is a `file` action without a path; in that case no script is
/// produced at all.
pub fn restore_script(input: &str) -> Result<String> {
    let artifact = extract_last_artifact(input);
    let normalized = normalize_literals(artifact);
    compile_actions(&normalized)
}
