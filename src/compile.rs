//! Action compilation: bolt action markup in, bash script out.
//!
//! An artifact body is a sequence of `<boltAction>` directives. Two
//! kinds exist: `file` writes a file (creating parent directories as
//! needed) and `shell` replays a command verbatim. Directives are
//! scanned left to right with a lazy body match so adjacent directives
//! do not bleed into each other; anything that does not match the
//! pattern is skipped without error.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

static ACTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"<boltAction\s+type="(file|shell)"(?:\s+filePath="([^"]+)")?\s*>([\s\S]*?)</boltAction>"#,
    )
    .expect("Valid regex pattern")
});

/// One parsed `<boltAction>` directive, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActionDirective {
    /// Write `body` to `path`, byte for byte.
    File { path: String, body: String },
    /// Run `body` as-is; it is already shell syntax.
    Shell { body: String },
}

/// Scan `input` left to right for well-formed action directives.
///
/// Directive bodies are trimmed of surrounding whitespace. A `file`
/// action without a `filePath` aborts the whole parse: skipping it
/// would silently drop a file the script is expected to create.
pub fn parse_actions(input: &str) -> Result<Vec<ActionDirective>> {
    let mut actions = Vec::new();

    for cap in ACTION_REGEX.captures_iter(input) {
        let body = cap[3].trim().to_string();
        let action = match &cap[1] {
            "file" => {
                let path = cap.get(2).ok_or(Error::MissingFilePath)?;
                ActionDirective::File {
                    path: path.as_str().to_string(),
                    body,
                }
            }
            _ => ActionDirective::Shell { body },
        };
        actions.push(action);
    }

    Ok(actions)
}

/// Render parsed directives as an executable bash script.
///
/// The script opens with a shebang and `set -e` so the first failing
/// command stops the restore. File bodies are written through quoted
/// heredocs, which keeps the shell from expanding anything inside them.
/// A body containing a line that is exactly `EOF` would end its heredoc
/// early; the export format offers no way around that.
pub fn emit_script(actions: &[ActionDirective]) -> String {
    let mut lines = vec!["#!/bin/bash".to_string(), "set -e".to_string()];

    for action in actions {
        match action {
            ActionDirective::File { path, body } => {
                if let Some(slash) = path.rfind('/') {
                    lines.push(format!("mkdir -p {}", &path[..slash]));
                }
                lines.push(format!("cat << 'EOF' > {path}"));
                lines.push(body.clone());
                lines.push("EOF".to_string());
            }
            ActionDirective::Shell { body } => {
                lines.push(body.clone());
            }
        }
    }

    lines.join("\n")
}

/// Parse `input` and emit the script in one step.
pub fn compile_actions(input: &str) -> Result<String> {
    Ok(emit_script(&parse_actions(input)?))
}
