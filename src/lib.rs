//! # bolt-restore
//!
//! Rebuild Bolt.new / bolt.diy projects from exported chats.
//!
//! A chat export embeds one or more `<boltArtifact>` blocks describing
//! the files and shell commands that make up the project. This crate
//! turns the last such block into a bash script that recreates every
//! file (directories included) and replays every command.
//!
//! ```bash
//! bolt-restore chat-export.json -o restore.sh
//! ```
//!
//! The conversion is a linear pipeline of pure string transformations:
//! extract the last artifact, normalize escaped literals, compile the
//! action directives into script text.
//!
//! ## Modules
//!
//! - `extract` - Locate the last `<boltArtifact>` block in an export
//! - `normalize` - Convert `\n` escape markers and strip stray backslashes
//! - `compile` - Parse `<boltAction>` directives and emit the bash script
//! - `pipeline` - Compose the three stages end to end
//! - `error` - Error types shared across the pipeline
pub mod compile;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod pipeline;

pub use compile::{compile_actions, emit_script, parse_actions, ActionDirective};
pub use error::{Error, Result};
pub use extract::extract_last_artifact;
pub use normalize::normalize_literals;
pub use pipeline::restore_script;
