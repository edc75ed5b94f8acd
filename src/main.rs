use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error};

use bolt_restore::{
    extract_last_artifact, normalize_literals, parse_actions, restore_script, Error,
};

/// Rebuild a Bolt.new project from an exported chat
#[derive(Parser)]
#[command(name = "bolt-restore")]
#[command(
    about = "Turn a Bolt.new chat export into a bash script that restores the project",
    long_about = None
)]
struct Cli {
    /// Chat export to read ("-" or omitted reads stdin)
    input: Option<PathBuf>,

    /// Where to write the generated script
    #[arg(short, long, default_value = "restoreBoltProject.sh")]
    output: PathBuf,

    /// Print the script to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// Print the parsed actions as JSON and exit
    #[arg(long)]
    list_actions: bool,

    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    // Logs go to stderr so `--stdout` output stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    debug!("bolt-restore started with verbosity level: {}", cli.verbose);

    if let Err(e) = run(cli) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let input = read_input(cli.input.as_deref())?;

    if input.trim().is_empty() {
        return Err(Error::EmptyInput.into());
    }
    debug!("Read {} bytes of export input", input.len());

    if cli.list_actions {
        let artifact = extract_last_artifact(&input);
        let normalized = normalize_literals(artifact);
        let actions = parse_actions(&normalized)?;
        println!("{}", serde_json::to_string_pretty(&actions)?);
        return Ok(());
    }

    let script = restore_script(&input)?;
    debug!("Generated script of {} lines", script.lines().count());

    if cli.stdout {
        println!("{script}");
    } else {
        fs::write(&cli.output, &script)
            .with_context(|| format!("Failed to write script to {}", cli.output.display()))?;
        println!("✅ Restore script written to {}", cli.output.display());
        println!(
            "Run `chmod +x {}`, then execute it in the directory where the project should be restored.",
            cli.output.display()
        );
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("Failed to read export file: {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
