//! Terminal probe CLI.
//!
//! Reports what the `term-probe` library detects about the current
//! environment:
//! - TTY status
//! - Dumb terminal (`TERM=dumb`)
//! - Truecolor support (`COLORTERM`)
//! - Garden container (Concourse CI)
//!
//! Subcommands double as shell predicates (exit 0 for yes, 1 for no) and
//! expose the cursor hide/show sequences.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use term_probe::{
    discovery::{detection, sandbox},
    probe::TerminalProbe,
    utils::cursor,
};

/// Terminal capability probe
#[derive(Parser, Debug)]
#[command(name = "tprobe")]
#[command(author, version, about = "Probe terminal capabilities and CI sandboxing")]
#[command(after_help = "\
EXAMPLES:
  # Full report
  tprobe

  # Machine readable
  tprobe --json

  # Use as a shell predicate
  if tprobe truecolor; then echo \"24-bit color\"; fi
")]
struct Args {
    /// Output the report in JSON format
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
enum Command {
    /// Exit 0 if TERM is "dumb", 1 otherwise
    Dumb,

    /// Exit 0 if COLORTERM advertises 24-bit color, 1 otherwise
    Truecolor,

    /// Exit 0 if running inside a Garden container, 1 otherwise
    Garden,

    /// Write the hide cursor sequence to stdout
    HideCursor,

    /// Write the show cursor sequence to stdout
    ShowCursor,
}

fn main() -> color_eyre::Result<ExitCode> {
    color_eyre::install()?;

    // Setup logging if RUST_LOG is set
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .init();
    }

    let args = Args::parse();

    match args.command {
        Some(Command::Dumb) => Ok(predicate(detection::is_dumb_terminal())),
        Some(Command::Truecolor) => Ok(predicate(detection::is_true_color())),
        Some(Command::Garden) => Ok(predicate(sandbox::is_garden_container())),
        Some(Command::HideCursor) => {
            cursor::hide_cursor();
            Ok(ExitCode::SUCCESS)
        }
        Some(Command::ShowCursor) => {
            cursor::show_cursor();
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let probe = TerminalProbe::new();
            tracing::debug!(?probe, "Probed terminal");

            if args.json {
                println!("{}", serde_json::to_string_pretty(&probe)?);
            } else {
                print_report(&probe);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn predicate(answer: bool) -> ExitCode {
    if answer {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}

fn print_report(probe: &TerminalProbe) {
    println!("Terminal Probe");
    println!("--------------");
    println!("  Is TTY:            {}", yes_no(probe.is_tty));
    println!("  Dumb Terminal:     {}", yes_no(probe.is_dumb_terminal));
    println!("  Truecolor:         {}", yes_no(probe.is_true_color));
    println!("  Garden Container:  {}", yes_no(probe.is_garden_container));
}
