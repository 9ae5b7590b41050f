//! syllabus-roadmap CLI entry point.

use std::fs;
use std::io::{self, Read, Write};
use std::process;

use clap::{Parser, Subcommand};
use tracing::Level;

use syllabus_roadmap::{LayoutConfig, OutputFormat, render_roadmap, render_summary_text};

/// Syllabus topic lists to positioned roadmap graphs.
#[derive(Parser, Debug)]
#[command(
    name = "syllabus-roadmap",
    version = env!("SYLLABUS_ROADMAP_VERSION"),
    about = "Syllabus topic lists to positioned roadmap graphs"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Lay out a topic list as a roadmap
    Roadmap {
        /// Input file (reads from stdin if not provided)
        input: Option<String>,

        /// Course title shown on the root node
        #[arg(short, long)]
        title: String,

        /// Output format (json, outline)
        #[arg(short, long, default_value = "json")]
        format: String,

        /// Write output to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Horizontal centre line of the roadmap
        #[arg(long = "center-x")]
        center_x: Option<i64>,

        /// Sections per row under a chapter
        #[arg(long = "per-row")]
        per_row: Option<usize>,
    },

    /// Print a topic summary payload as text
    Summary {
        /// Input file (reads from stdin if not provided)
        input: Option<String>,

        /// Topic id to show (default: the first entry)
        #[arg(long)]
        topic: Option<String>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", message);
    process::exit(1);
}

fn read_input(input: Option<&str>) -> String {
    match input {
        Some(path) => fs::read_to_string(path)
            .unwrap_or_else(|e| fail(format_args!("cannot read '{}': {}", path, e))),
        None => {
            let mut buf = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buf) {
                fail(format_args!("cannot read stdin: {}", e));
            }
            buf
        }
    }
}

fn write_output(rendered: &str, output: Option<&str>) {
    if let Some(path) = output {
        if let Err(e) = fs::write(path, rendered) {
            fail(format_args!("cannot write '{}': {}", path, e));
        }
    } else {
        print!("{}", rendered);
        if let Err(e) = io::stdout().flush() {
            fail(format_args!("cannot flush stdout: {}", e));
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Roadmap {
            input,
            title,
            format,
            output,
            center_x,
            per_row,
        } => {
            let format = OutputFormat::parse(&format).unwrap_or_else(|e| fail(e));
            let mut config = LayoutConfig::new();
            if let Some(x) = center_x {
                config.center_x = x;
            }
            if let Some(n) = per_row {
                config.sections_per_row = n;
            }
            let text = read_input(input.as_deref());
            let rendered =
                render_roadmap(&text, &title, format, &config).unwrap_or_else(|e| fail(e));
            write_output(&rendered, output.as_deref());
        }
        Commands::Summary { input, topic } => {
            let text = read_input(input.as_deref());
            let rendered =
                render_summary_text(&text, topic.as_deref()).unwrap_or_else(|e| fail(e));
            write_output(&rendered, None);
        }
    }
}
