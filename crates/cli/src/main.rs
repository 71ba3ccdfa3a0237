mod echo;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use owo_colors::OwoColorize;
use relink_core::{Document, Transform};
use url::Url;

use echo::{print_banner, print_info, print_step, print_success, print_warning};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Rewrite relative links inside HTML documents through a fixed prefix
#[derive(Parser, Debug)]
#[command(name = "relink")]
#[command(author = "Relink Contributors")]
#[command(version)]
#[command(about = "Rewrite relative links inside HTML documents", long_about = None)]
struct Args {
    /// Local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Prefix concatenated onto every eligible relative link
    #[arg(short, long, value_name = "PREFIX")]
    prefix: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Parse the input as a body fragment instead of a full document
    #[arg(long)]
    fragment: bool,

    /// Print only the number of attributes changed, not the document
    #[arg(long)]
    count_only: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Format file size for display
fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
    }

    if args.prefix.contains("://") && Url::parse(&args.prefix).is_err() {
        print_warning(&format!("Prefix {} does not parse as an absolute URL", args.prefix));
    }

    let html = if args.input == "-" {
        if args.verbose {
            print_step(1, 3, "Reading from stdin");
        }
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    } else {
        if args.verbose {
            print_step(1, 3, &format!("Reading from file {}", args.input.bright_white()));
        }
        fs::read_to_string(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?
    };

    if args.verbose {
        eprintln!("  {} {}", "Size:".dimmed(), format_size(html.len()).bright_white());
        eprintln!();
        print_step(2, 3, "Rewriting links");
    }

    let mut doc = if args.fragment {
        Document::parse_fragment(&html).context("Failed to parse HTML fragment")?
    } else {
        Document::parse(&html).context("Failed to parse HTML")?
    };

    if args.verbose && let Some(title) = doc.title() {
        eprintln!("  {} {}", "Title:".dimmed(), title.bright_white());
    }

    let changed = doc.rewrite_links(Transform::prefix(args.prefix));

    if args.verbose {
        eprintln!(
            "  {} {}",
            "Changed:".dimmed(),
            changed.to_string().bright_white()
        );
        eprintln!();
        print_step(3, 3, "Writing output");
        eprintln!();
    }

    let output = if args.count_only { format!("{changed}\n") } else { doc.as_string() };

    match args.output {
        Some(path) => {
            fs::write(&path, output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            print!("{}", output);
        }
    }

    Ok(())
}
