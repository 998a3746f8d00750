//! convert-to-mowen - Convert a markdown file to Mo Wen style
//!
//! Usage:
//!   convert-to-mowen notes.md                  # writes notes_mowen.md
//!   convert-to-mowen notes.md -o out.md
//!   convert-to-mowen notes.md --dry-run        # prints the result instead
//!   convert-to-mowen notes.md --report report.json

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser as ClapParser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

use mowen::converter::ReportFormat;
use mowen::io::{convert_file, write_lines, write_report};

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ReportFormatArg {
    /// JSON format
    Json,
    /// Human-readable text
    Text,
}

#[derive(ClapParser)]
#[command(
    name = "convert-to-mowen",
    version,
    about = "Convert Markdown to Mo Wen style",
    long_about = "Rewrites a markdown file in Mo Wen style: headings become bold text\n\
                  behind a bar prefix, lists are redrawn with bullet glyphs and every\n\
                  block is separated by blank lines. Code blocks are kept verbatim.\n\n\
                  The result is written next to the input as <name>_mowen.md."
)]
struct Cli {
    /// Input markdown file
    #[arg(value_name = "FILE")]
    file_path: PathBuf,

    /// Output file (defaults to <name>_mowen.md next to the input)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Print the converted document to stdout instead of writing it
    #[arg(long)]
    dry_run: bool,

    /// Write a conversion report
    #[arg(long, value_name = "REPORT_FILE")]
    report: Option<PathBuf>,

    /// Report format
    #[arg(long, value_enum, default_value = "json")]
    report_format: ReportFormatArg,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn init_logger(filter_level: log::LevelFilter) -> Result<()> {
    simplelog::TermLogger::init(
        filter_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logger(args.verbose.log_level_filter())?;

    let (output_path, result) = convert_file(&args.file_path, args.output.as_deref())?;

    for warning in &result.report.warnings {
        eprintln!("⚠ {}", warning);
    }

    if args.dry_run {
        let stdout = io::stdout();
        let mut writer = BufWriter::new(stdout.lock());
        writer.write_all(result.content().as_bytes())?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    } else {
        println!(
            "Converting {} -> {}",
            args.file_path.display(),
            output_path.display()
        );
        write_lines(&output_path, &result.lines)?;
        println!("Done.");
    }

    if let Some(report_path) = args.report {
        let format = match args.report_format {
            ReportFormatArg::Json => ReportFormat::Json,
            ReportFormatArg::Text => ReportFormat::Text,
        };
        write_report(&result.report, &report_path, format)?;
        eprintln!("✓ Report written to {}", report_path.display());
    }

    Ok(())
}
