//! CLI entry point for a11yguard.
//!
//! This module is intentionally thin: it handles argument parsing, file I/O,
//! and exit codes. All business logic lives in the `a11yguard-app` crate.
//!
//! Exit codes: 0 = clean scan, 2 = scan completed with error-severity
//! findings (or rejected input), 1 = the scan itself failed.

use a11yguard_app::{
    parse_report_json, render_markdown, scan_pdf_sources, scan_pdfs_report, scan_url,
    serialize_report, to_renderable, PdfSource, PdfUpload, ScanError,
};
use a11yguard_audit::CommandAuditEngine;
use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "a11yguard",
    version,
    about = "Accessibility compliance reports for web pages and PDF documents"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Audit a live page with the external engine and build a report.
    ScanUrl {
        /// The page URL to audit.
        url: String,

        /// Audit engine executable to spawn.
        #[arg(long, default_value = "pa11y")]
        engine: String,

        /// Extra argument passed to the engine before the URL (repeatable).
        #[arg(long = "engine-arg")]
        engine_args: Vec<String>,

        /// Where to write the JSON report (stdout if omitted).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,

        /// Write a Markdown report alongside the JSON.
        #[arg(long)]
        write_markdown: bool,

        /// Where to write the Markdown report (if enabled).
        #[arg(long, default_value = "artifacts/a11yguard/report.md")]
        markdown_out: Utf8PathBuf,
    },

    /// Inspect PDF files for structural accessibility markers.
    ScanPdf {
        /// PDF files to inspect.
        #[arg(required = true)]
        files: Vec<Utf8PathBuf>,

        /// Where to write the batch JSON (stdout if omitted).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,

        /// Also write a classified scan report built from the PDF findings.
        #[arg(long)]
        report_out: Option<Utf8PathBuf>,
    },

    /// Render Markdown from an existing JSON report.
    Md {
        /// Path to the JSON report file.
        #[arg(long)]
        report: Utf8PathBuf,

        /// Where to write the Markdown output (stdout if omitted).
        #[arg(long, short)]
        output: Option<Utf8PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::ScanUrl {
            url,
            engine,
            engine_args,
            output,
            write_markdown,
            markdown_out,
        } => cmd_scan_url(url, engine, engine_args, output, write_markdown, markdown_out),
        Commands::ScanPdf {
            files,
            output,
            report_out,
        } => cmd_scan_pdf(files, output, report_out),
        Commands::Md { report, output } => cmd_md(report, output),
    }
}

fn cmd_scan_url(
    url: String,
    engine: String,
    engine_args: Vec<String>,
    output: Option<Utf8PathBuf>,
    write_markdown: bool,
    markdown_out: Utf8PathBuf,
) -> anyhow::Result<()> {
    // The default engine gets the canonical pa11y-style flags; a custom
    // engine is invoked with exactly the arguments given.
    let engine = if engine == "pa11y" && engine_args.is_empty() {
        CommandAuditEngine::default()
    } else {
        CommandAuditEngine::new(engine, engine_args)
    };

    let envelope = match scan_url(&engine, &url) {
        Ok(envelope) => envelope,
        Err(err) => exit_scan_error(err),
    };

    let json = serialize_report(&envelope).context("serialize report")?;
    emit(output.as_deref(), &json)?;

    if write_markdown {
        let md = render_markdown(&to_renderable(&envelope));
        write_text_file(&markdown_out, &md).context("write markdown")?;
    }

    if envelope.report.summary.errors > 0 {
        std::process::exit(2);
    }
    Ok(())
}

fn cmd_scan_pdf(
    files: Vec<Utf8PathBuf>,
    output: Option<Utf8PathBuf>,
    report_out: Option<Utf8PathBuf>,
) -> anyhow::Result<()> {
    let sources: Vec<PdfSource> = files.iter().map(load_source).collect();

    let batch = match scan_pdf_sources(&sources) {
        Ok(batch) => batch,
        Err(err) => exit_scan_error(err),
    };

    let json = serde_json::to_vec_pretty(&batch).context("serialize batch")?;
    emit(output.as_deref(), &json)?;

    if let Some(report_path) = report_out {
        let envelope = match scan_pdfs_report(&sources) {
            Ok(envelope) => envelope,
            Err(err) => exit_scan_error(err),
        };
        let report_json = serialize_report(&envelope).context("serialize report")?;
        write_bytes_file(&report_path, &report_json).context("write report json")?;
    }

    if batch.summary.total_issues > 0 {
        std::process::exit(2);
    }
    Ok(())
}

fn cmd_md(report_path: Utf8PathBuf, output: Option<Utf8PathBuf>) -> anyhow::Result<()> {
    let report_text = std::fs::read_to_string(&report_path)
        .with_context(|| format!("read report: {}", report_path))?;
    let envelope = parse_report_json(&report_text)?;
    let md = render_markdown(&to_renderable(&envelope));

    match output {
        Some(out_path) => write_text_file(&out_path, &md).context("write markdown output")?,
        None => print!("{}", md),
    }
    Ok(())
}

/// Read one file into a batch source. Read failures are isolated to the
/// file: the batch carries them instead of aborting.
fn load_source(path: &Utf8PathBuf) -> PdfSource {
    let filename = path
        .file_name()
        .unwrap_or(path.as_str())
        .to_string();

    match std::fs::read(path) {
        Ok(bytes) => PdfSource::Loaded(PdfUpload {
            filename,
            size: bytes.len() as u64,
            bytes,
        }),
        Err(err) => {
            eprintln!("a11yguard: cannot read {path}: {err}");
            PdfSource::Unreadable {
                filename,
                error: err.to_string(),
            }
        }
    }
}

fn exit_scan_error(err: ScanError) -> ! {
    match err {
        ScanError::Input(_) => {
            eprintln!("a11yguard: {err}");
            std::process::exit(2);
        }
        ScanError::Audit(_) => {
            eprintln!("a11yguard error: {err}");
            std::process::exit(1);
        }
    }
}

fn emit(path: Option<&camino::Utf8Path>, bytes: &[u8]) -> anyhow::Result<()> {
    match path {
        Some(path) => write_bytes_file(path, bytes),
        None => {
            println!("{}", String::from_utf8_lossy(bytes));
            Ok(())
        }
    }
}

fn write_bytes_file(path: &camino::Utf8Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {}", parent))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write file: {}", path))?;
    Ok(())
}

fn write_text_file(path: &camino::Utf8Path, text: &str) -> anyhow::Result<()> {
    write_bytes_file(path, text.as_bytes())
}
