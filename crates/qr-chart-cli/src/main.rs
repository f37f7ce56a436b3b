//! Command-line shell for QR-based patient lookup.
//!
//! The decoded-text collaborator is stdin or a command argument; the
//! presentation layer is a plain-text card (or JSON) on stdout. Unknown
//! identifiers and blank scans are expected outcomes, not failures.

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use qr_chart_core::{render, ExtractedId, PatientDirectory, ScanSession};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "qrchart")]
#[command(about = "Patient lookup from scanned QR text", long_about = None)]
struct Cli {
    /// Load the patient directory from a JSON file instead of the
    /// built-in demo table
    #[arg(long, global = true, value_name = "FILE")]
    directory: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one decoded text and print the matching record
    Lookup {
        /// Decoded QR text: JSON payload, URL, or bare identifier
        text: String,

        /// Print the record as JSON instead of a text card
        #[arg(long)]
        json: bool,
    },
    /// Read decoded texts line by line from stdin
    Scan {
        /// Print records as JSON instead of text cards
        #[arg(long)]
        json: bool,
    },
    /// Print sample payloads and the records they resolve to
    Demo,
    /// List directory identifiers and names
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let directory = load_directory(cli.directory.as_deref())?;

    match cli.command {
        Commands::Lookup { text, json } => lookup(&directory, &text, json),
        Commands::Scan { json } => scan(&directory, json),
        Commands::Demo => demo(&directory),
        Commands::List => {
            list(&directory);
            Ok(())
        }
    }
}

/// Build the directory from `--directory` or fall back to the demo table.
fn load_directory(path: Option<&Path>) -> Result<PatientDirectory> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading directory file {}", path.display()))?;
            let directory = PatientDirectory::from_json(&json)
                .with_context(|| format!("parsing directory file {}", path.display()))?;
            info!(records = directory.len(), "directory loaded");
            Ok(directory)
        }
        None => Ok(PatientDirectory::demo()),
    }
}

/// One-shot resolution of a single decoded text.
fn lookup(directory: &PatientDirectory, text: &str, json: bool) -> Result<()> {
    let mut session = ScanSession::new();
    session.observe(text);
    report(directory, &session, json)
}

/// Stream decoded texts from stdin, one per line.
fn scan(directory: &PatientDirectory, json: bool) -> Result<()> {
    let mut session = ScanSession::new();
    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line.context("reading decoded text from stdin")?;
        session.observe(&line);
        report(directory, &session, json)?;
    }

    info!(scans = session.scan_count(), "scan session finished");
    Ok(())
}

/// Print the outcome of the session's most recent scan.
fn report(directory: &PatientDirectory, session: &ScanSession, json: bool) -> Result<()> {
    let extracted = session.last_scan().and_then(|e| e.extracted.as_ref());
    match extracted {
        Some(ExtractedId { identifier, kind }) => {
            println!("Parsed ID: {} ({})", identifier, kind.label());
        }
        None => println!("Parsed ID: -"),
    }

    match session.current_record(directory) {
        Some(record) if json => println!("{}", render::patient_json(record)?),
        Some(record) => print!("{}", render::patient_card(record)),
        None => println!("{}", render::empty_hint()),
    }
    Ok(())
}

/// Show the three payload encodings for every directory record.
fn demo(directory: &PatientDirectory) -> Result<()> {
    let mut records: Vec<_> = directory.records().collect();
    records.sort_by(|a, b| a.identifier.cmp(&b.identifier));

    for record in records {
        let id = &record.identifier;
        println!("--- Sample payloads for {id} ---");
        println!("json: {}", serde_json::json!({ "id": id }));
        println!("url:  https://hospital.example/patient?id={id}");
        println!("text: {id}");
        println!();
        print!("{}", render::patient_card(record));
        println!();
    }
    Ok(())
}

/// List directory contents, sorted by identifier.
fn list(directory: &PatientDirectory) {
    let mut records: Vec<_> = directory.records().collect();
    records.sort_by(|a, b| a.identifier.cmp(&b.identifier));

    if records.is_empty() {
        println!("Directory is empty.");
        return;
    }
    for record in records {
        println!("{}  {}", record.identifier, record.name);
    }
}
