use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};
use dossier_parser::{DossierError, DossierParser, KnowledgeDocument, ParserConfig};

#[derive(Parser)]
#[command(name = "dossier", about = "Validate and decode markdown protein dossiers")]
struct Cli {
    /// Config file with extra section title aliases
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse one dossier and print it as JSON
    Parse {
        file: PathBuf,
        /// Single-line JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Parse many dossiers in parallel and report which are rejected
    Check {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ParserConfig::load(cli.config.as_deref())
        .with_context(|| format!("Failed to load config {:?}", cli.config))?;
    let parser = DossierParser::new(config);

    match cli.command {
        Commands::Parse { file, compact } => {
            let doc = match parse_file(&parser, &file)? {
                Ok(doc) => doc,
                Err(e) => {
                    eprintln!("{}: rejected: {}", file.display(), e);
                    return Ok(ExitCode::FAILURE);
                }
            };
            let json = if compact {
                serde_json::to_string(&doc)?
            } else {
                serde_json::to_string_pretty(&doc)?
            };
            println!("{}", json);
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { files } => {
            let t0 = Instant::now();
            let report = check_files(&parser, &files);
            report.print();
            tracing::info!(
                files = files.len(),
                elapsed_ms = t0.elapsed().as_millis() as u64,
                "check finished"
            );
            if report.rejected.is_empty() && report.unreadable.is_empty() {
                Ok(ExitCode::SUCCESS)
            } else {
                Ok(ExitCode::FAILURE)
            }
        }
    }
}

/// Outer error is I/O, inner is the parse verdict.
fn parse_file(
    parser: &DossierParser,
    path: &Path,
) -> anyhow::Result<Result<KnowledgeDocument, DossierError>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(parser.parse(&text))
}

struct CheckReport {
    valid: usize,
    rejected: Vec<(PathBuf, DossierError)>,
    unreadable: Vec<(PathBuf, anyhow::Error)>,
}

impl CheckReport {
    fn print(&self) {
        for (path, e) in &self.rejected {
            println!("REJECTED  {}: {}", path.display(), e);
        }
        for (path, e) in &self.unreadable {
            println!("UNREADABLE {}: {:#}", path.display(), e);
        }
        println!(
            "{} valid, {} rejected, {} unreadable.",
            self.valid,
            self.rejected.len(),
            self.unreadable.len()
        );
    }
}

fn check_files(parser: &DossierParser, files: &[PathBuf]) -> CheckReport {
    use indicatif::{ProgressBar, ProgressStyle};
    use rayon::prelude::*;

    let pb = ProgressBar::new(files.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({per_sec})")
    {
        pb.set_style(style.progress_chars("#>-"));
    }

    let results: Vec<_> = files
        .par_iter()
        .map(|path| {
            let result = parse_file(parser, path);
            pb.inc(1);
            (path.clone(), result)
        })
        .collect();
    pb.finish_and_clear();

    let mut report = CheckReport {
        valid: 0,
        rejected: Vec::new(),
        unreadable: Vec::new(),
    };
    for (path, result) in results {
        match result {
            Ok(Ok(_)) => report.valid += 1,
            Ok(Err(e)) => report.rejected.push((path, e)),
            Err(e) => report.unreadable.push((path, e)),
        }
    }
    report
}
