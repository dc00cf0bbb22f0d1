use clap::Parser;
use miette::{IntoDiagnostic, Result};
use ordertrack::ledger::OrderLedger;
use ordertrack::reader::EventReader;
use ordertrack::summary::Summary;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file with one JSON order update per line. Reads stdin when
    /// omitted.
    input: Option<PathBuf>,

    /// Do not report parse failures on stderr.
    #[arg(long)]
    quiet: bool,

    /// Emit the summary as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source: Box<dyn BufRead> = match cli.input {
        Some(path) => Box::new(BufReader::new(File::open(path).into_diagnostic()?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    // Every event is applied before the next is read; bad records are
    // dropped and never abort the run.
    let mut ledger = OrderLedger::new();
    for event in EventReader::new(source).events() {
        match event {
            Ok(event) => ledger.apply(event),
            Err(e) => {
                if !cli.quiet {
                    eprintln!("{e}");
                }
            }
        }
    }

    let summary = Summary::generate(&ledger);
    if cli.json {
        let stdout = io::stdout();
        serde_json::to_writer_pretty(stdout.lock(), &summary).into_diagnostic()?;
        println!();
    } else {
        println!("{summary}");
    }

    Ok(())
}
