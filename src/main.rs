//! Cellgrid - a fixed-size grid calculator driven by line commands

mod command;
mod error;
mod render;

use anyhow::Context;
use cellgrid_core::Document;
use cellgrid_engine::engine::{COLUMNS, ROWS};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::render::TableRenderer;

#[derive(Parser, Debug)]
#[command(name = "cellgrid", version, about = "Fixed-size grid calculator")]
struct Args {
    /// Number of columns (1-26, labelled A..)
    #[arg(long, env = "CELLGRID_COLUMNS", default_value_t = COLUMNS)]
    columns: usize,

    /// Number of rows
    #[arg(long, env = "CELLGRID_ROWS", default_value_t = ROWS)]
    rows: usize,

    /// Run a command instead of reading input (can be repeated)
    #[arg(short = 'c', long = "command", value_name = "COMMAND")]
    commands: Vec<String>,

    /// Render the grid after every accepted edit
    #[arg(short, long)]
    watch: bool,

    /// Read commands from this file instead of stdin
    script: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let mut doc = Document::with_shape(args.columns, args.rows)?;
    if args.watch {
        doc.subscribe(Box::new(TableRenderer::new(io::stdout())));
    }

    let input: Box<dyn Iterator<Item = io::Result<String>>> = if !args.commands.is_empty() {
        Box::new(args.commands.into_iter().map(Ok::<String, io::Error>))
    } else if let Some(path) = &args.script {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        Box::new(BufReader::new(file).lines())
    } else {
        Box::new(io::stdin().lines())
    };

    let mut failed = false;
    let mut stdout = io::stdout();
    for (i, line) in input.enumerate() {
        let line = line.context("reading commands")?;
        let result = command::parse_line(i + 1, &line).and_then(|parsed| match parsed {
            Some(cmd) => command::execute(&mut doc, cmd, &mut stdout),
            None => Ok(()),
        });
        if let Err(e) = result {
            eprintln!("Error: {}", e);
            failed = true;
        }
    }

    if failed {
        std::process::exit(1);
    }
    Ok(())
}
