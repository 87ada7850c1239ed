//! sheetread CLI - spreadsheet inspection tool

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use sheetread::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sheetread")]
#[command(author, version, about = "Read-only spreadsheet inspection tool")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all sheets in a spreadsheet
    Sheets {
        /// Input spreadsheet file (xlsx, csv)
        input: PathBuf,
    },

    /// Show information about a spreadsheet
    Info {
        /// Input spreadsheet file (xlsx, csv)
        input: PathBuf,
    },

    /// Print every cell of a sheet with its kind and typed value
    Dump {
        /// Input spreadsheet file (xlsx, csv)
        input: PathBuf,

        #[command(flatten)]
        sheet: SheetArgs,
    },

    /// Print a single cell
    Cell {
        /// Input spreadsheet file (xlsx, csv)
        input: PathBuf,

        /// Row index (0-based)
        row: usize,

        /// Column index (0-based)
        col: usize,

        #[command(flatten)]
        sheet: SheetArgs,
    },
}

#[derive(clap::Args)]
struct SheetArgs {
    /// Sheet name
    #[arg(short, long, conflicts_with = "index")]
    sheet: Option<String>,

    /// Sheet index (0-based, default: 0)
    #[arg(short, long)]
    index: Option<usize>,
}

impl SheetArgs {
    fn select<'a>(&self, ss: &'a Spreadsheet) -> Result<&'a Sheet> {
        match (&self.sheet, self.index) {
            (Some(name), _) => ss
                .sheet_by_name(name)
                .with_context(|| format!("Sheet '{}' not found", name)),
            (None, index) => {
                let index = index.unwrap_or(0);
                ss.sheet(index)
                    .with_context(|| format!("Sheet index {} not found", index))
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Sheets { input } => list_sheets(&input),
        Commands::Info { input } => show_info(&input),
        Commands::Dump { input, sheet } => dump_sheet(&input, &sheet),
        Commands::Cell {
            input,
            row,
            col,
            sheet,
        } => show_cell(&input, row, col, &sheet),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load(input: &Path) -> Result<Spreadsheet> {
    let ss = open(input).with_context(|| format!("Failed to open '{}'", input.display()))?;
    tracing::debug!(sheets = ss.sheet_count(), "opened {}", input.display());
    Ok(ss)
}

fn list_sheets(input: &Path) -> Result<()> {
    let ss = load(input)?;

    for (idx, sheet) in ss.sheets().iter().enumerate() {
        println!("{}: {} ({} rows)", idx, sheet.name(), sheet.row_count());
    }

    Ok(())
}

fn show_info(input: &Path) -> Result<()> {
    let ss = load(input)?;
    let format = Format::from_path(input)
        .map(|f| f.extension().to_uppercase())
        .unwrap_or_default();

    println!("File: {}", input.display());
    println!("Format: {}", format);
    println!("Sheets: {}", ss.sheet_count());

    for sheet in ss.sheets() {
        let widest = sheet.rows().iter().map(Row::len).max().unwrap_or(0);
        println!();
        println!("Sheet: {}", sheet.name());
        println!("  Rows: {}", sheet.row_count());
        println!("  Widest row: {} cells", widest);
    }

    Ok(())
}

fn dump_sheet(input: &Path, args: &SheetArgs) -> Result<()> {
    let ss = load(input)?;
    let sheet = args.select(&ss)?;

    println!("Sheet name: {}", sheet.name());
    for (r, row) in sheet.rows().iter().enumerate() {
        for (c, cell) in row.iter().enumerate() {
            println!("[{}, {}] {}: {}", r, c, cell.kind(), describe(cell));
        }
    }

    Ok(())
}

/// Render a cell through the typed accessors matching its kind
fn describe(cell: &Cell) -> String {
    fn show<T: std::fmt::Display>(value: sheetread::Result<T>) -> String {
        match value {
            Ok(v) => v.to_string(),
            Err(e) => format!("<{}>", e),
        }
    }

    match cell.kind() {
        CellKind::String => format!("{:?}", cell.as_str()),
        CellKind::Numeric => format!(
            "float={} int={} int64={}",
            show(cell.as_float()),
            show(cell.as_int()),
            show(cell.as_i64())
        ),
        CellKind::Bool => show(cell.as_bool()),
    }
}

fn show_cell(input: &Path, row: usize, col: usize, args: &SheetArgs) -> Result<()> {
    let ss = load(input)?;
    let sheet = args.select(&ss)?;

    let Some(cell) = sheet.get(row, col) else {
        bail!(
            "Cell ({}, {}) is out of range in sheet '{}'",
            row,
            col,
            sheet.name()
        );
    };

    println!("Kind: {}", cell.kind());
    println!("Text: {}", cell);
    println!("Value: {}", describe(cell));

    Ok(())
}
