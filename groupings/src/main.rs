//! # groupings
//!
//! A terminal browser for grouping records.
//!
//! ## Overview
//!
//! groupings is built on top of groupingslib and provides a command-line
//! interface to the groupings table: a global filter, per-column sort
//! toggles, fixed-size pages and a column settings list whose choices are
//! remembered between runs.
//!
//! ## Features
//!
//! - **Filter**: case-insensitive match on any column with `--filter`
//! - **Sort**: each `--sort <column>` is one header click (asc, desc, off)
//! - **Pages**: `--page N`, `--last` and `--page-size`
//! - **Columns**: `toggle <column>` shows or hides a column, persisted
//! - **Browse**: an interactive session driven by one-letter commands
//! - **Multiple output formats**: Table (default), JSON
//!
//! ## Usage
//!
//! ```bash
//! # First page of groupings
//! groupings --file groupings.json
//!
//! # Filter, sort descending by name, jump to the last page
//! groupings -f groupings.json list --filter example --sort name --sort name --last
//!
//! # Show the path column from now on
//! groupings toggle path
//!
//! # Output as JSON
//! groupings -f groupings.json --output json
//!
//! # Interactive session
//! groupings -f groupings.json browse
//! ```

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::anyhow;
use clap::{Arg, ArgAction, ArgMatches, Command};
use groupingslib::{load_records, ColumnId, GroupingsTable, JsonFileStorage, TableOptions};
use tracing::info;

mod browse;
mod logging;
mod render;

use browse::BrowseSession;
use logging::{init_logging, LogConfig};
use render::{render_columns, render_table, OutputMode, DEFAULT_WIDTH};

/// Arguments shared by the root command and `list`
fn list_args() -> Vec<Arg> {
    vec![
        Arg::new("filter")
            .long("filter")
            .help("Only show groupings matching this text (any column, case-insensitive)"),
        Arg::new("sort")
            .short('s')
            .long("sort")
            .action(ArgAction::Append)
            .help("Click a column header (name, description, path); repeat to cycle"),
        Arg::new("page")
            .long("page")
            .value_parser(clap::value_parser!(u64).range(1..))
            .conflicts_with("last")
            .help("Page to show, starting at 1"),
        Arg::new("last")
            .long("last")
            .action(ArgAction::SetTrue)
            .help("Show the last page"),
        page_size_arg(),
        width_arg(),
    ]
}

fn page_size_arg() -> Arg {
    Arg::new("page-size")
        .long("page-size")
        .value_parser(clap::value_parser!(usize))
        .default_value("20")
        .help("Rows per page")
}

fn width_arg() -> Arg {
    Arg::new("width")
        .long("width")
        .value_parser(clap::value_parser!(usize))
        .help("Layout width in columns (defaults to the terminal width)")
}

/// Build the clap Command structure
fn build_command() -> Command {
    Command::new("groupings")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Groupings Developers")
        .about("Browse grouping records with filtering, sorting, pages and column settings")
        .arg(
            Arg::new("file")
                .short('f')
                .long("file")
                .global(true)
                .help("Records JSON: an array or a {\"groupingPaths\": [...]} document"),
        )
        .arg(
            Arg::new("storage")
                .long("storage")
                .global(true)
                .help("Where column settings are saved (defaults to the user config directory)"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .global(true)
                .value_parser(["table", "json"])
                .default_value("table")
                .help("Output format"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("More log output on stderr (-v info, -vv debug, -vvv trace)"),
        )
        .args(list_args())
        .subcommand(
            Command::new("list")
                .about("Show one page of groupings (default command)")
                .args(list_args()),
        )
        .subcommand(Command::new("columns").about("Show which columns are visible"))
        .subcommand(
            Command::new("toggle")
                .about("Show or hide a column; the choice is saved")
                .arg(
                    Arg::new("column")
                        .required(true)
                        .help("Column to toggle: description or path"),
                ),
        )
        .subcommand(
            Command::new("browse")
                .about("Browse interactively, reading commands from stdin")
                .arg(page_size_arg())
                .arg(width_arg()),
        )
}

fn output_mode(matches: &ArgMatches) -> OutputMode {
    match matches.get_one::<String>("output").map(|s| s.as_str()) {
        Some("json") => OutputMode::Json,
        _ => OutputMode::Auto,
    }
}

fn terminal_width(matches: &ArgMatches) -> usize {
    matches
        .get_one::<usize>("width")
        .copied()
        .or_else(|| {
            console::Term::stdout()
                .size_checked()
                .map(|(_, columns)| usize::from(columns))
        })
        .unwrap_or(DEFAULT_WIDTH)
}

fn storage_path(matches: &ArgMatches) -> anyhow::Result<PathBuf> {
    if let Some(path) = matches.get_one::<String>("storage") {
        return Ok(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join("groupings").join("storage.json"))
        .ok_or_else(|| anyhow!("could not find a config directory; pass --storage <PATH>"))
}

/// Load records and column settings into a table
fn open_table(matches: &ArgMatches) -> anyhow::Result<GroupingsTable<JsonFileStorage>> {
    let file = matches
        .get_one::<String>("file")
        .ok_or_else(|| anyhow!("no records file given; pass --file <PATH>"))?;
    let records = load_records(file)?;
    info!(records = records.len(), file = %file, "records loaded");

    let page_size = matches
        .get_one::<usize>("page-size")
        .copied()
        .unwrap_or(groupingslib::DEFAULT_PAGE_SIZE);
    let storage = JsonFileStorage::new(storage_path(matches)?);

    Ok(GroupingsTable::new(
        records,
        storage,
        TableOptions::new().page_size(page_size),
    ))
}

/// Column settings need no records
fn open_settings(matches: &ArgMatches) -> anyhow::Result<GroupingsTable<JsonFileStorage>> {
    let storage = JsonFileStorage::new(storage_path(matches)?);
    Ok(GroupingsTable::new(Vec::new(), storage, TableOptions::new()))
}

/// Handler for list command
fn list_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let mut table = open_table(matches)?;

    if let Some(query) = matches.get_one::<String>("filter") {
        table.set_filter(query.as_str());
    }

    if let Some(columns) = matches.get_many::<String>("sort") {
        for column in columns {
            table.toggle_sort(column.parse::<ColumnId>()?);
        }
    }

    if matches.get_flag("last") {
        table.last();
    } else if let Some(&page) = matches.get_one::<u64>("page") {
        let index = usize::try_from(page - 1).unwrap_or(usize::MAX);
        table.go_to_page(index);
    }

    render_table(&mut table, terminal_width(matches), output_mode(matches))
}

/// Handler for columns command
fn columns_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let table = open_settings(matches)?;
    render_columns(&table.view().columns, output_mode(matches))
}

/// Handler for toggle command
fn toggle_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let column = matches
        .get_one::<String>("column")
        .ok_or_else(|| anyhow!("missing column"))?
        .parse::<ColumnId>()?;

    let mut table = open_settings(matches)?;
    let visible = table.toggle_column(column);
    info!(%column, visible, "column toggled");

    render_columns(&table.view().columns, output_mode(matches))
}

/// Handler for browse command
fn browse_handler(matches: &ArgMatches) -> anyhow::Result<String> {
    let table = open_table(matches)?;
    let mut session = BrowseSession::new(table, terminal_width(matches), output_mode(matches));

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    session.run(stdin.lock(), &mut stdout)?;
    Ok(String::new())
}

fn main() -> ExitCode {
    let matches = build_command().get_matches();

    // Global args propagate down, so the leaf matches see all of them
    let leaf = matches
        .subcommand()
        .map(|(_, sub)| sub)
        .unwrap_or(&matches);
    init_logging(&LogConfig::from_verbosity(leaf.get_count("verbose")));

    let result = match matches.subcommand() {
        Some(("list", sub)) => list_handler(sub),
        Some(("columns", sub)) => columns_handler(sub),
        Some(("toggle", sub)) => toggle_handler(sub),
        Some(("browse", sub)) => browse_handler(sub),
        // Handle root command (no subcommand) - treat as list
        _ => list_handler(&matches),
    };

    match result {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
