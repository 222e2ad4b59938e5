//! Interactive browse session.
//!
//! Reads one command per line and redraws the table after every command
//! that changes what is shown. Commands mirror the controls of the
//! groupings page: pagination buttons, the filter box, header clicks, the
//! column settings menu and the copy button of the path cell.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use groupingslib::{ColumnId, GroupingsTable, KeyValueStorage};
use tracing::info;

use crate::render::{render_table, OutputMode};

const HELP: &str = "Commands: n(ext) p(rev) f(irst) l(ast) | / <query> | s <column> | \
t <column> | w <width> | c <row> | h(elp) | q(uit)";

/// One line of browse input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Previous,
    First,
    Last,
    /// Replace the filter query; empty clears it
    Filter(String),
    /// Header click on a column
    Sort(ColumnId),
    /// Show or hide a column
    ToggleColumn(ColumnId),
    /// The terminal is now this many columns wide
    Resize(usize),
    /// Print the path of a row (zero-based) on the current page
    Copy(usize),
    Help,
    Quit,
}

impl FromStr for BrowseCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        if let Some(rest) = line.trim_start().strip_prefix('/') {
            let query = rest.strip_prefix(' ').unwrap_or(rest);
            return Ok(BrowseCommand::Filter(query.to_string()));
        }

        let line = line.trim();
        let (word, arg) = match line.split_once(char::is_whitespace) {
            Some((word, arg)) => (word, arg.trim()),
            None => (line, ""),
        };

        let command = match word {
            "n" | "next" => BrowseCommand::Next,
            "p" | "prev" | "previous" => BrowseCommand::Previous,
            "f" | "first" => BrowseCommand::First,
            "l" | "last" => BrowseCommand::Last,
            "s" | "sort" => BrowseCommand::Sort(arg.parse()?),
            "t" | "toggle" => BrowseCommand::ToggleColumn(arg.parse()?),
            "w" | "width" => BrowseCommand::Resize(
                arg.parse::<usize>()
                    .with_context(|| format!("invalid width '{arg}'"))?,
            ),
            "c" | "copy" => {
                let row = arg
                    .parse::<usize>()
                    .with_context(|| format!("invalid row '{arg}'"))?;
                let row = row
                    .checked_sub(1)
                    .ok_or_else(|| anyhow!("rows are numbered from 1"))?;
                BrowseCommand::Copy(row)
            }
            "h" | "help" | "?" => BrowseCommand::Help,
            "q" | "quit" | "exit" => BrowseCommand::Quit,
            _ => bail!("unknown command '{word}'"),
        };
        Ok(command)
    }
}

/// A table being browsed at a given terminal width.
pub struct BrowseSession<S> {
    table: GroupingsTable<S>,
    width: usize,
    output_mode: OutputMode,
}

impl<S: KeyValueStorage> BrowseSession<S> {
    pub fn new(table: GroupingsTable<S>, width: usize, output_mode: OutputMode) -> Self {
        Self {
            table,
            width,
            output_mode,
        }
    }

    pub fn table(&self) -> &GroupingsTable<S> {
        &self.table
    }

    /// Run until `quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> anyhow::Result<()> {
        if !self.output_mode.is_structured() {
            writeln!(out, "{HELP}")?;
        }
        self.draw(out)?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<BrowseCommand>() {
                Ok(BrowseCommand::Quit) => break,
                Ok(command) => self.apply(command, out)?,
                Err(e) => writeln!(out, "{e}")?,
            }
        }
        Ok(())
    }

    fn apply<W: Write>(&mut self, command: BrowseCommand, out: &mut W) -> anyhow::Result<()> {
        info!(?command, "browse command");
        match command {
            BrowseCommand::Next => self.table.next(),
            BrowseCommand::Previous => self.table.previous(),
            BrowseCommand::First => self.table.first(),
            BrowseCommand::Last => self.table.last(),
            BrowseCommand::Filter(query) => self.table.set_filter(query),
            BrowseCommand::Sort(column) => self.table.toggle_sort(column),
            BrowseCommand::ToggleColumn(column) => {
                self.table.toggle_column(column);
            }
            BrowseCommand::Resize(width) => {
                self.width = width;
                self.table.on_resize();
            }
            BrowseCommand::Copy(row) => {
                match self.table.copy_path(row) {
                    Some(path) => writeln!(out, "Path: {path}")?,
                    None => writeln!(out, "No row {} on this page", row + 1)?,
                }
                return Ok(());
            }
            BrowseCommand::Help => {
                writeln!(out, "{HELP}")?;
                return Ok(());
            }
            BrowseCommand::Quit => return Ok(()),
        }
        self.draw(out)
    }

    fn draw<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        let rendered = render_table(&mut self.table, self.width, self.output_mode)?;
        write!(out, "{rendered}")?;
        Ok(())
    }
}
