//! Template rendering for CLI output using outstanding

use std::collections::BTreeMap;

use anyhow::anyhow;
use console::{measure_text_width, pad_str, Alignment, Style};
use groupingslib::{
    CellGeometry, CellId, ColumnId, ColumnSetting, GroupingsTable, HeaderView, KeyValueStorage,
    MeasureCell, PaginationView, TableView,
};
use outstanding::Theme;
use serde::Serialize;

/// Re-export OutputMode for callers
pub use outstanding::OutputMode;

/// Include templates at compile time
const TABLE_TEMPLATE: &str = include_str!("../templates/table.jinja");
const COLUMNS_TEMPLATE: &str = include_str!("../templates/columns.jinja");

/// Width used when the terminal size is unknown (output piped, no --width)
pub const DEFAULT_WIDTH: usize = 100;

const TITLE: &str = "Manage Groupings";
const GAP: &str = "  ";
const ROW_NUMBER_WIDTH: usize = 3;
const MIN_COLUMN_WIDTH: usize = 8;
const ELLIPSIS: &str = "…";

/// Display width given to each visible column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableLayout {
    widths: BTreeMap<ColumnId, usize>,
}

impl TableLayout {
    /// Lay out the visible columns of `view` in `terminal_width` columns.
    ///
    /// Name is never cut: it gets the width of its longest value. The rest
    /// is shared between description and path (3:2); when path is hidden
    /// description takes all of it.
    pub fn compute(view: &TableView, terminal_width: usize) -> Self {
        let columns = view.visible_columns();
        let gaps = GAP.len() * columns.len();
        let mut remaining = terminal_width.saturating_sub(ROW_NUMBER_WIDTH + gaps);
        let mut widths = BTreeMap::new();

        if let Some(header) = view.header(ColumnId::Name) {
            let name = view
                .rows
                .iter()
                .filter_map(|row| row.cell(ColumnId::Name))
                .map(|cell| measure_text_width(&cell.value))
                .chain(std::iter::once(measure_text_width(&header_text(header))))
                .max()
                .unwrap_or(MIN_COLUMN_WIDTH);
            widths.insert(ColumnId::Name, name);
            remaining = remaining.saturating_sub(name);
        }

        let shared: Vec<(ColumnId, usize)> = columns
            .iter()
            .filter_map(|&column| share(column).map(|weight| (column, weight)))
            .collect();
        let total_weight: usize = shared.iter().map(|(_, weight)| weight).sum();
        for (column, weight) in shared {
            let width = remaining * weight / total_weight.max(1);
            widths.insert(column, width.max(MIN_COLUMN_WIDTH));
        }

        Self { widths }
    }

    /// Width of a column; hidden columns get the minimum.
    pub fn width(&self, column: ColumnId) -> usize {
        self.widths
            .get(&column)
            .copied()
            .unwrap_or(MIN_COLUMN_WIDTH)
    }
}

fn share(column: ColumnId) -> Option<usize> {
    match column {
        ColumnId::Name => None,
        ColumnId::Description => Some(3),
        ColumnId::Path => Some(2),
    }
}

/// Measures the cells of a laid-out page the way the terminal shows them.
pub struct PageMeasure<'a> {
    view: &'a TableView,
    layout: &'a TableLayout,
}

impl<'a> PageMeasure<'a> {
    pub fn new(view: &'a TableView, layout: &'a TableLayout) -> Self {
        Self { view, layout }
    }
}

impl MeasureCell for PageMeasure<'_> {
    fn measure(&self, cell: &CellId) -> Option<CellGeometry> {
        let value = self.view.rows.get(cell.row)?.cell(cell.column)?;
        Some(CellGeometry {
            natural: measure_text_width(&value.value),
            available: self.layout.width(cell.column),
        })
    }
}

/// Data context for the table template
#[derive(Debug, Serialize)]
struct TableContext {
    title: String,
    /// Active filter, omitted when blank
    filter: Option<String>,
    /// Pre-padded header line
    header: String,
    separator: String,
    /// Pre-formatted rows
    rows: Vec<String>,
    /// "Page X of Y"
    page_label: String,
    navigation: String,
    total: usize,
    /// Full text of truncated cells
    notes: Vec<String>,
}

/// Data context for the column settings template
#[derive(Debug, Serialize)]
struct ColumnsContext {
    title: String,
    columns: Vec<ColumnRow>,
}

#[derive(Debug, Serialize)]
struct ColumnRow {
    mark: &'static str,
    key: String,
    label: String,
    hidable: bool,
}

/// Lay out the current page, measure overflow, and render it.
pub fn render_table<S: KeyValueStorage>(
    table: &mut GroupingsTable<S>,
    width: usize,
    output_mode: OutputMode,
) -> anyhow::Result<String> {
    let layout = TableLayout::compute(&table.view(), width);
    let unmeasured = table.view();
    table.measure_overflow(&PageMeasure::new(&unmeasured, &layout));
    let view = table.view();

    if output_mode.is_structured() {
        return Ok(serde_json::to_string_pretty(&view)? + "\n");
    }

    let context = build_table_context(&view, &layout);
    outstanding::render(TABLE_TEMPLATE, &context, &Theme::new())
        .map_err(|e| anyhow!("failed to render table: {e}"))
}

/// Render the column settings list.
pub fn render_columns(
    settings: &[ColumnSetting],
    output_mode: OutputMode,
) -> anyhow::Result<String> {
    if output_mode.is_structured() {
        return Ok(serde_json::to_string_pretty(settings)? + "\n");
    }

    let context = ColumnsContext {
        title: Style::new().bold().apply_to("Columns").to_string(),
        columns: settings
            .iter()
            .map(|setting| ColumnRow {
                mark: if setting.visible { "x" } else { " " },
                key: setting.column.key().to_string(),
                label: setting.label.clone(),
                hidable: setting.hidable,
            })
            .collect(),
    };
    outstanding::render(COLUMNS_TEMPLATE, &context, &Theme::new())
        .map_err(|e| anyhow!("failed to render columns: {e}"))
}

fn build_table_context(view: &TableView, layout: &TableLayout) -> TableContext {
    let header = {
        let cells: Vec<String> = view
            .headers
            .iter()
            .map(|header| {
                let text = header_text(header);
                pad(&text, layout.width(header.column), false)
            })
            .collect();
        let line = format!("{:>width$}{GAP}{}", "#", cells.join(GAP), width = ROW_NUMBER_WIDTH);
        Style::new().bold().apply_to(line.trim_end()).to_string()
    };

    let separator = {
        let width: usize = view
            .headers
            .iter()
            .map(|header| layout.width(header.column) + GAP.len())
            .sum();
        "-".repeat(ROW_NUMBER_WIDTH + width)
    };

    let link = Style::new().underlined();
    let rows = view
        .rows
        .iter()
        .map(|row| {
            let cells: Vec<String> = row
                .cells
                .iter()
                .map(|cell| {
                    let text = pad(&cell.value, layout.width(cell.column), true);
                    if cell.column == ColumnId::Name {
                        link.apply_to(text).to_string()
                    } else {
                        text
                    }
                })
                .collect();
            let line = format!(
                "{:>width$}{GAP}{}",
                row.index + 1,
                cells.join(GAP),
                width = ROW_NUMBER_WIDTH
            );
            line.trim_end().to_string()
        })
        .collect();

    let notes = view
        .rows
        .iter()
        .flat_map(|row| {
            row.cells
                .iter()
                .filter(|cell| cell.truncated == Some(true))
                .map(move |cell| {
                    let label = view
                        .header(cell.column)
                        .map(|header| header.label.as_str())
                        .unwrap_or_else(|| cell.column.key());
                    format!("{}. {label}: {}", row.index + 1, cell.value)
                })
        })
        .collect();

    TableContext {
        title: Style::new().bold().apply_to(TITLE).to_string(),
        filter: (!view.filter.trim().is_empty()).then(|| view.filter.clone()),
        header,
        separator,
        rows,
        page_label: view.pagination.label(),
        navigation: navigation(&view.pagination),
        total: view.pagination.total_rows,
        notes,
    }
}

/// Header label with its sort arrow.
fn header_text(header: &HeaderView) -> String {
    match header.sort.arrow() {
        "" => header.label.clone(),
        arrow => format!("{} {arrow}", header.label),
    }
}

/// Pad to `width`; cut with an ellipsis when `truncate` is set.
fn pad(text: &str, width: usize, truncate: bool) -> String {
    let tail = truncate.then_some(ELLIPSIS);
    pad_str(text, width, Alignment::Left, tail).into_owned()
}

fn navigation(pagination: &PaginationView) -> String {
    let dim = Style::new().dim();
    let control = |label: &str, enabled: bool| {
        if enabled {
            label.to_string()
        } else {
            dim.apply_to(label).to_string()
        }
    };
    [
        control("« first", pagination.can_previous),
        control("‹ prev", pagination.can_previous),
        control("next ›", pagination.can_next),
        control("last »", pagination.can_next),
    ]
    .join(" | ")
}
