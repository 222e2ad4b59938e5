//! Overflow detection for truncated cells.
//!
//! Whether a cell's text is wider than its container can only be known
//! after layout, so detection is pull-based: the presentation layer lays
//! out a page, then hands the detector a [`MeasureCell`] that reports the
//! natural and available width of each rendered cell.
//!
//! The map is cleared whenever layout may have changed (new data, a column
//! shown or hidden, a resize). Until the next measurement every cell reads
//! as not overflowing: a missed tooltip is acceptable, a bogus one is not.

use std::collections::HashMap;

use serde::Serialize;
use tracing::debug;

use crate::data::column::ColumnId;

/// Identity of a rendered cell: its row position on the current page and
/// its column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CellId {
    pub row: usize,
    pub column: ColumnId,
}

impl CellId {
    pub fn new(row: usize, column: ColumnId) -> Self {
        Self { row, column }
    }
}

/// Measured geometry of one cell, in whatever unit the presentation layer
/// lays out with (terminal columns, pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellGeometry {
    /// Width the content would take unclipped
    pub natural: usize,
    /// Width the container gives it
    pub available: usize,
}

impl CellGeometry {
    pub fn overflows(&self) -> bool {
        self.natural > self.available
    }
}

/// Reads rendered geometry.
pub trait MeasureCell {
    /// Geometry of a rendered cell, or `None` if it cannot be measured
    /// (not rendered, detached). Unmeasurable cells count as fitting.
    fn measure(&self, cell: &CellId) -> Option<CellGeometry>;
}

impl<F> MeasureCell for F
where
    F: Fn(&CellId) -> Option<CellGeometry>,
{
    fn measure(&self, cell: &CellId) -> Option<CellGeometry> {
        self(cell)
    }
}

/// Cell -> is truncated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverflowMap {
    cells: HashMap<CellId, bool>,
}

impl OverflowMap {
    /// Truncation flag for a cell; `None` if it was not measured.
    pub fn get(&self, cell: &CellId) -> Option<bool> {
        self.cells.get(cell).copied()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells currently flagged as truncated.
    pub fn truncated(&self) -> impl Iterator<Item = &CellId> {
        self.cells
            .iter()
            .filter(|(_, truncated)| **truncated)
            .map(|(cell, _)| cell)
    }
}

/// Maintains the overflow map for the rendered page.
#[derive(Debug, Clone, Default)]
pub struct OverflowDetector {
    map: OverflowMap,
}

impl OverflowDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every measurement. Call when data, visible columns or the
    /// viewport change.
    pub fn invalidate(&mut self) {
        if !self.map.is_empty() {
            debug!(cells = self.map.len(), "overflow map invalidated");
        }
        self.map.cells.clear();
    }

    /// Re-measure the given cells, replacing the previous map.
    pub fn recompute<I, M>(&mut self, cells: I, measure: &M) -> &OverflowMap
    where
        I: IntoIterator<Item = CellId>,
        M: MeasureCell + ?Sized,
    {
        let cells: HashMap<CellId, bool> = cells
            .into_iter()
            .map(|cell| {
                let truncated = measure
                    .measure(&cell)
                    .is_some_and(|geometry| geometry.overflows());
                (cell, truncated)
            })
            .collect();

        self.map = OverflowMap { cells };
        debug!(
            measured = self.map.len(),
            truncated = self.map.truncated().count(),
            "overflow recomputed"
        );
        &self.map
    }

    /// Whether a cell is known to be truncated.
    pub fn is_truncated(&self, cell: &CellId) -> bool {
        self.map.get(cell).unwrap_or(false)
    }

    pub fn map(&self) -> &OverflowMap {
        &self.map
    }
}
