//! Sort state for the metrics table

use stock_core::{MetricColumn, MetricRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn indicator(&self) -> &'static str {
        match self {
            Self::Ascending => "\u{25b2}",
            Self::Descending => "\u{25bc}",
        }
    }
}

/// Table sort state.
///
/// `order` holds indices into the metrics slice in display order. Rows keep
/// their original index, which is also their series link key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    /// Per-column toggle flag, indexed by [`MetricColumn::position`].
    /// `true` means the next click sorts ascending.
    flags: [bool; MetricColumn::COUNT],
    order: Vec<usize>,
    active: Option<(MetricColumn, SortDirection)>,
}

impl TableState {
    /// Unsorted state: rows in response order, every flag cleared
    pub fn new(row_count: usize) -> Self {
        Self {
            flags: [false; MetricColumn::COUNT],
            order: (0..row_count).collect(),
            active: None,
        }
    }

    /// Header click: re-sort the current order by `column`, then flip the
    /// column's flag.
    pub fn click(mut self, column: MetricColumn, metrics: &[MetricRecord]) -> Self {
        let slot = column.position();
        let direction = if self.flags[slot] {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        };

        if self.order.len() != metrics.len() {
            tracing::warn!(
                "Table order covers {} rows but {} metrics present, resetting order",
                self.order.len(),
                metrics.len()
            );
            self.order = (0..metrics.len()).collect();
        }

        // sort_by is stable, so ties keep their previous relative order
        self.order.sort_by(|&a, &b| {
            let ord = metrics[a].value(column).compare(&metrics[b].value(column));
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });

        self.flags[slot] = !self.flags[slot];
        self.active = Some((column, direction));
        tracing::debug!("Sorted metrics by {} {:?}", column, direction);
        self
    }

    /// Original row indices in display order
    pub fn rows(&self) -> &[usize] {
        &self.order
    }

    /// Column and direction of the most recent sort
    pub fn active(&self) -> Option<(MetricColumn, SortDirection)> {
        self.active
    }

    /// Direction the last sort of `column` used, if it is the active column
    pub fn direction_of(&self, column: MetricColumn) -> Option<SortDirection> {
        self.active
            .and_then(|(c, d)| (c == column).then_some(d))
    }

    pub fn flag(&self, column: MetricColumn) -> bool {
        self.flags[column.position()]
    }
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(0)
    }
}
