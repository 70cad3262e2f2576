use serde::{Deserialize, Serialize};

/// One box of the manuscript grid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Box text. Empty for blanks and padding; may hold a shared
    /// trailing punctuation mark after its main character.
    pub text: String,
    /// `false` marks structural row padding that never counts as content.
    pub used: bool,
}

impl Cell {
    /// Used cell holding text.
    pub fn content(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            used: true,
        }
    }

    /// Used empty cell (indent or mandated separator).
    pub fn blank() -> Self {
        Self {
            text: String::new(),
            used: true,
        }
    }

    /// Unused padding cell.
    pub fn padding() -> Self {
        Self::default()
    }

    /// Used cell with no text.
    pub fn is_blank(&self) -> bool {
        self.used && self.text.is_empty()
    }
}

/// Size metrics derived from a finished cell sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutMetrics {
    /// Cells with `used == true`.
    pub used_count: usize,
    /// Boxes up to and including the last used one.
    pub consumed_count: usize,
    /// `consumed_count` rounded up to whole rows, or 0 when nothing is used.
    pub sheet_count: usize,
}

impl LayoutMetrics {
    /// Whole rows needed to show every used cell.
    pub fn rows_needed(&self, width: usize) -> usize {
        self.sheet_count / width.max(1)
    }
}

/// Output of one layout pass: the grid cells in row-major order plus metrics.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Row-major cells; always a whole number of rows.
    pub cells: Vec<Cell>,
    /// Boxes per row.
    pub width: usize,
    #[serde(flatten)]
    pub metrics: LayoutMetrics,
}

impl LayoutResult {
    pub fn used_count(&self) -> usize {
        self.metrics.used_count
    }

    pub fn consumed_count(&self) -> usize {
        self.metrics.consumed_count
    }

    pub fn sheet_count(&self) -> usize {
        self.metrics.sheet_count
    }

    /// Number of materialized rows.
    pub fn row_count(&self) -> usize {
        self.cells.len() / self.width.max(1)
    }

    /// Iterate the grid one row at a time.
    pub fn rows(&self) -> core::slice::Chunks<'_, Cell> {
        self.cells.chunks(self.width.max(1))
    }

    /// Cell at a row/column position.
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Cell> {
        if col >= self.width {
            return None;
        }
        self.cells.get(row.checked_mul(self.width)?.checked_add(col)?)
    }

    /// Row-major grid text with unused padding shown as `pad`.
    ///
    /// Used blanks render as an ideographic space so the two stay
    /// distinguishable in plain-text dumps.
    pub fn to_grid_text(&self, pad: char) -> String {
        let mut out = String::with_capacity(self.cells.len() * 3);
        for row in self.rows() {
            for cell in row {
                if !cell.used {
                    out.push(pad);
                } else if cell.text.is_empty() {
                    out.push('\u{3000}');
                } else {
                    out.push_str(&cell.text);
                }
            }
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LayoutResult {
        LayoutResult {
            cells: vec![
                Cell::content("あ"),
                Cell::blank(),
                Cell::padding(),
                Cell::content("い。"),
                Cell::padding(),
                Cell::padding(),
            ],
            width: 3,
            metrics: LayoutMetrics {
                used_count: 3,
                consumed_count: 4,
                sheet_count: 6,
            },
        }
    }

    #[test]
    fn rows_and_cell_lookup_are_row_major() {
        let result = sample();
        assert_eq!(result.row_count(), 2);
        assert_eq!(result.rows().count(), 2);
        assert_eq!(result.cell_at(1, 0).map(|c| c.text.as_str()), Some("い。"));
        assert_eq!(result.cell_at(0, 3), None);
        assert_eq!(result.cell_at(2, 0), None);
    }

    #[test]
    fn grid_text_distinguishes_blank_from_padding() {
        assert_eq!(sample().to_grid_text('.'), "あ\u{3000}.\nい。..\n");
    }

    #[test]
    fn json_form_flattens_metrics() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["used_count"], 3);
        assert_eq!(json["consumed_count"], 4);
        assert_eq!(json["sheet_count"], 6);
        assert_eq!(json["width"], 3);
        assert_eq!(json["cells"][1]["used"], true);
        let back: LayoutResult = serde_json::from_value(json).unwrap();
        assert_eq!(back, sample());
    }
}
