use crate::render_ir::{Cell, LayoutMetrics};

/// Derive used/consumed/sheet counts from a finished cell sequence.
pub fn measure_cells(cells: &[Cell], width: usize) -> LayoutMetrics {
    let width = width.max(1);
    let used_count = cells.iter().filter(|cell| cell.used).count();
    let last_used_index = cells
        .iter()
        .rposition(|cell| cell.used)
        .map_or(0, |idx| idx + 1);
    let sheet_count = if last_used_index == 0 {
        0
    } else {
        last_used_index.div_ceil(width) * width
    };
    LayoutMetrics {
        used_count,
        consumed_count: last_used_index,
        sheet_count,
    }
}
