use serde::{Deserialize, Serialize};

use crate::render_ir::LayoutMetrics;

const DEFAULT_MIN_ROWS: usize = 3;

/// Optional character goal for a manuscript.
///
/// `max` is the character budget: the sheet always shows enough rows to
/// reach it, and boxes consumed past it count as overflow.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterGoal {
    pub min: Option<usize>,
    pub max: Option<usize>,
}

impl CharacterGoal {
    /// Goal with only a character budget.
    pub fn budget(max: usize) -> Self {
        Self {
            min: None,
            max: Self::positive(max),
        }
    }

    /// Goal range; zero limits are treated as absent.
    pub fn range(min: usize, max: usize) -> Self {
        Self {
            min: Self::positive(min),
            max: Self::positive(max),
        }
    }

    /// Parse a user-entered limit. Blank, non-integer, zero or negative
    /// input means "no limit".
    pub fn parse_limit(raw: &str) -> Option<usize> {
        raw.trim().parse::<usize>().ok().and_then(Self::positive)
    }

    pub fn is_unset(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    fn positive(n: usize) -> Option<usize> {
        (n > 0).then_some(n)
    }
}

/// Rows to materialize for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetPolicy {
    /// Rows always shown, even for tiny or empty content.
    pub min_rows: usize,
}

impl Default for SheetPolicy {
    fn default() -> Self {
        Self {
            min_rows: DEFAULT_MIN_ROWS,
        }
    }
}

/// Display decision for one layout result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPlan {
    /// Rows to draw.
    pub rows: usize,
    /// `rows * width`, saturating at `usize::MAX`.
    pub boxes: usize,
    /// Character budget in force, if any.
    pub budget: Option<usize>,
    /// Boxes consumed beyond the budget.
    pub overflow: Option<usize>,
    /// Boxes still missing to reach the goal minimum.
    pub shortfall: Option<usize>,
    consumed_count: usize,
}

impl DisplayPlan {
    /// Box at `index` lies past the budget but before the end of content.
    pub fn is_overflow_box(&self, index: usize) -> bool {
        self.budget
            .is_some_and(|max| index >= max && index < self.consumed_count)
    }

    pub fn is_over_budget(&self) -> bool {
        self.overflow.is_some_and(|n| n > 0)
    }
}

impl SheetPolicy {
    /// Decide how many rows to show for `metrics` at `width`.
    pub fn plan(&self, metrics: &LayoutMetrics, width: usize, goal: CharacterGoal) -> DisplayPlan {
        let width = width.max(1);
        let content_rows = metrics.sheet_count.div_ceil(width);
        let budget_rows = goal.max.map_or(0, |max| max.div_ceil(width));
        let rows = self.min_rows.max(content_rows).max(budget_rows);
        DisplayPlan {
            rows,
            boxes: rows.saturating_mul(width),
            budget: goal.max,
            overflow: goal.max.map(|max| metrics.consumed_count.saturating_sub(max)),
            shortfall: goal.min.map(|min| min.saturating_sub(metrics.consumed_count)),
            consumed_count: metrics.consumed_count,
        }
    }
}
