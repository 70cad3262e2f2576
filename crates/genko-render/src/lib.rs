//! Manuscript grid layout engine, metrics, and display sizing for `genko`.

#![cfg_attr(
    not(test),
    deny(
        clippy::disallowed_methods,
        clippy::expect_used,
        clippy::unwrap_used,
        clippy::panic,
        clippy::panic_in_result_fn,
        clippy::todo,
        clippy::unimplemented
    )
)]

mod metrics;
mod render_ir;
mod render_layout;
mod rules;
mod sheet_policy;

pub use genko::Token;
pub use metrics::measure_cells;
pub use render_ir::{Cell, LayoutMetrics, LayoutResult};
pub use render_layout::{layout_manuscript, LayoutConfig, LayoutConfigError, LayoutEngine};
pub use rules::{PunctuationRules, DASH_CONTINUATION, MANUSCRIPT_RULES};
pub use sheet_policy::{CharacterGoal, DisplayPlan, SheetPolicy};
