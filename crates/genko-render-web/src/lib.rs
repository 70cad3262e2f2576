//! Web preview helpers for `genko-render`.
//!
//! Turns a layout result and display plan into a standalone HTML sheet (one
//! element per box, row-major) plus a JSON payload for other consumers.

use genko_render::{
    CharacterGoal, DisplayPlan, LayoutConfig, LayoutEngine, LayoutMetrics, LayoutResult,
    SheetPolicy,
};
use serde::Serialize;

/// Current crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// One displayed box.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub text: String,
    pub used: bool,
    /// Box holds content past the character budget.
    pub overflow: bool,
}

/// Everything a preview needs to draw one sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PreviewPayload {
    pub config: LayoutConfig,
    pub goal: CharacterGoal,
    pub metrics: LayoutMetrics,
    pub plan: DisplayPlan,
    /// `plan.rows` rows of `config.width` boxes.
    pub rows: Vec<Vec<CellView>>,
}

/// Lay out `text` and size the sheet for display.
pub fn build_payload(
    text: &str,
    cfg: LayoutConfig,
    policy: SheetPolicy,
    goal: CharacterGoal,
) -> PreviewPayload {
    let engine = LayoutEngine::new(cfg);
    let layout = engine.layout_text(text);
    let plan = policy.plan(&layout.metrics, layout.width, goal);
    payload_from_layout(&layout, engine.config(), plan, goal)
}

/// Map a finished layout onto `plan.rows` display rows.
pub fn payload_from_layout(
    layout: &LayoutResult,
    config: LayoutConfig,
    plan: DisplayPlan,
    goal: CharacterGoal,
) -> PreviewPayload {
    let width = layout.width.max(1);
    let mut rows = Vec::with_capacity(plan.rows);
    for row in 0..plan.rows {
        let mut cells = Vec::with_capacity(width);
        for col in 0..width {
            let index = row * width + col;
            let view = match layout.cells.get(index) {
                Some(cell) => CellView {
                    text: cell.text.clone(),
                    used: cell.used,
                    overflow: cell.used && plan.is_overflow_box(index),
                },
                None => CellView {
                    text: String::new(),
                    used: false,
                    overflow: false,
                },
            };
            cells.push(view);
        }
        rows.push(cells);
    }
    if layout.cells.len() > plan.boxes {
        log::debug!(
            "preview truncates {} trailing padding cells",
            layout.cells.len() - plan.boxes
        );
    }
    PreviewPayload {
        config,
        goal,
        metrics: layout.metrics,
        plan,
        rows,
    }
}

/// Escape text for HTML element content and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn stats_line(payload: &PreviewPayload) -> String {
    let mut line = format!(
        "used {} / consumed {} / sheet {} boxes ({} rows x {})",
        payload.metrics.used_count,
        payload.metrics.consumed_count,
        payload.metrics.sheet_count,
        payload.plan.rows,
        payload.config.width
    );
    if let Some(max) = payload.plan.budget {
        line.push_str(&format!(
            " | budget {} overflow {}",
            max,
            payload.plan.overflow.unwrap_or(0)
        ));
    }
    if let Some(shortfall) = payload.plan.shortfall {
        line.push_str(&format!(" | short by {}", shortfall));
    }
    line
}

/// Standalone HTML document for one sheet.
pub fn build_html(payload: &PreviewPayload) -> Result<String, serde_json::Error> {
    let payload_json = serde_json::to_string(payload)?;
    let safe_json = payload_json.replace("</script>", "<\\/script>");

    let mut grid = String::with_capacity(payload.plan.boxes * 48);
    for row in &payload.rows {
        grid.push_str("    <div class=\"paper-row\">");
        for cell in row {
            let class = match (cell.used, cell.overflow) {
                (_, true) => "paper-cell used overflow",
                (true, false) => "paper-cell used",
                (false, false) => "paper-cell",
            };
            grid.push_str(&format!(
                "<div class=\"{}\">{}</div>",
                class,
                escape_html(&cell.text)
            ));
        }
        grid.push_str("</div>\n");
    }

    let template = r#"<!doctype html>
<html lang="ja">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>genko preview</title>
  <style>
    body { margin: 0; padding: 20px; background: #f2efe8; font-family: serif; }
    .stats { margin-bottom: 12px; color: #675f50; font-family: sans-serif; }
    .paper-inner { display: inline-block; background: #fdfbf7; padding: 8px; }
    .paper-row { display: grid; grid-template-columns: repeat(__COLUMNS__, 1.6em); }
    .paper-cell { height: 1.6em; border: 1px solid #d7a39a; text-align: center; line-height: 1.6em; }
    .paper-cell.overflow { background: #f6d5cf; }
  </style>
</head>
<body>
  <div class="stats">__STATS__</div>
  <div class="paper-inner">
__GRID__  </div>
  <script type="application/json" id="genko-payload">__PAYLOAD__</script>
</body>
</html>
"#;

    Ok(template
        .replace("__COLUMNS__", &payload.config.width.to_string())
        .replace("__STATS__", &escape_html(&stats_line(payload)))
        .replace("__GRID__", &grid)
        .replace("__PAYLOAD__", &safe_json))
}
