use core::fmt;

use genko::{prepare_paragraph, split_paragraphs, Token};
use serde::{Deserialize, Serialize};

use crate::metrics::measure_cells;
use crate::render_ir::{Cell, LayoutResult};
use crate::rules::{PunctuationRules, DASH_CONTINUATION, MANUSCRIPT_RULES};

const DEFAULT_WIDTH: usize = 20;
const DEFAULT_DIGITS_PER_BOX: usize = 2;

/// Layout configuration for one manuscript grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Boxes per row.
    pub width: usize,
    /// Blank boxes opening every non-empty paragraph.
    pub indent_boxes: usize,
    /// Give typed spaces and tabs their own box (except at row start).
    pub count_spaces: bool,
    /// ASCII digits packed into one box.
    pub digits_per_box: usize,
}

impl LayoutConfig {
    /// Row widths offered by common manuscript paper.
    pub const PRESET_WIDTHS: [usize; 2] = [20, 25];

    /// Default configuration with a different row width.
    pub fn with_width(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Reject configurations the engine cannot lay out.
    pub fn validate(&self) -> Result<(), LayoutConfigError> {
        if self.width == 0 {
            return Err(LayoutConfigError::new(
                "LAYOUT_ZERO_WIDTH",
                "width",
                "row width must be at least one box",
            ));
        }
        if self.digits_per_box == 0 {
            return Err(LayoutConfigError::new(
                "LAYOUT_ZERO_DIGIT_GROUP",
                "digits_per_box",
                "digit groups must hold at least one digit",
            ));
        }
        Ok(())
    }

    /// Replace invalid fields with their defaults.
    pub fn normalized(mut self) -> Self {
        if self.width == 0 {
            log::warn!("layout width 0 is invalid; using {}", DEFAULT_WIDTH);
            self.width = DEFAULT_WIDTH;
        }
        if self.digits_per_box == 0 {
            log::warn!(
                "digits_per_box 0 is invalid; using {}",
                DEFAULT_DIGITS_PER_BOX
            );
            self.digits_per_box = DEFAULT_DIGITS_PER_BOX;
        }
        self
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            indent_boxes: 1,
            count_spaces: true,
            digits_per_box: DEFAULT_DIGITS_PER_BOX,
        }
    }
}

/// Rejected layout configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutConfigError {
    /// Stable machine-readable code.
    pub code: &'static str,
    /// Offending configuration field.
    pub field: &'static str,
    /// Human-readable message.
    pub message: Box<str>,
}

impl LayoutConfigError {
    fn new(code: &'static str, field: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            field,
            message: message.into().into_boxed_str(),
        }
    }
}

impl fmt::Display for LayoutConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} [field={}]", self.code, self.message, self.field)
    }
}

impl std::error::Error for LayoutConfigError {}

/// Deterministic engine that fills a manuscript grid with text.
///
/// Each call to [`LayoutEngine::layout_text`] is independent and returns a
/// fresh [`LayoutResult`].
#[derive(Clone, Copy, Debug)]
pub struct LayoutEngine {
    cfg: LayoutConfig,
    rules: &'static PunctuationRules,
}

impl LayoutEngine {
    /// Create an engine, defaulting invalid configuration fields.
    pub fn new(cfg: LayoutConfig) -> Self {
        Self {
            cfg: cfg.normalized(),
            rules: &MANUSCRIPT_RULES,
        }
    }

    /// Create an engine, rejecting invalid configuration.
    pub fn try_new(cfg: LayoutConfig) -> Result<Self, LayoutConfigError> {
        cfg.validate()?;
        Ok(Self {
            cfg,
            rules: &MANUSCRIPT_RULES,
        })
    }

    /// Use a different fixed rule table.
    pub fn with_rules(mut self, rules: &'static PunctuationRules) -> Self {
        self.rules = rules;
        self
    }

    /// Effective configuration after normalization.
    pub fn config(&self) -> LayoutConfig {
        self.cfg
    }

    /// Lay out `text` into whole grid rows.
    pub fn layout_text(&self, text: &str) -> LayoutResult {
        let mut grid = GridWriter::new(self.cfg.width);
        let mut paragraphs = split_paragraphs(text).peekable();
        let mut paragraph_count = 0usize;

        while let Some(paragraph) = paragraphs.next() {
            paragraph_count += 1;
            if !grid.is_empty() {
                grid.pad_row();
            }
            let start = grid.len();
            if !paragraph.is_empty() {
                for _ in 0..self.cfg.indent_boxes {
                    grid.push_blank();
                }
            }

            let tokens = prepare_paragraph(paragraph, self.cfg.digits_per_box);
            self.place_tokens(&mut grid, &tokens);

            if grid.len() == start {
                grid.push_blank_row();
            }
            if paragraphs.peek().is_some() {
                grid.pad_row();
            }
        }
        grid.pad_row();

        let cells = grid.into_cells();
        let metrics = measure_cells(&cells, self.cfg.width);
        log::debug!(
            "manuscript layout: paragraphs={} cells={} used={} consumed={} width={}",
            paragraph_count,
            cells.len(),
            metrics.used_count,
            metrics.consumed_count,
            self.cfg.width
        );
        LayoutResult {
            cells,
            width: self.cfg.width,
            metrics,
        }
    }

    fn place_tokens(&self, grid: &mut GridWriter, tokens: &[Token]) {
        let rules = self.rules;
        let mut i = 0usize;
        while i < tokens.len() {
            let token = &tokens[i];
            let next = tokens.get(i + 1);
            i += 1;

            if token.is_typed_space() {
                if self.cfg.count_spaces && grid.col() != 0 {
                    grid.push_blank();
                }
                continue;
            }

            if rules.is_two_box(token) {
                if grid.col() + 1 == grid.width() {
                    log::trace!("two-box token at row end; wrapping at cell {}", grid.len());
                    grid.pad_row();
                }
                grid.push(Cell::content(token.to_text()));
                grid.push(Cell::content(DASH_CONTINUATION));
                continue;
            }

            let next_is_space = next.is_some_and(Token::is_typed_space);

            if grid.col() == 0 && rules.is_shareable(token) {
                if grid.share_with_last_used(token) {
                    if rules.requires_blank_after(token) {
                        if next_is_space {
                            i += 1;
                        }
                        // No separator when the paragraph ends here.
                        if i < tokens.len() {
                            grid.push_blank();
                        }
                    }
                    continue;
                }
                // Nothing to attach to yet: place it as-is, no further rules.
                grid.push(Cell::content(token.to_text()));
                continue;
            }

            grid.push(Cell::content(token.to_text()));

            if rules.requires_blank_after(token) {
                // The mandated blank stands in for one typed space, counted or not.
                grid.push_blank();
                if next_is_space {
                    i += 1;
                }
                continue;
            }
            if next_is_space && rules.forbids_typed_space_after(token) {
                i += 1;
            }
        }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

/// Lay out `text` with `cfg`, defaulting invalid configuration fields.
pub fn layout_manuscript(text: &str, cfg: LayoutConfig) -> LayoutResult {
    LayoutEngine::new(cfg).layout_text(text)
}

/// Append-only cell sequence with a row cursor.
struct GridWriter {
    width: usize,
    cells: Vec<Cell>,
    col: usize,
    last_used: Option<usize>,
}

impl GridWriter {
    fn new(width: usize) -> Self {
        let width = width.max(1);
        Self {
            width,
            cells: Vec::with_capacity(width * 4),
            col: 0,
            last_used: None,
        }
    }

    fn width(&self) -> usize {
        self.width
    }

    fn col(&self) -> usize {
        self.col
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn push(&mut self, cell: Cell) {
        if cell.used {
            self.last_used = Some(self.cells.len());
        }
        self.cells.push(cell);
        self.col = (self.col + 1) % self.width;
    }

    fn push_blank(&mut self) {
        self.push(Cell::blank());
    }

    /// Pad with unused cells up to the next row boundary.
    fn pad_row(&mut self) {
        while self.col != 0 {
            self.push(Cell::padding());
        }
    }

    fn push_blank_row(&mut self) {
        for _ in 0..self.width {
            self.push(Cell::padding());
        }
    }

    /// Attach `token` to the most recent used cell instead of opening a box.
    fn share_with_last_used(&mut self, token: &Token) -> bool {
        let Some(idx) = self.last_used else {
            return false;
        };
        let Some(cell) = self.cells.get_mut(idx) else {
            return false;
        };
        token.write_text(&mut cell.text);
        log::trace!("shared {:?} into cell {}", token, idx);
        true
    }

    fn into_cells(self) -> Vec<Cell> {
        self.cells
    }
}
