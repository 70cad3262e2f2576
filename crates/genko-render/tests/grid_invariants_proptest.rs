//! Property tests for layout invariants that must hold for any input text.

use genko_render::{layout_manuscript, CharacterGoal, LayoutConfig, SheetPolicy};
use proptest::prelude::*;

/// Text drawn from the characters the layout rules care about.
fn manuscript_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("あ"),
            Just("漢"),
            Just("a"),
            Just(" "),
            Just("\t"),
            Just("、"),
            Just("。"),
            Just("」"),
            Just(","),
            Just("."),
            Just("?"),
            Just("!"),
            Just("…"),
            Just("..."),
            Just("\u{2014}"),
            Just("7"),
            Just("42"),
            Just("\n"),
            Just("\r\n"),
            Just("\r"),
        ],
        0..80,
    )
    .prop_map(|parts| parts.concat())
}

fn layout_config() -> impl Strategy<Value = LayoutConfig> {
    (1usize..30, 0usize..4, any::<bool>(), 1usize..5).prop_map(
        |(width, indent_boxes, count_spaces, digits_per_box)| LayoutConfig {
            width,
            indent_boxes,
            count_spaces,
            digits_per_box,
        },
    )
}

proptest! {
    #[test]
    fn cells_fill_whole_rows(text in manuscript_text(), cfg in layout_config()) {
        let result = layout_manuscript(&text, cfg);
        prop_assert!(!result.cells.is_empty());
        prop_assert_eq!(result.cells.len() % cfg.width, 0);
        prop_assert_eq!(result.width, cfg.width);
    }

    #[test]
    fn counts_are_ordered(text in manuscript_text(), cfg in layout_config()) {
        let result = layout_manuscript(&text, cfg);
        prop_assert!(result.used_count() <= result.consumed_count());
        prop_assert!(result.consumed_count() <= result.cells.len());
        prop_assert_eq!(result.sheet_count() % cfg.width, 0);
        prop_assert!(result.sheet_count() >= result.consumed_count());
        prop_assert!(result.sheet_count() < result.consumed_count() + cfg.width);
        if result.consumed_count() == 0 {
            prop_assert_eq!(result.sheet_count(), 0);
        }
    }

    #[test]
    fn layout_is_deterministic(text in manuscript_text(), cfg in layout_config()) {
        prop_assert_eq!(layout_manuscript(&text, cfg), layout_manuscript(&text, cfg));
    }

    #[test]
    fn dash_pairs_share_a_row(text in manuscript_text(), cfg in layout_config()) {
        prop_assume!(cfg.width >= 2);
        let result = layout_manuscript(&text, cfg);
        for row in result.rows() {
            if let Some(last) = row.last() {
                // A dash glyph never sits alone in the final column.
                let dash_count = row.iter().filter(|cell| cell.text == "\u{2014}").count();
                prop_assert!(last.text != "\u{2014}" || dash_count % 2 == 0, "lone dash in final column");
            }
        }
    }

    #[test]
    fn display_rows_cover_content_and_floor(
        text in manuscript_text(),
        cfg in layout_config(),
        budget in 0usize..200,
        min_rows in 0usize..6,
    ) {
        let result = layout_manuscript(&text, cfg);
        let plan = SheetPolicy { min_rows }.plan(&result.metrics, cfg.width, CharacterGoal::budget(budget));
        prop_assert!(plan.rows >= min_rows);
        prop_assert!(plan.boxes >= result.sheet_count());
        prop_assert!(plan.boxes >= budget);
        prop_assert_eq!(plan.boxes, plan.rows * cfg.width);
    }
}
