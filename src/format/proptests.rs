//! Property-based tests for reply formatting
//!
//! - One block per non-blank line, never more, never fewer
//! - Blocks come out in line order
//! - Formatting is deterministic

use super::*;
use proptest::prelude::*;

/// One line in one of the shapes the formatter distinguishes
fn arb_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ \t]{0,4}",
        "[a-zA-Z0-9 .,!?]{1,40}",
        "[a-zA-Z0-9 .,]{1,30}".prop_map(|s| format!("- {s}")),
        "[a-zA-Z0-9 ]{0,30}".prop_map(|s| format!("**{s}**")),
        ("[a-zA-Z ]{0,10}", "[a-zA-Z ]{1,10}").prop_map(|(a, b)| format!("{a} **{b}** tail")),
    ]
}

fn arb_text() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(arb_line(), 0..20)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn prop_one_block_per_non_blank_line(lines in arb_text()) {
        let text = lines.join("\n");
        let non_blank = lines.iter().filter(|l| !l.trim().is_empty()).count();
        prop_assert_eq!(format_content(&text).len(), non_blank);
    }

    #[test]
    fn prop_blocks_follow_line_order(lines in arb_text()) {
        let text = lines.join("\n");
        let expected: Vec<FormattedBlock> = lines
            .iter()
            .filter_map(|line| format_line(line))
            .collect();
        let blocks = format_content(&text);
        prop_assert_eq!(blocks, expected);
    }

    #[test]
    fn prop_formatting_is_deterministic(lines in arb_text()) {
        let text = lines.join("\n");
        prop_assert_eq!(format_content(&text), format_content(&text));
    }

    #[test]
    fn prop_plain_lines_become_trimmed_paragraphs(line in "[a-zA-Z0-9][a-zA-Z0-9 .,]{0,30}") {
        let padded = format!("  {line}  ");
        let blocks = format_content(&padded);
        prop_assert_eq!(blocks, vec![FormattedBlock::Paragraph(line.trim().to_string())]);
    }
}
