//! Sectionizer Module Tests
//!
//! ## Test Scopes
//! - **Sentence scanner**: terminator handling, trimming, dropped fragments.
//! - **Grouping**: section sizes, id assignment, line joining.
//! - **Validation**: zero sentences per section is rejected.

#[cfg(test)]
mod tests {
    use crate::error::PipelineError;
    use crate::sectionizer::{sentences, split};

    // ============================================================
    // SENTENCE SCANNER
    // ============================================================

    #[test]
    fn test_sentences_keep_terminators_and_trim() {
        let found: Vec<&str> = sentences("  Hello there!\tHow are you?  Fine. ").collect();

        assert_eq!(found, vec!["Hello there!", "How are you?", "Fine."]);
    }

    #[test]
    fn test_sentences_drop_trailing_fragment() {
        let found: Vec<&str> = sentences("One. Two. no ending here").collect();

        assert_eq!(found, vec!["One.", "Two."]);
    }

    #[test]
    fn test_sentences_empty_text() {
        assert_eq!(sentences("").count(), 0);
        assert_eq!(sentences("   \n\t ").count(), 0);
    }

    #[test]
    fn test_sentences_consecutive_terminators() {
        let found: Vec<&str> = sentences("Wait... What?!").collect();

        assert_eq!(found, vec!["Wait.", ".", ".", "What?", "!"]);
    }

    // ============================================================
    // SECTION GROUPING
    // ============================================================

    #[test]
    fn test_split_example_document() {
        let sections = split("Great job today. The team failed badly.", 2).unwrap();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].id, 0);
        assert_eq!(sections[0].text, "Great job today. The team failed badly. ");
    }

    #[test]
    fn test_split_assigns_sequential_ids_and_short_tail() {
        let text = "A one. B two. C three. D four. E five.";
        let sections = split(text, 2).unwrap();

        assert_eq!(sections.len(), 3);
        assert_eq!(
            sections.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
        assert_eq!(sections[0].text, "A one. B two. ");
        assert_eq!(sections[1].text, "C three. D four. ");
        assert_eq!(sections[2].text, "E five. ");
    }

    #[test]
    fn test_split_joins_lines_and_skips_blank_ones() {
        let text = "First line\ncontinues here.\n\n\nSecond\r\nsentence!\n";
        let sections = split(text, 1).unwrap();

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].text, "First line continues here. ");
        assert_eq!(sections[1].text, "Second sentence! ");
    }

    #[test]
    fn test_split_does_not_double_space_lines_ending_in_whitespace() {
        let sections = split("Trailing space \nhere.", 1).unwrap();

        assert_eq!(sections[0].text, "Trailing space here. ");
    }

    #[test]
    fn test_split_empty_input_yields_nothing() {
        assert!(split("", 3).unwrap().is_empty());
        assert!(split("\n\n", 3).unwrap().is_empty());
    }

    #[test]
    fn test_split_unterminated_input_yields_nothing() {
        assert!(split("no punctuation at all", 1).unwrap().is_empty());
    }

    #[test]
    fn test_split_preserves_every_sentence_in_order() {
        let text = "Alpha. Beta! Gamma? Delta. Epsilon. Zeta! trailing";
        let sections = split(text, 4).unwrap();

        let rejoined: String = sections.iter().map(|s| s.text.as_str()).collect();
        let original: Vec<&str> = sentences(text).collect();
        let roundtrip: Vec<&str> = sentences(&rejoined).collect();

        assert_eq!(original, roundtrip);
        assert!(!rejoined.contains("trailing"));
    }

    #[test]
    fn test_split_rejects_zero_sentences_per_section() {
        let result = split("Something.", 0);

        assert!(matches!(result, Err(PipelineError::Config(_))));
    }
}
