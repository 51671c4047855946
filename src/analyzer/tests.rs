//! Analyzer Module Tests
//!
//! ## Test Scopes
//! - **Word count**: edge-punctuation trimming policy.
//! - **Top words**: normalization, ordering, truncation.
//! - **Sentiment**: lexicon scoring, thresholds, lexicon substitution.
//! - **Redaction**: the capitalized-word filter and its over-redaction.
//! - **Ranking**: length ordering with stable ties.

#[cfg(test)]
mod tests {
    use crate::analyzer::text::{
        count_words, label_for_score, normalize_word, rank_sentences, score_sentiment,
        top_words, NameRedactor,
    };
    use crate::analyzer::{SentimentLexicon, TextAnalyzer};
    use crate::codec::types::{Section, SentimentLabel};
    use crate::error::PipelineError;

    const EXAMPLE: &str = "Great job today. The team failed badly. ";

    // ============================================================
    // WORD COUNT
    // ============================================================

    #[test]
    fn test_count_words_example() {
        assert_eq!(count_words(EXAMPLE), 7);
    }

    #[test]
    fn test_count_words_strips_one_char_per_edge() {
        // "(x)" -> "x", "--" -> "" (dropped), "..." -> "." (kept), "'a'" -> "a"
        assert_eq!(count_words("(x) -- ... 'a'"), 3);
    }

    #[test]
    fn test_count_words_single_symbol_tokens() {
        assert_eq!(count_words("- ! ?"), 0);
        assert_eq!(count_words("42"), 0);
        assert_eq!(count_words("123"), 1);
    }

    #[test]
    fn test_count_words_empty() {
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words(" \t\n "), 0);
    }

    // ============================================================
    // TOP WORDS
    // ============================================================

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("Don't!"), "dont");
        assert_eq!(normalize_word("R2-D2"), "rd");
        assert_eq!(normalize_word("2024"), "");
    }

    #[test]
    fn test_top_words_example_ties_keep_first_seen_order() {
        let top = top_words(EXAMPLE, 3);

        assert_eq!(
            top,
            vec![
                ("great".to_string(), 1),
                ("job".to_string(), 1),
                ("today".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_top_words_orders_by_count() {
        let top = top_words("b a b c. A b, a!", 2);

        assert_eq!(top, vec![("b".to_string(), 3), ("a".to_string(), 3)]);
    }

    #[test]
    fn test_top_words_returns_all_when_fewer_than_k() {
        let top = top_words("one two two", 10);

        assert_eq!(top, vec![("two".to_string(), 2), ("one".to_string(), 1)]);
    }

    #[test]
    fn test_top_words_skips_non_alphabetic_tokens() {
        assert!(top_words("123 --- 4.5", 5).is_empty());
    }

    // ============================================================
    // SENTIMENT
    // ============================================================

    #[test]
    fn test_sentiment_default_lexicon_example() {
        // "great" is positive; "failed" is not in the default negative list.
        let (label, score) = score_sentiment(EXAMPLE, &SentimentLexicon::default());

        assert_eq!(label, SentimentLabel::Positive);
        assert!((score - 1.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_sentiment_with_substituted_lexicon() {
        let lexicon = SentimentLexicon::new(["great"], ["failed"]);
        let (label, score) = score_sentiment(EXAMPLE, &lexicon);

        assert_eq!(label, SentimentLabel::Neutral);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_sentiment_negative() {
        let (label, score) =
            score_sentiment("Terrible, awful day.", &SentimentLexicon::default());

        assert_eq!(label, SentimentLabel::Negative);
        assert!((score + 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_sentiment_no_words_is_neutral_zero() {
        let (label, score) = score_sentiment("... 42 !", &SentimentLexicon::default());

        assert_eq!(label, SentimentLabel::Neutral);
        assert_eq!(score, 0.0);
    }

    #[test]
    fn test_sentiment_thresholds_are_strict() {
        assert_eq!(label_for_score(0.1), SentimentLabel::Neutral);
        assert_eq!(label_for_score(-0.1), SentimentLabel::Neutral);
        assert_eq!(label_for_score(0.1001), SentimentLabel::Positive);
        assert_eq!(label_for_score(-0.1001), SentimentLabel::Negative);
    }

    #[test]
    fn test_default_lexicon_sizes() {
        let lexicon = SentimentLexicon::default();

        assert_eq!(lexicon.positive_len(), 19);
        assert_eq!(lexicon.negative_len(), 18);
        assert_eq!(lexicon.polarity("brilliant"), Some(SentimentLabel::Positive));
        assert_eq!(lexicon.polarity("broken"), Some(SentimentLabel::Negative));
        assert_eq!(lexicon.polarity("table"), None);
    }

    // ============================================================
    // NAME REDACTION
    // ============================================================

    #[test]
    fn test_redaction_replaces_capitalized_words() {
        let redactor = NameRedactor::new("FFFFF").unwrap();

        assert_eq!(
            redactor.redact("Alice met Bob in Paris."),
            "FFFFF met FFFFF in FFFFF."
        );
    }

    #[test]
    fn test_redaction_over_redacts_sentence_starts() {
        let redactor = NameRedactor::new("FFFFF").unwrap();

        assert_eq!(redactor.redact(EXAMPLE), "FFFFF job today. FFFFF team failed badly. ");
    }

    #[test]
    fn test_redaction_leaves_other_shapes() {
        let redactor = NameRedactor::new("X").unwrap();

        assert_eq!(redactor.redact("NASA I McDonald eBay a"), "NASA I McDonald eBay a");
    }

    #[test]
    fn test_redaction_placeholder_is_literal() {
        let redactor = NameRedactor::new("$1").unwrap();

        assert_eq!(redactor.redact("Hello world"), "$1 world");
    }

    // ============================================================
    // SENTENCE RANKING
    // ============================================================

    #[test]
    fn test_rank_sentences_longest_first() {
        assert_eq!(
            rank_sentences(EXAMPLE),
            vec!["The team failed badly.", "Great job today."]
        );
    }

    #[test]
    fn test_rank_sentences_stable_for_ties() {
        assert_eq!(
            rank_sentences("Bb. Aa. Longest one. Cc."),
            vec!["Longest one.", "Bb.", "Aa.", "Cc."]
        );
    }

    // ============================================================
    // TEXT ANALYZER
    // ============================================================

    #[test]
    fn test_analyzer_produces_full_result() {
        let analyzer = TextAnalyzer::new(3, SentimentLexicon::default()).unwrap();
        let result = analyzer.analyze(&Section::new(5, EXAMPLE));

        assert_eq!(result.section_id, 5);
        assert_eq!(result.word_count, 7);
        assert_eq!(result.top_words.len(), 3);
        assert_eq!(result.sentiment_label, SentimentLabel::Positive);
        assert_eq!(result.redacted_text, "FFFFF job today. FFFFF team failed badly. ");
        assert_eq!(result.ranked_sentences.len(), 2);
    }

    #[test]
    fn test_analyzer_custom_placeholder() {
        let analyzer = TextAnalyzer::new(1, SentimentLexicon::default())
            .unwrap()
            .with_placeholder("[name]")
            .unwrap();

        let result = analyzer.analyze(&Section::new(0, "Hi there. "));
        assert_eq!(result.redacted_text, "[name] there. ");
    }

    #[test]
    fn test_analyzer_rejects_zero_top_k() {
        let result = TextAnalyzer::new(0, SentimentLexicon::default());

        assert!(matches!(result, Err(PipelineError::Config(_))));
    }
}
