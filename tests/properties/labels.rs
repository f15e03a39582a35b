//! Property tests for annotation label parsing.

use proptest::prelude::*;

use mdrip::application::{comment_body, LABEL_MARKER};
use mdrip::parse_labels;

fn label_word() -> impl Strategy<Value = (String, String)> {
    (1usize..=3, "[a-z0-9_-]{1,10}")
        .prop_map(|(markers, name)| ("@".repeat(markers) + &name, name))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: arbitrary comment text never panics and never yields junk labels.
    #[test]
    fn property_parse_labels_never_panics(input in any::<String>()) {
        for label in parse_labels(&input) {
            let s = label.as_str();
            prop_assert!(!s.is_empty());
            prop_assert!(!s.starts_with(LABEL_MARKER));
            prop_assert!(!s.contains(' '));
            prop_assert!(input.contains(s));
        }
    }

    /// PROPERTY: well formed words each produce exactly their name, in order.
    #[test]
    fn property_marked_words_become_labels(
        words in proptest::collection::vec(label_word(), 0..8),
        noise in proptest::collection::vec("[a-z]{1,6}|@{1,4}", 0..4),
    ) {
        let mut tokens: Vec<String> = words.iter().map(|(w, _)| w.clone()).collect();
        tokens.extend(noise);
        let comment = format!("<!-- {} -->", tokens.join(" "));

        let got: Vec<String> = parse_labels(comment_body(&comment))
            .iter()
            .map(|l| l.to_string())
            .collect();
        let want: Vec<String> = words.into_iter().map(|(_, name)| name).collect();
        prop_assert_eq!(got, want);
    }
}
