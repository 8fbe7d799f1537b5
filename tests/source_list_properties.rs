use complyscribe_action::normalize_source_list;
use proptest::prelude::*;

fn separator() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![Just(' '), Just('\n')], 1..4)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn blank_input_normalizes_to_empty(s in "[ \n]*") {
        prop_assert_eq!(normalize_source_list(&s), "");
    }

    #[test]
    fn tokens_are_comma_joined_in_order(
        tokens in prop::collection::vec("[A-Za-z0-9@:/._-]{1,12}", 1..8),
        separators in prop::collection::vec(separator(), 8),
        leading in "[ \n]{0,3}",
        trailing in "[ \n]{0,3}",
    ) {
        let mut raw = leading;
        for (index, token) in tokens.iter().enumerate() {
            if index > 0 {
                raw.push_str(&separators[index - 1]);
            }
            raw.push_str(token);
        }
        raw.push_str(&trailing);

        prop_assert_eq!(normalize_source_list(&raw), tokens.join(","));
    }

    #[test]
    fn normalization_is_idempotent(raw in "[a-z \n]{0,40}") {
        let once = normalize_source_list(&raw);
        prop_assert_eq!(normalize_source_list(&once), once.clone());
    }
}
