use adaptive_cards::{Card, Finding, TextBlock, ValidationFailure, card_size, to_json};
use adaptive_cards::platform::Platform;
use adaptive_cards::validate::check_size;
use proptest::prelude::*;

fn card_with(texts: &[String]) -> Card {
    Card::builder()
        .add_items(texts.iter().map(|t| TextBlock::new(t.as_str())))
        .build()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn size_is_compact_json_bytes(texts in prop::collection::vec("\\PC{0,40}", 0..20)) {
        let card = card_with(&texts);
        let json = to_json(&card).unwrap();
        prop_assert_eq!(card_size(&card).unwrap(), json.len() as f64 / 1024.0);
    }

    #[test]
    fn adding_items_never_shrinks_the_card(
        texts in prop::collection::vec("[a-zA-Z0-9 ]{0,40}", 0..20),
        extra in "[a-zA-Z0-9 ]{0,40}",
    ) {
        let before = card_size(&card_with(&texts)).unwrap();
        let mut more = texts.clone();
        more.push(extra);
        prop_assert!(card_size(&card_with(&more)).unwrap() > before);
    }

    #[test]
    fn size_finding_iff_over_limit(size_kb in 0.0f64..80.0) {
        for platform in Platform::ALL {
            let profile = platform.profile();
            let mut findings: Vec<Finding> = Vec::new();
            check_size(size_kb, &profile, &mut findings);
            if size_kb > profile.max_size_kb {
                prop_assert_eq!(findings.len(), 1);
                prop_assert_eq!(findings[0].failure, ValidationFailure::SizeLimitExceeded);
            } else {
                prop_assert!(findings.is_empty());
            }
        }
    }
}
