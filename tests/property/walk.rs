use adaptive_cards::enums::FontType;
use adaptive_cards::validate::check_versions;
use adaptive_cards::version::*;
use adaptive_cards::{Card, Container, ElementProps, Finding, TextBlock};
use proptest::prelude::*;

fn arb_version() -> impl Strategy<Value = Version> {
    prop::sample::select(KNOWN_VERSIONS.to_vec())
}

/// A text block wrapped in `depth` containers.
fn nested_block(depth: usize, monospace: bool) -> Card {
    let mut item = TextBlock {
        font_type: monospace.then_some(FontType::Monospace),
        ..TextBlock::new("deep")
    }
    .into();
    for _ in 0..depth {
        item = Container {
            items: vec![item],
            ..Container::default()
        }
        .into();
    }
    Card::builder().add_item(item).build()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn findings_follow_version_threshold(
        version in arb_version(),
        depth in 0usize..12,
        monospace in any::<bool>(),
    ) {
        let mut card = nested_block(depth, monospace);
        card.version = version;
        let mut findings: Vec<Finding> = Vec::new();
        check_versions(&card, &mut findings);

        let expected = usize::from(monospace && version < V1_2);
        prop_assert_eq!(findings.len(), expected);
        if let Some(finding) = findings.first() {
            prop_assert_eq!(
                finding.detail.as_deref(),
                Some("Field version exceeds card version: TextBlock | font_type | 1.2")
            );
        }
    }

    #[test]
    fn one_finding_per_gated_field(version in arb_version(), count in 0usize..30) {
        let blocks: Vec<TextBlock> = (0..count)
            .map(|i| TextBlock {
                common: ElementProps {
                    is_visible: Some(i % 2 == 0),
                    ..ElementProps::default()
                },
                ..TextBlock::new(format!("block {i}"))
            })
            .collect();
        let card = Card::builder().version(version).add_items(blocks).build();
        let mut findings: Vec<Finding> = Vec::new();
        check_versions(&card, &mut findings);
        let expected = if version < V1_2 { count } else { 0 };
        prop_assert_eq!(findings.len(), expected);
    }
}
