use adaptive_cards::Version;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn display_parses_back(major in 0u16..100, minor in 0u16..1000) {
        let version = Version::new(major, minor);
        let parsed: Version = version.to_string().parse().unwrap();
        prop_assert_eq!(parsed, version);
    }

    #[test]
    fn ordering_is_numeric(a in (0u16..20, 0u16..50), b in (0u16..20, 0u16..50)) {
        let va = Version::new(a.0, a.1);
        let vb = Version::new(b.0, b.1);
        prop_assert_eq!(va.cmp(&vb), a.cmp(&b));
    }

    #[test]
    fn garbage_is_rejected(input in "[a-z ]{0,8}") {
        prop_assert!(input.parse::<Version>().is_err(), "{:?} parsed", input);
    }

    #[test]
    fn three_components_are_rejected(a in 0u16..10, b in 0u16..10, c in 0u16..10) {
        let input = format!("{a}.{b}.{c}");
        prop_assert!(input.parse::<Version>().is_err());
    }
}
