//! Property-based tests for the directive parser.

use proptest::prelude::*;
use zenquery::{CropKey, ParseError, ParseOptions, Parser, Rule, Span, parse};

/// Text made only of characters an unrecognized field may contain.
fn field_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_*{}(),:;%#=/.+-]{1,16}"
}

/// Strings near the grammar: keys, separators, brackets and delimiters.
fn near_miss() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("?".to_string()),
            Just("&".to_string()),
            Just("w".to_string()),
            Just("width".to_string()),
            Just("crop".to_string()),
            Just("fit".to_string()),
            Just("max".to_string()),
            Just("true".to_string()),
            "[=.,(){}\\[\\]-]",
            "[a-z0-9]{1,3}",
        ],
        0..12,
    )
    .prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn arbitrary_input_never_panics(input in "\\PC{0,64}") {
        let _ = Parser::new().parse(&input).map(|p| p.to_params());
    }

    #[test]
    fn parsing_is_deterministic(input in near_miss()) {
        let parser = Parser::new();
        let first = parser.parse(&input);
        let second = parser.parse(&input);
        prop_assert_eq!(&first, &second);
        if let (Ok(a), Ok(b)) = (first, second) {
            prop_assert_eq!(a.to_params(), b.to_params());
        }
    }

    #[test]
    fn success_spans_whole_input(input in near_miss()) {
        if let Ok(parsed) = Parser::new().parse(&input) {
            let len = input.chars().count();
            prop_assert_eq!(parsed.spans().last(), Some(&Span::new(Rule::Expression, 0, len)));
            let forest = parsed.tree();
            prop_assert_eq!(forest.len(), 1);
        }
    }

    #[test]
    fn field_character_runs_always_parse(fields in prop::collection::vec(field_text(), 1..6)) {
        let query = format!("?{}", fields.join("&"));
        let result = parse(&query);
        prop_assert!(result.is_ok(), "{:?} rejected: {:?}", query, result);
    }

    #[test]
    fn later_value_wins(a in "[0-9]{1,5}", b in "[0-9]{1,5}", key in prop_oneof![Just("w"), Just("width")]) {
        let params = parse(&format!("?{key}={a}&width={b}")).unwrap();
        prop_assert_eq!(params.text("width"), Some(b.as_str()));
    }

    #[test]
    fn crop_holds_exactly_the_named_components(
        picks in prop::collection::vec((0usize..4, "[0-9]{1,4}"), 1..6)
    ) {
        const KEYS: [(CropKey, &str); 4] = [
            (CropKey::Width, "w"),
            (CropKey::Height, "h"),
            (CropKey::X, "x"),
            (CropKey::Y, "y"),
        ];
        let body: Vec<String> = picks
            .iter()
            .map(|(i, value)| format!("{}{}", KEYS[*i].1, value))
            .collect();
        let params = parse(&format!("?crop({})", body.join(","))).unwrap();
        let crop = params.crop().expect("crop entry");

        for (i, (key, _)) in KEYS.iter().enumerate() {
            let last = picks.iter().rev().find(|(j, _)| *j == i).map(|(_, v)| v.as_str());
            prop_assert_eq!(crop.get(*key), last);
        }
    }

    #[test]
    fn fit_accepts_exactly_its_literals(word in "[a-z]{1,8}") {
        let params = parse(&format!("?fit={word}")).unwrap();
        let accepted = matches!(word.as_str(), "clip" | "scale" | "max" | "crop");
        prop_assert_eq!(params.contains_key("fit"), accepted);
    }

    #[test]
    fn step_budget_never_changes_a_success(input in near_miss(), budget in 1usize..400) {
        let bounded = Parser::with_options(ParseOptions::new().step_budget(budget)).parse(&input);
        let unbounded = Parser::new().parse(&input);
        match bounded {
            Ok(parsed) => prop_assert_eq!(Ok(parsed), unbounded),
            Err(ParseError::StepBudgetExhausted { budget: b }) => prop_assert_eq!(b, budget),
            Err(err) => prop_assert_eq!(Err(err), unbounded),
        }
    }
}
