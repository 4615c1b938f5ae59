//! Property-based tests for the multi-value machine.

use super::*;
use proptest::prelude::*;

const VALUES: [&str; 5] = ["a", "b", "c", "d", "e"];

fn model() -> CandidateModel {
    CandidateModel::builder()
        .row([("Alpha", "a"), ("Bravo", "b")])
        .row([("Charlie", "c"), ("Delta", "d"), ("Echo", "e")])
        .build()
        .unwrap()
}

fn captions() -> CommandCaptions {
    CommandCaptions::new("OK", "Clear", "All", "Back")
}

fn arb_value() -> impl Strategy<Value = String> {
    prop::sample::select(VALUES.to_vec()).prop_map(str::to_string)
}

fn arb_values() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_value(), 0..8)
}

/// Any text a user could send during an active selection.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_value(),
        Just("Clear".to_string()),
        Just("All".to_string()),
        "[a-z ]{0,8}",
    ]
}

fn active(preselected: Vec<String>) -> MultiSelection {
    MultiSelection::resume(SelectedValues::seeded(preselected, &model()).0)
}

proptest! {
    #[test]
    fn toggling_twice_restores_values(pre in arb_values(), value in arb_value()) {
        let mut selection = active(pre);
        let before = selection.values().clone();

        selection.apply(&value, &model(), &captions(), false).unwrap();
        selection.apply(&value, &model(), &captions(), false).unwrap();

        let mut expected: Vec<_> = before.as_slice().to_vec();
        expected.sort();
        let mut after: Vec<_> = selection.values().as_slice().to_vec();
        after.sort();
        prop_assert_eq!(after, expected);
    }

    #[test]
    fn select_all_always_yields_every_candidate(pre in arb_values()) {
        let mut selection = active(pre);
        selection.apply("All", &model(), &captions(), false).unwrap();
        let expected: Vec<String> = VALUES.iter().map(|v| v.to_string()).collect();
        prop_assert_eq!(selection.values().as_slice(), expected.as_slice());
    }

    #[test]
    fn clear_always_empties(pre in arb_values()) {
        let mut selection = active(pre);
        selection.apply("Clear", &model(), &captions(), false).unwrap();
        prop_assert!(selection.values().is_empty());
    }

    #[test]
    fn unknown_input_never_mutates(pre in arb_values(), text in "[A-Z]{3,6}|[0-9]{1,3}") {
        let mut selection = active(pre);
        let before = selection.values().clone();
        let decision = selection.apply(&text, &model(), &captions(), false).unwrap();
        prop_assert_eq!(
            decision,
            TurnDecision::Rerender { rejection: Some(TurnRejection::InvalidInput), changed: false }
        );
        prop_assert_eq!(selection.values(), &before);
    }

    #[test]
    fn values_stay_a_duplicate_free_subset(texts in prop::collection::vec(arb_text(), 0..20)) {
        let mut selection = active(vec![]);
        for text in &texts {
            selection.apply(text, &model(), &captions(), false).unwrap();
        }
        let values = selection.values().as_slice();
        for value in values {
            prop_assert!(model().contains(value));
        }
        let mut deduped = values.to_vec();
        deduped.sort();
        deduped.dedup();
        prop_assert_eq!(deduped.len(), values.len());
    }

    #[test]
    fn confirm_on_empty_never_completes(texts in prop::collection::vec(arb_text(), 0..10)) {
        let mut selection = active(vec![]);
        for text in &texts {
            selection.apply(text, &model(), &captions(), false).unwrap();
        }
        selection.apply("Clear", &model(), &captions(), false).unwrap();
        let decision = selection.apply("OK", &model(), &captions(), false).unwrap();
        prop_assert_eq!(
            decision,
            TurnDecision::Rerender { rejection: Some(TurnRejection::EmptySelection), changed: false }
        );
    }
}
