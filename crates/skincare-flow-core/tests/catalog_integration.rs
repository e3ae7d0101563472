//! Integration tests for the step catalog.
//!
//! Checks the ordering and exclusivity properties over every option
//! combination.

use std::collections::HashSet;

use proptest::prelude::*;
use skincare_flow_core::{build_evening_steps, build_morning_steps, Step};

fn ids(steps: &[Step]) -> Vec<&str> {
    steps.iter().map(|s| s.id.as_str()).collect()
}

/// The morning order written out by hand.
fn expected_morning(going_out: bool, saturday: bool) -> Vec<&'static str> {
    let mut expected = vec!["shower"];
    if saturday {
        expected.extend(["hair-wash", "hair-dry", "hair-product", "hair-diffuse", "hair-pony"]);
    }
    if going_out {
        expected.extend(["shave", "aftershave"]);
    }
    expected.extend(["cleanser", "eye", "serum", "cream"]);
    if going_out {
        expected.push("spf");
    }
    expected.extend(["wait-minox", "minoxidil"]);
    expected
}

proptest! {
    #[test]
    fn morning_matches_documented_order(going_out: bool, saturday: bool) {
        let steps = build_morning_steps(going_out, saturday);
        prop_assert!(steps.len() >= 7);
        prop_assert_eq!(ids(&steps), expected_morning(going_out, saturday));

        let unique: HashSet<_> = steps.iter().map(|s| &s.id).collect();
        prop_assert_eq!(unique.len(), steps.len());
    }

    #[test]
    fn morning_is_deterministic(going_out: bool, saturday: bool) {
        prop_assert_eq!(
            build_morning_steps(going_out, saturday),
            build_morning_steps(going_out, saturday)
        );
    }

    #[test]
    fn evening_never_has_bha_and_serum(
        used_spf_today: bool,
        do_bha_tonight: bool,
        minoxidil_twice: bool,
    ) {
        let steps = build_evening_steps(used_spf_today, do_bha_tonight, minoxidil_twice);
        let ids = ids(&steps);

        prop_assert!(!(ids.contains(&"bha") && ids.contains(&"serum-pm")));
        prop_assert_eq!(ids.contains(&"bha"), do_bha_tonight);
        prop_assert_eq!(ids.contains(&"serum-pm"), !do_bha_tonight);
        prop_assert_eq!(ids.contains(&"minoxidil-pm"), minoxidil_twice);

        let cleanses: Vec<_> = steps.iter().filter(|s| s.id == "cleanse-pm").collect();
        prop_assert_eq!(cleanses.len(), 1);
        prop_assert_eq!(ids[0], "cleanse-pm");
        let expected_title = if used_spf_today { "Double Cleansing" } else { "Reinigung" };
        prop_assert_eq!(cleanses[0].title.as_str(), expected_title);

        let unique: HashSet<_> = ids.iter().collect();
        prop_assert_eq!(unique.len(), steps.len());
        prop_assert!(steps.iter().all(|s| !s.id.is_empty() && !s.title.is_empty()));
    }
}

#[test]
fn morning_going_out_has_ten_steps() {
    let steps = build_morning_steps(true, false);
    assert_eq!(steps.len(), 10);
    assert_eq!(steps[1].id, "shave");
    assert_eq!(steps[2].wait_seconds, Some(300));
    assert_eq!(steps[7].id, "spf");
    assert_eq!(steps[7].wait_seconds, None);
}

#[test]
fn evening_after_spf_without_extras() {
    let steps = build_evening_steps(true, false, false);
    assert_eq!(ids(&steps), ["cleanse-pm", "eye-pm", "serum-pm", "cream-pm"]);
}

#[test]
fn evening_bha_with_second_minoxidil() {
    let steps = build_evening_steps(false, true, true);
    assert_eq!(
        ids(&steps),
        ["cleanse-pm", "bha", "eye-pm", "cream-pm", "wait-minox-pm", "minoxidil-pm"]
    );
    assert_eq!(steps[1].wait_seconds, Some(1200));
    assert_eq!(steps[4].wait_seconds, Some(600));
}

#[test]
fn steps_serialize_to_camel_case_json() {
    let steps = build_morning_steps(true, false);
    let json = serde_json::to_value(&steps).unwrap();
    assert_eq!(json[2]["id"], "aftershave");
    assert_eq!(json[2]["waitSeconds"], 300);
    assert_eq!(json[2]["waitLabel"], "Einziehen lassen (5 Min)");
    assert_eq!(json[1]["where"], "Seiten (Goatee/Schnurrbart stehen lassen)");
}
