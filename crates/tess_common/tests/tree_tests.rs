//! Golden tests for the troubleshooting decision tree.

use tess_common::error::TreeError;
use tess_common::tree;

#[test]
fn start_is_idempotent() {
    let first = tree::start();
    let second = tree::start();
    assert_eq!(first.id, "start");
    assert_eq!(first.id, second.id);
    assert_eq!(first.question, second.question);
    assert_eq!(first.options, second.options);
}

#[test]
fn advance_follows_the_chosen_option() {
    let step = tree::advance("start", "Slow Internet").unwrap();
    assert_eq!(step.id, "slow_internet");
    assert!(!step.options.is_empty());
}

#[test]
fn invalid_option_is_rejected() {
    let err = tree::advance("start", "bogus").unwrap_err();
    assert_eq!(
        err,
        TreeError::InvalidOption {
            step: "start".to_string(),
            option: "bogus".to_string(),
        }
    );
}

#[test]
fn unknown_step_is_rejected() {
    let err = tree::advance("not_a_step", "x").unwrap_err();
    assert_eq!(err, TreeError::UnknownStep("not_a_step".to_string()));
}

#[test]
fn resolved_loops_back_to_start() {
    let step = tree::advance("resolved", "Start over").unwrap();
    assert_eq!(step.id, "start");
}

#[test]
fn every_transition_target_exists() {
    for step in tree::all() {
        for (option, target) in step.next {
            assert!(
                tree::find(target).is_some(),
                "step '{}' option '{}' points at missing step '{}'",
                step.id,
                option,
                target
            );
        }
    }
}

#[test]
fn every_step_has_an_exit() {
    // The graph has no sink: even terminal-looking steps loop somewhere.
    for step in tree::all() {
        assert!(!step.next.is_empty(), "step '{}' is a dead end", step.id);
    }
}

#[test]
fn solution_steps_carry_instructions() {
    let step = tree::advance("no_internet", "No").unwrap();
    assert_eq!(step.id, "power_cycle");
    assert!(step.solution.unwrap().contains("Unplug your router"));
}

#[test]
fn walk_to_resolution() {
    // A realistic full session: no internet -> cables -> fixed.
    let mut step = tree::start();
    for choice in ["No Internet Connection", "Yes", "All cables are connected", "Yes"] {
        step = tree::advance(step.id, choice).unwrap();
    }
    assert_eq!(step.id, "resolved");
    assert_eq!(step.options, ["Start over"]);
}
