//! State snapshot from `.planning/STATE.md`

use planscan::state::{state_snapshot, StateLookup, STATE_NOT_FOUND};
use serde_json::json;

use super::helpers::{init_planning_tree, write_planning_file};

#[test]
fn test_state_missing_file() {
    let temp = init_planning_tree();
    let json = serde_json::to_value(state_snapshot(temp.path()).unwrap()).unwrap();
    assert_eq!(json, json!({"error": STATE_NOT_FOUND}));
}

#[test]
fn test_state_snapshot_json() {
    let temp = init_planning_tree();
    write_planning_file(
        temp.path(),
        "STATE.md",
        "# State\n\n**Current Phase:** 2\n**Progress:** 40%\n\n## Blockers\n\n- None yet\n",
    );

    let lookup = state_snapshot(temp.path()).unwrap();
    assert!(matches!(lookup, StateLookup::Snapshot(_)));

    let json = serde_json::to_value(lookup).unwrap();
    assert_eq!(json["current_phase"], json!(2));
    assert_eq!(json["progress_percent"], json!(40));
    assert_eq!(json["blockers"], json!(["None yet"]));
    assert_eq!(json["decisions"], json!([]));
    assert!(json["paused_at"].is_null());
}
