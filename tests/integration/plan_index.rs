//! Plan index over a phase directory

use planscan::phase::PhaseId;
use planscan::plan::{build_plan_index, PlanIndexLookup};
use serde_json::json;

use super::helpers::{create_phase_dir, init_planning_tree, plan_doc, write_phase_file};

#[test]
fn test_plan_index_groups_waves() {
    let temp = init_planning_tree();
    let root = temp.path();
    let phase = "06-auth";

    write_phase_file(root, phase, "06-01-PLAN.md", &plan_doc(1, true, "Login form", 2));
    write_phase_file(root, phase, "06-02-PLAN.md", &plan_doc(1, true, "Sessions", 3));
    write_phase_file(root, phase, "06-03-PLAN.md", &plan_doc(2, false, "Review", 1));
    write_phase_file(root, phase, "06-01-SUMMARY.md", "---\nphase: 06\n---\n");

    let PlanIndexLookup::Index(index) = build_plan_index(root, PhaseId::new(6, None)).unwrap()
    else {
        panic!("expected an index");
    };

    assert_eq!(index.phase, "06");
    assert_eq!(index.waves[&1], vec!["06-01", "06-02"]);
    assert_eq!(index.waves[&2], vec!["06-03"]);
    assert_eq!(index.incomplete, vec!["06-02", "06-03"]);
    assert!(index.has_checkpoints);

    let first = &index.plans[0];
    assert_eq!(first.objective, "Login form");
    assert_eq!(first.task_count, 2);
    assert_eq!(first.files_modified, vec!["src/lib.rs"]);
    assert!(first.has_summary);

    let json = serde_json::to_value(&index).unwrap();
    assert_eq!(json["waves"], json!({"1": ["06-01", "06-02"], "2": ["06-03"]}));
}

#[test]
fn test_plan_index_defaults_for_plain_plans() {
    let temp = init_planning_tree();
    write_phase_file(
        temp.path(),
        "07.1-hotfix",
        "07.1-01-PLAN.md",
        "# Plan\n\n<objective>\nPatch the crash\n</objective>\n\n<task>one</task>\n<task>two</task>\n",
    );

    let PlanIndexLookup::Index(index) =
        build_plan_index(temp.path(), "7.1".parse().unwrap()).unwrap()
    else {
        panic!("expected an index");
    };

    let plan = &index.plans[0];
    assert_eq!(plan.wave, 1);
    assert!(plan.autonomous);
    assert_eq!(plan.objective, "Patch the crash");
    assert_eq!(plan.task_count, 2);
    assert!(!index.has_checkpoints);
}

#[test]
fn test_plan_index_empty_phase_and_missing_phase() {
    let temp = init_planning_tree();
    create_phase_dir(temp.path(), "08-empty");

    let json = serde_json::to_value(build_plan_index(temp.path(), PhaseId::new(8, None)).unwrap())
        .unwrap();
    assert_eq!(json["plans"], json!([]));
    assert_eq!(json["waves"], json!({}));
    assert_eq!(json["has_checkpoints"], json!(false));

    let json = serde_json::to_value(build_plan_index(temp.path(), PhaseId::new(9, None)).unwrap())
        .unwrap();
    assert_eq!(json, json!({"error": "Phase not found", "phase": "09"}));
}
