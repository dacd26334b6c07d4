//! Phase directory lookup and decimal allocation

use planscan::fs::load_config;
use planscan::phase::{
    find_phase, list_phase_dirs, list_phases, next_decimal_phase, PhaseFileKind, PhaseId,
};
use serde_json::json;
use tempfile::TempDir;

use super::helpers::{create_phase_dir, init_planning_tree, write_phase_file, write_planning_file};

#[test]
fn test_next_decimal_for_missing_base() {
    let temp = init_planning_tree();
    create_phase_dir(temp.path(), "01-setup");

    let next = next_decimal_phase(temp.path(), "06".parse().unwrap()).unwrap();
    assert_eq!(
        serde_json::to_value(&next).unwrap(),
        json!({"base_phase": "06", "next": "06.1", "existing": [], "found": false})
    );
}

#[test]
fn test_next_decimal_skips_past_highest() {
    let temp = init_planning_tree();
    for name in ["06-core", "06.1-fix", "06.3-other", "07-next"] {
        create_phase_dir(temp.path(), name);
    }

    let next = next_decimal_phase(temp.path(), PhaseId::new(6, None)).unwrap();
    assert_eq!(next.next, PhaseId::new(6, Some(4)));
    assert!(next.base_exists);
    assert_eq!(next.existing, vec![PhaseId::new(6, Some(1)), PhaseId::new(6, Some(3))]);
}

#[test]
fn test_find_phase_lists_documents() {
    let temp = init_planning_tree();
    write_phase_file(temp.path(), "03-api", "03-01-PLAN.md", "# plan");
    write_phase_file(temp.path(), "03-api", "03-01-SUMMARY.md", "# summary");
    write_phase_file(temp.path(), "03-api", "notes.md", "# notes");

    let json = serde_json::to_value(find_phase(temp.path(), PhaseId::new(3, None)).unwrap()).unwrap();
    assert_eq!(json["found"], json!(true));
    assert_eq!(json["directory"], json!(".planning/phases/03-api"));
    assert_eq!(json["phase_number"], json!("03"));
    assert_eq!(json["phase_name"], json!("api"));
    assert_eq!(json["plans"], json!(["03-01-PLAN.md"]));
    assert_eq!(json["summaries"], json!(["03-01-SUMMARY.md"]));

    let json = serde_json::to_value(find_phase(temp.path(), PhaseId::new(4, None)).unwrap()).unwrap();
    assert_eq!(json, json!({"found": false}));
}

#[test]
fn test_missing_phases_dir_is_empty() {
    let temp = TempDir::new().unwrap();
    assert!(list_phase_dirs(temp.path()).unwrap().is_empty());
}

#[test]
fn test_config_file_overrides_defaults() {
    let temp = init_planning_tree();
    write_planning_file(
        temp.path(),
        "config.json",
        r#"{"mode": "yolo", "workflow": {"research": false}}"#,
    );

    let loaded = load_config(temp.path()).unwrap();
    assert!(loaded.from_file);
    assert_eq!(loaded.get("mode").unwrap(), Some(json!("yolo")));
    assert_eq!(loaded.get("workflow.research").unwrap(), Some(json!(false)));
    assert_eq!(loaded.get("workflow.missing").unwrap(), None);
}

#[test]
fn test_phases_filtered_by_type_and_phase() {
    let temp = init_planning_tree();
    write_phase_file(temp.path(), "01-foundation", "01-01-PLAN.md", "# plan");
    write_phase_file(temp.path(), "01-foundation", "01-02-PLAN.md", "# plan");
    write_phase_file(temp.path(), "01-foundation", "01-01-SUMMARY.md", "# summary");
    write_phase_file(temp.path(), "02-api", "02-01-PLAN.md", "# plan");

    let json = serde_json::to_value(
        list_phases(temp.path(), Some(PhaseFileKind::Plans), Some(PhaseId::new(1, None))).unwrap(),
    )
    .unwrap();
    assert_eq!(
        json,
        json!({"files": ["01-01-PLAN.md", "01-02-PLAN.md"], "count": 2, "phase_dir": "foundation"})
    );

    let json = serde_json::to_value(
        list_phases(temp.path(), Some(PhaseFileKind::Summaries), None).unwrap(),
    )
    .unwrap();
    assert_eq!(json, json!({"files": ["01-01-SUMMARY.md"], "count": 1, "phase_dir": null}));

    let json =
        serde_json::to_value(list_phases(temp.path(), None, Some(PhaseId::new(2, None))).unwrap())
            .unwrap();
    assert_eq!(json, json!({"directories": ["02-api"], "count": 1}));
}

#[test]
fn test_phases_filter_for_unknown_phase() {
    let temp = init_planning_tree();
    create_phase_dir(temp.path(), "01-foundation");

    let json = serde_json::to_value(
        list_phases(temp.path(), Some(PhaseFileKind::Plans), Some(PhaseId::new(7, None))).unwrap(),
    )
    .unwrap();
    assert_eq!(
        json,
        json!({"files": [], "count": 0, "phase_dir": null, "error": "Phase not found"})
    );
}
