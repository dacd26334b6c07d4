//! Workflow bootstrap context with inlined documents

use planscan::init::{
    execute_phase_context, plan_phase_context, progress_context, IncludeFile,
};
use planscan::phase::PhaseId;
use serde_json::{json, Value};

use super::helpers::{init_planning_tree, plan_doc, write_phase_file, write_planning_file};

fn content_keys(json: &Value) -> Vec<&str> {
    json.as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .filter(|key| key.ends_with("_content"))
        .collect()
}

#[test]
fn test_execute_phase_includes_requested_documents() {
    let temp = init_planning_tree();
    write_planning_file(temp.path(), "STATE.md", "# State\n\n**Status:** Executing\n");
    write_planning_file(temp.path(), "config.json", r#"{"commit_docs": false}"#);
    write_planning_file(temp.path(), "ROADMAP.md", "# Roadmap\n");
    write_phase_file(temp.path(), "03-api", "03-01-PLAN.md", &plan_doc(1, true, "Routes", 1));

    let context = execute_phase_context(
        temp.path(),
        PhaseId::new(3, None),
        &[IncludeFile::State, IncludeFile::Config],
    )
    .unwrap();
    let json = serde_json::to_value(&context).unwrap();

    assert_eq!(json["state_content"], json!("# State\n\n**Status:** Executing\n"));
    assert_eq!(json["config_content"], json!(r#"{"commit_docs": false}"#));
    assert_eq!(content_keys(&json), vec!["config_content", "state_content"]);
    assert_eq!(json["commit_docs"], json!(false));
    assert_eq!(json["config_exists"], json!(true));
}

#[test]
fn test_missing_included_document_is_null() {
    let temp = init_planning_tree();
    write_phase_file(temp.path(), "01-setup", "01-01-PLAN.md", &plan_doc(1, true, "Init", 1));

    let json = serde_json::to_value(
        execute_phase_context(
            temp.path(),
            PhaseId::new(1, None),
            &[IncludeFile::Requirements, IncludeFile::Roadmap],
        )
        .unwrap(),
    )
    .unwrap();

    assert!(json["requirements_content"].is_null());
    assert!(json["roadmap_content"].is_null());
    assert_eq!(content_keys(&json).len(), 2);
    assert_eq!(json["roadmap_exists"], json!(false));
}

#[test]
fn test_no_include_means_no_content_fields() {
    let temp = init_planning_tree();
    write_planning_file(temp.path(), "STATE.md", "# State\n");

    let json =
        serde_json::to_value(progress_context(temp.path(), &[]).unwrap()).unwrap();
    assert!(content_keys(&json).is_empty());
    assert_eq!(json["state_exists"], json!(true));
}

#[test]
fn test_execute_phase_reports_incomplete_plans() {
    let temp = init_planning_tree();
    let phase = "05-sync";
    write_phase_file(temp.path(), phase, "05-01-PLAN.md", &plan_doc(1, true, "A", 1));
    write_phase_file(temp.path(), phase, "05-02-PLAN.md", &plan_doc(2, true, "B", 1));
    write_phase_file(temp.path(), phase, "05-01-SUMMARY.md", "---\nphase: 05\n---\n");

    let json = serde_json::to_value(
        execute_phase_context(temp.path(), PhaseId::new(5, None), &[]).unwrap(),
    )
    .unwrap();
    assert_eq!(json["phase_found"], json!(true));
    assert_eq!(json["phase_dir"], json!(".planning/phases/05-sync"));
    assert_eq!(json["phase_number"], json!("05"));
    assert_eq!(json["phase_name"], json!("sync"));
    assert_eq!(json["plans"], json!(["05-01", "05-02"]));
    assert_eq!(json["incomplete_plans"], json!(["05-02"]));
    assert_eq!(json["plan_count"], json!(2));
    assert_eq!(json["incomplete_count"], json!(1));
}

#[test]
fn test_plan_phase_includes_phase_documents() {
    let temp = init_planning_tree();
    write_phase_file(temp.path(), "02-core", "02-CONTEXT.md", "# Context\nDecisions here\n");
    write_phase_file(temp.path(), "02-core", "02-RESEARCH.md", "# Research\n");

    let json = serde_json::to_value(
        plan_phase_context(
            temp.path(),
            PhaseId::new(2, None),
            &[IncludeFile::Context, IncludeFile::Research, IncludeFile::Uat],
        )
        .unwrap(),
    )
    .unwrap();

    assert_eq!(json["context_content"], json!("# Context\nDecisions here\n"));
    assert_eq!(json["research_content"], json!("# Research\n"));
    assert!(json["uat_content"].is_null());
    assert_eq!(json["has_context"], json!(true));
    assert_eq!(json["has_research"], json!(true));
    assert_eq!(json["has_plans"], json!(false));
    assert_eq!(json["planning_exists"], json!(true));
}

#[test]
fn test_plan_phase_for_unknown_phase() {
    let temp = init_planning_tree();
    write_planning_file(temp.path(), "STATE.md", "# State\n");

    let json = serde_json::to_value(
        plan_phase_context(
            temp.path(),
            PhaseId::new(9, None),
            &[IncludeFile::Context, IncludeFile::State],
        )
        .unwrap(),
    )
    .unwrap();

    assert_eq!(json["phase_found"], json!(false));
    assert!(json["phase_dir"].is_null());
    assert!(json["context_content"].is_null());
    assert_eq!(json["state_content"], json!("# State\n"));
}

#[test]
fn test_progress_statuses_and_includes() {
    let temp = init_planning_tree();
    let root = temp.path();
    write_phase_file(root, "01-setup", "01-01-PLAN.md", &plan_doc(1, true, "A", 1));
    write_phase_file(root, "01-setup", "01-01-SUMMARY.md", "---\nphase: 01\n---\n");
    write_phase_file(root, "02-core", "02-01-PLAN.md", &plan_doc(1, true, "B", 1));
    write_phase_file(root, "02-core", "02-02-PLAN.md", &plan_doc(1, true, "C", 1));
    write_phase_file(root, "02-core", "02-01-SUMMARY.md", "---\nphase: 02\n---\n");
    write_phase_file(root, "03-polish", "notes.md", "");
    write_planning_file(root, "PROJECT.md", "# Project\n");
    write_planning_file(root, "STATE.md", "**Paused At:** Task 1 of 02-02\n");

    let json = serde_json::to_value(
        progress_context(root, &[IncludeFile::Project, IncludeFile::Roadmap]).unwrap(),
    )
    .unwrap();

    let statuses: Vec<&str> = json["phases"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, vec!["complete", "in_progress", "pending"]);
    assert_eq!(json["completed_count"], json!(1));
    assert_eq!(json["in_progress_count"], json!(1));
    assert_eq!(json["current_phase"], json!("02"));
    assert_eq!(json["next_phase"], json!("03"));
    assert_eq!(json["paused_at"], json!("Task 1 of 02-02"));
    assert_eq!(json["has_work_in_progress"], json!(true));
    assert_eq!(json["project_content"], json!("# Project\n"));
    assert!(json["roadmap_content"].is_null());
}
