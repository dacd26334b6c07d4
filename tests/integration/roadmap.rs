//! Roadmap lookups against `.planning/ROADMAP.md`

use planscan::roadmap::{get_roadmap_phase, RoadmapLookup, ROADMAP_NOT_FOUND};
use serde_json::json;

use super::helpers::{init_planning_tree, write_planning_file};

const ROADMAP: &str = "\
# Roadmap

### Phase 1: Foundation
**Goal:** Build the base

Plans:
- [ ] 01-01: skeleton

### Phase 2.1: Urgent fix
**Goal:** Patch auth

### Phase 3: Later
";

#[test]
fn test_missing_roadmap_differs_from_missing_phase() {
    let temp = init_planning_tree();

    let json = serde_json::to_value(get_roadmap_phase(temp.path(), "1").unwrap()).unwrap();
    assert_eq!(json, json!({"found": false, "error": ROADMAP_NOT_FOUND}));

    write_planning_file(temp.path(), "ROADMAP.md", ROADMAP);
    let json = serde_json::to_value(get_roadmap_phase(temp.path(), "7").unwrap()).unwrap();
    assert_eq!(json, json!({"found": false}));
}

#[test]
fn test_roadmap_section_lookup() {
    let temp = init_planning_tree();
    write_planning_file(temp.path(), "ROADMAP.md", ROADMAP);

    let RoadmapLookup::Found(section) = get_roadmap_phase(temp.path(), "01").unwrap() else {
        panic!("phase 1 should be found");
    };
    assert_eq!(section.phase_number, "1");
    assert_eq!(section.phase_name, "Foundation");
    assert_eq!(section.goal.as_deref(), Some("Build the base"));
    assert!(section.section.contains("01-01: skeleton"));
    assert!(!section.section.contains("Urgent fix"));

    let RoadmapLookup::Found(decimal) = get_roadmap_phase(temp.path(), "02.1").unwrap() else {
        panic!("phase 2.1 should be found");
    };
    assert_eq!(decimal.goal.as_deref(), Some("Patch auth"));
    assert!(matches!(
        get_roadmap_phase(temp.path(), "2").unwrap(),
        RoadmapLookup::Missing { error: None }
    ));

    let RoadmapLookup::Found(last) = get_roadmap_phase(temp.path(), "3").unwrap() else {
        panic!("phase 3 should be found");
    };
    assert_eq!(last.goal, None);
    assert_eq!(last.section, "");
}
