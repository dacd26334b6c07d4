//! Differential check of the frontmatter parser against serde_yaml
//!
//! Documents here stay inside the supported subset, where both parsers must
//! produce the same tree.

use planscan::parser::{parse_block, Mapping, Scalar, Value};

fn from_yaml(value: &serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Bool(b) => Value::Scalar(Scalar::Bool(*b)),
        serde_yaml::Value::Number(n) => match n.as_i64() {
            Some(i) => Value::Scalar(Scalar::Integer(i)),
            None => Value::Scalar(Scalar::Float(n.as_f64().unwrap_or_default())),
        },
        serde_yaml::Value::String(s) => Value::string(s.clone()),
        serde_yaml::Value::Sequence(items) => Value::Sequence(items.iter().map(from_yaml).collect()),
        serde_yaml::Value::Mapping(map) => Value::Mapping(
            map.iter()
                .map(|(k, v)| {
                    let key = match k {
                        serde_yaml::Value::String(s) => s.clone(),
                        other => serde_yaml::to_string(other).unwrap().trim().to_string(),
                    };
                    (key, from_yaml(v))
                })
                .collect::<Mapping>(),
        ),
        other => panic!("unsupported yaml value in oracle document: {other:?}"),
    }
}

fn assert_matches_oracle(doc: &str) {
    let ours = parse_block(doc).unwrap_or_else(|e| panic!("parse failed: {e}\n{doc}"));
    let oracle: serde_yaml::Value = serde_yaml::from_str(doc).unwrap();
    assert_eq!(Value::Mapping(ours), from_yaml(&oracle), "document:\n{doc}");
}

#[test]
fn test_summary_shaped_documents() {
    assert_matches_oracle(
        "\
phase: 3
plan: 2
subsystem: auth
tags: [jwt, sessions, \"a, b\"]
dependency-graph:
  requires: [01-setup]
  provides:
    - login endpoint
    - session store
  affects: [api]
tech-stack:
  added:
    - jose
  patterns: []
key-files:
  created:
    - src/auth.rs
  modified: [src/main.rs]
duration: 12.5
completed: 2025-01-02
",
    );
}

#[test]
fn test_plan_shaped_documents() {
    assert_matches_oracle(
        "\
wave: 2
autonomous: false
depends_on: ['06-01']
files-modified:
  - src/a.rs
  - \"src/b c.rs\"
must_haves:
  truths:
    - User can log in
  artifacts: []
",
    );
}

#[test]
fn test_nested_blocks_and_scalars() {
    assert_matches_oracle(
        "\
# leading comment
name: 'single quoted'
count: -4
ratio: 0.25
enabled: true
matrix:
  -
    - a
    - b
  -
    id: 1
    tags: [x]
deep:
  one:
    two:
      three: value # trailing comment
",
    );
}
