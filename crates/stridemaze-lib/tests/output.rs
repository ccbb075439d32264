mod common;

use stridemaze_lib::{render_json, render_text, solve, GoalTieBreak, Outcome, RouteSummary};

use common::fixture_text;

fn solve_fixture(name: &str) -> Outcome {
    solve(&fixture_text(name), GoalTieBreak::default())
}

#[test]
fn corridor_renders_the_solver_format() {
    let rendered = render_text(&solve_fixture("corridor.txt"));
    assert_eq!(rendered, "4 5\n1 1\n1 2\n1 3\n1 4\n1 5\n");
}

#[test]
fn single_cell_renders_zero_cost() {
    assert_eq!(render_text(&solve_fixture("single_cell.txt")), "0 1\n1 1\n");
}

#[test]
fn failures_render_no_path() {
    for name in [
        "missing_start.txt",
        "malformed_header.txt",
        "decrement_start.txt",
        "goal_outside.txt",
    ] {
        assert_eq!(render_text(&solve_fixture(name)), "NO PATH\n", "{name}");
    }
}

#[test]
fn summary_mirrors_the_plan() {
    let outcome = solve_fixture("stride_jump.txt");
    let plan = outcome.plan().expect("route exists");
    let summary = RouteSummary::from_plan(plan);

    assert_eq!(summary.cost, 6);
    assert_eq!(summary.length, 5);
    assert_eq!(summary.goal_stride, 1);
    assert_eq!(summary.path, plan.cells());
    assert_eq!(summary.stats, plan.stats);
}

#[test]
fn json_document_carries_the_path() {
    let json = render_json(&solve_fixture("dead_end_goal.txt")).expect("serialises");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["status"], "found");
    assert_eq!(value["cost"], 2);
    assert_eq!(value["path"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["path"][0]["row"], 1);
}
