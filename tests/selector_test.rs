//! Due-soon selection scenarios and window properties.
//!
//! Validates:
//! 1. The lower bound is open and the upper bound is closed
//! 2. A zero horizon never selects anything
//! 3. Tasks without a reminder are never selected
//! 4. Output is an order-preserving subsequence of the input

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use task_reminders::core::{due_soon_at, DueSoonSelector, Task};
use task_reminders::util::ManualClock;

// ============================================================================
// HELPERS
// ============================================================================

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 26, 12, 0, 0).unwrap()
}

fn make_task(title: &str, offset_minutes: Option<i64>) -> Task {
    let mut task = Task::new(title, NaiveDate::from_ymd_opt(2025, 10, 27).unwrap());
    task.reminder_at = offset_minutes.map(|m| now() + TimeDelta::minutes(m));
    task
}

fn minutes(m: u64) -> Duration {
    Duration::from_secs(m * 60)
}

fn selector() -> DueSoonSelector {
    DueSoonSelector::new(Arc::new(ManualClock::new(now())))
}

fn titles(tasks: &[Task]) -> Vec<String> {
    tasks.iter().map(|t| t.title.clone()).collect()
}

// ============================================================================
// SCENARIOS
// ============================================================================

#[test]
fn test_reminder_three_minutes_out_is_due() {
    let result = selector().due_soon(vec![make_task("a", Some(3))], minutes(5));
    assert_eq!(titles(&result), ["a"]);
}

#[test]
fn test_reminder_at_horizon_is_due() {
    let result = selector().due_soon(vec![make_task("a", Some(5))], minutes(5));
    assert_eq!(titles(&result), ["a"]);
}

#[test]
fn test_reminder_at_now_is_not_due() {
    let result = selector().due_soon(vec![make_task("a", Some(0))], minutes(5));
    assert!(result.is_empty());
}

#[test]
fn test_past_reminder_is_not_due() {
    let result = selector().due_soon(vec![make_task("a", Some(-5))], minutes(5));
    assert!(result.is_empty());
}

#[test]
fn test_mixed_offsets() {
    let tasks = vec![
        make_task("minus one", Some(-1)),
        make_task("plus one", Some(1)),
        make_task("plus three", Some(3)),
        make_task("plus ten", Some(10)),
        make_task("none", None),
    ];
    let result = selector().due_soon(tasks, minutes(5));
    assert_eq!(titles(&result), ["plus one", "plus three"]);
}

#[test]
fn test_hours_out_with_half_hour_horizon() {
    let tasks = vec![make_task("an hour", Some(60)), make_task("two hours", Some(120))];
    assert!(selector().due_soon(tasks, minutes(30)).is_empty());
}

// ============================================================================
// PROPERTIES
// ============================================================================

#[test]
fn test_now_excluded_for_any_horizon() {
    for horizon in [0, 1, 5, 60, 24 * 60] {
        let result = due_soon_at(vec![make_task("now", Some(0))], minutes(horizon), now());
        assert!(result.is_empty(), "horizon {horizon}m");
    }
}

#[test]
fn test_exact_deadline_included_for_any_positive_horizon() {
    for horizon in [1_u64, 5, 60, 24 * 60] {
        let offset = i64::try_from(horizon).unwrap();
        let result = due_soon_at(vec![make_task("edge", Some(offset))], minutes(horizon), now());
        assert_eq!(titles(&result), ["edge"], "horizon {horizon}m");
    }
}

#[test]
fn test_zero_horizon_empty_for_random_input() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let tasks: Vec<Task> = (0..200)
        .map(|i| make_task(&format!("t{i}"), Some(rng.random_range(-10..=10))))
        .collect();
    assert!(due_soon_at(tasks, Duration::ZERO, now()).is_empty());
}

#[test]
fn test_random_input_yields_ordered_subsequence() {
    let mut rng = StdRng::seed_from_u64(42);
    let tasks: Vec<Task> = (0..500)
        .map(|i| {
            let offset = rng.random_bool(0.8).then(|| rng.random_range(-30..=30));
            make_task(&format!("t{i}"), offset)
        })
        .collect();
    let horizon = minutes(10);
    let result = due_soon_at(tasks.clone(), horizon, now());

    let deadline = now() + TimeDelta::minutes(10);
    let expected: Vec<Task> = tasks
        .iter()
        .filter(|t| t.reminder_at.is_some_and(|r| r > now() && r <= deadline))
        .cloned()
        .collect();
    assert_eq!(result, expected);
    assert!(result.iter().all(|t| t.reminder_at.is_some()));

    // subsequence check: walk the input once
    let mut input = tasks.iter();
    for selected in &result {
        assert!(input.any(|t| t.id == selected.id));
    }
}
