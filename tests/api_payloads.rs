//! Wire-format tests for the backend contract: the session submission
//! payload, the stats snapshot, and the resource shapes with Mongo-style
//! `_id` fields and camelCase keys.

use prodo::api::habits::{Habit, HabitFrequency, HabitType};
use prodo::api::money::Dashboard;
use prodo::api::pomodoro::StatsSnapshot;
use prodo::api::tasks::{NewTask, Task};
use prodo::libs::pomodoro::{CompletedSession, PomodoroMode};
use serde_json::json;

#[test]
fn test_completed_session_wire_format() {
    let session = CompletedSession {
        mode: PomodoroMode::Work,
        duration: 1500,
        notes: vec!["buy milk".to_string(), "read".to_string()],
    };

    let value = serde_json::to_value(&session).unwrap();
    assert_eq!(
        value,
        json!({
            "type": "work",
            "duration": 1500,
            "tasks": ["buy milk", "read"]
        })
    );
}

#[test]
fn test_break_mode_wire_names() {
    let short = CompletedSession {
        mode: PomodoroMode::ShortBreak,
        duration: 300,
        notes: vec![],
    };
    assert_eq!(serde_json::to_value(&short).unwrap()["type"], "shortBreak");

    let long = CompletedSession {
        mode: PomodoroMode::LongBreak,
        duration: 900,
        notes: vec![],
    };
    assert_eq!(serde_json::to_value(&long).unwrap()["type"], "longBreak");
}

#[test]
fn test_stats_snapshot_deserializes_camel_case() {
    let stats: StatsSnapshot = serde_json::from_value(json!({
        "today": 3,
        "totalPomodoros": 42,
        "totalWorkTime": 1050
    }))
    .unwrap();

    assert_eq!(stats.today, 3);
    assert_eq!(stats.total_pomodoros, 42);
    assert_eq!(stats.total_work_time, 1050);
}

#[test]
fn test_task_deserializes_with_defaults() {
    let task: Task = serde_json::from_value(json!({
        "_id": "64ad0c",
        "title": "Write report"
    }))
    .unwrap();

    assert_eq!(task.id, "64ad0c");
    assert_eq!(task.title, "Write report");
    assert_eq!(task.description, "");
    assert!(task.due_date.is_none());
    assert!(!task.completed);
}

#[test]
fn test_new_task_omits_absent_due_date() {
    let payload = NewTask {
        title: "t".to_string(),
        description: String::new(),
        due_date: None,
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert!(value.get("dueDate").is_none());

    let dated = NewTask {
        title: "t".to_string(),
        description: String::new(),
        due_date: Some("2025-09-01".to_string()),
    };
    assert_eq!(serde_json::to_value(&dated).unwrap()["dueDate"], "2025-09-01");
}

#[test]
fn test_habit_deserializes_type_and_frequency() {
    let habit: Habit = serde_json::from_value(json!({
        "_id": "h1",
        "name": "Morning run",
        "type": "positive",
        "frequency": "daily",
        "streak": 6
    }))
    .unwrap();

    assert_eq!(habit.habit_type, HabitType::Positive);
    assert_eq!(habit.frequency, HabitFrequency::Daily);
    assert_eq!(habit.streak, 6);
    assert_eq!(habit.goal, "");
}

#[test]
fn test_dashboard_tolerates_missing_breakdowns() {
    let dashboard: Dashboard = serde_json::from_value(json!({
        "summary": { "income": 2500.0, "expenses": 1800.0, "savings": 700.0 }
    }))
    .unwrap();

    assert_eq!(dashboard.summary.income, 2500.0);
    assert!(dashboard.expense_categories.is_empty());
    assert!(dashboard.income_categories.is_empty());
}
