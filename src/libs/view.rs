//! Console table rendering for list views.
//!
//! Thin wrappers around prettytable so commands stay free of layout code.
//! Server ids are shown in full; list positions (1-based) are used where
//! an operation takes an index instead of an id.

use prettytable::{row, Table};

use crate::api::habits::{Habit, HabitRecommendation};
use crate::api::money::{Budget, CategoryTotal, MoneySummary, SavingsGoal, Transaction, TransactionKind};
use crate::api::notes::Note;
use crate::api::pomodoro::StatsSnapshot;
use crate::api::tasks::Task;
use crate::libs::calorie::CalorieLog;
use crate::libs::formatter::{format_amount, format_duration};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) {
        let mut table = Table::new();
        table.add_row(row!["ID", "TITLE", "DESCRIPTION", "DUE", "DONE"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.title,
                task.description,
                task.due_date.as_deref().unwrap_or("-"),
                if task.completed { "✔" } else { "" }
            ]);
        }
        table.printstd();
    }

    pub fn notes(notes: &[Note]) {
        let mut table = Table::new();
        table.add_row(row!["ID", "TITLE", "DESCRIPTION"]);
        for note in notes {
            table.add_row(row![note.id, note.title, note.description]);
        }
        table.printstd();
    }

    pub fn habits(habits: &[Habit]) {
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "TYPE", "FREQUENCY", "GOAL", "STREAK"]);
        for habit in habits {
            table.add_row(row![
                habit.id,
                habit.name,
                format!("{:?}", habit.habit_type).to_lowercase(),
                format!("{:?}", habit.frequency).to_lowercase(),
                habit.goal,
                format!("{} days", habit.streak)
            ]);
        }
        table.printstd();
    }

    pub fn habit_recommendations(recommendations: &[HabitRecommendation]) {
        let mut table = Table::new();
        table.add_row(row!["#", "NAME", "TYPE", "DESCRIPTION"]);
        for (i, rec) in recommendations.iter().enumerate() {
            table.add_row(row![i + 1, rec.name, format!("{:?}", rec.habit_type).to_lowercase(), rec.description]);
        }
        table.printstd();
    }

    pub fn transactions(transactions: &[Transaction]) {
        let mut table = Table::new();
        table.add_row(row!["ID", "DATE", "CATEGORY", "DESCRIPTION", "AMOUNT"]);
        for t in transactions {
            let signed = match t.kind {
                TransactionKind::Income => format!("+{}", format_amount(t.amount)),
                TransactionKind::Expense => format!("-{}", format_amount(t.amount)),
            };
            table.add_row(row![t.id, t.date, t.category, t.description, signed]);
        }
        table.printstd();
    }

    pub fn money_summary(summary: &MoneySummary) {
        let mut table = Table::new();
        table.add_row(row!["INCOME", "EXPENSES", "SAVINGS"]);
        table.add_row(row![
            format_amount(summary.income),
            format_amount(summary.expenses),
            format_amount(summary.savings)
        ]);
        table.printstd();
    }

    pub fn category_totals(title: &str, totals: &[CategoryTotal]) {
        if totals.is_empty() {
            return;
        }
        println!("{}", title);
        let mut table = Table::new();
        table.add_row(row!["CATEGORY", "TOTAL"]);
        for entry in totals {
            table.add_row(row![entry.category, format_amount(entry.total)]);
        }
        table.printstd();
    }

    pub fn budgets(budgets: &[Budget]) {
        let mut table = Table::new();
        table.add_row(row!["ID", "CATEGORY", "BUDGET", "SPENT"]);
        for budget in budgets {
            table.add_row(row![budget.id, budget.category, format_amount(budget.amount), format_amount(budget.spent)]);
        }
        table.printstd();
    }

    pub fn savings_goals(goals: &[SavingsGoal]) {
        let mut table = Table::new();
        table.add_row(row!["ID", "NAME", "TARGET", "SAVED", "PROGRESS"]);
        for goal in goals {
            let progress = if goal.target_amount > 0.0 {
                (goal.current_amount / goal.target_amount * 100.0).min(100.0)
            } else {
                0.0
            };
            table.add_row(row![
                goal.id,
                goal.name,
                format_amount(goal.target_amount),
                format_amount(goal.current_amount),
                format!("{:.0}%", progress)
            ]);
        }
        table.printstd();
    }

    pub fn pomodoro_stats(stats: &StatsSnapshot) {
        let mut table = Table::new();
        table.add_row(row!["TODAY", "TOTAL SESSIONS", "TOTAL WORK TIME"]);
        table.add_row(row![
            stats.today,
            stats.total_pomodoros,
            format_duration(&chrono::Duration::minutes(stats.total_work_time as i64))
        ]);
        table.printstd();
    }

    pub fn session_notes(notes: &[String]) {
        let mut table = Table::new();
        table.add_row(row!["#", "NOTE"]);
        for (i, note) in notes.iter().enumerate() {
            table.add_row(row![i + 1, note]);
        }
        table.printstd();
    }

    pub fn calorie_log(log: &CalorieLog) {
        let mut table = Table::new();
        table.add_row(row!["ID", "FOOD", "MEAL", "KCAL"]);
        for entry in &log.entries {
            table.add_row(row![entry.id, entry.name, entry.meal_type.label(), entry.calories]);
        }
        table.add_row(row!["", "", "TOTAL", log.total_calories()]);
        table.add_row(row!["", "", "GOAL", log.daily_goal]);
        table.add_row(row!["", "", "REMAINING", log.remaining()]);
        table.printstd();
    }
}
