//! Display implementation for prodo application messages.
//!
//! All user-facing text lives here, keyed by the `Message` enum. Commands
//! never format strings inline; they pick a variant and let this module
//! decide the wording, which keeps terminology consistent across the CLI.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === AUTH MESSAGES ===
            Message::LoggedIn(name) => format!("Signed in as {}", name),
            Message::LoggedOut => "Signed out. The stored token was removed.".to_string(),
            Message::NotLoggedIn => "Not signed in.".to_string(),
            Message::SignupComplete(name) => format!("Account created. Welcome, {}!", name),
            Message::AuthRequired => "Authentication required. Run 'prodo login' first.".to_string(),
            Message::PromptEmail => "Email".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::PromptName => "Name".to_string(),
            Message::PromptMobile => "Mobile".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved.".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::ConfigModuleServer => "Backend server configuration".to_string(),
            Message::ConfigModuleTimer => "Pomodoro timer configuration".to_string(),
            Message::ConfigModuleConverter => "Document converter service configuration".to_string(),
            Message::PromptServerApiUrl => "Backend API URL".to_string(),
            Message::PromptConverterApiUrl => "Converter service URL".to_string(),
            Message::PromptWorkDuration => "Work session length in seconds".to_string(),
            Message::PromptShortBreakDuration => "Short break length in seconds".to_string(),
            Message::PromptLongBreakDuration => "Long break length in seconds".to_string(),
            Message::PromptLongBreakInterval => "Work sessions before a long break".to_string(),

            // === POMODORO MESSAGES ===
            Message::SessionStarting(mode) => format!("Starting {} session. Press Ctrl-C to pause.", mode),
            Message::WorkSessionComplete => "Time for a break!".to_string(),
            Message::BreakComplete => "Time to work!".to_string(),
            Message::SessionRecorded(mode) => format!("Completed {} session saved to your statistics", mode),
            Message::SessionSubmitFailed(err) => format!("Failed to save pomodoro session: {}", err),
            Message::StatsFetchFailed(err) => format!("Failed to load pomodoro stats: {}", err),
            Message::SessionPaused => "Session paused.".to_string(),
            Message::SessionStopped => "Session stopped.".to_string(),
            Message::SessionNoteAdded(text) => format!("Task note added: {}", text),
            Message::SessionNoteRemoved(text) => format!("Task note removed: {}", text),
            Message::SessionNotesEmpty => "No task notes attached to this session.".to_string(),
            Message::StatsHeader => "🍅 Pomodoro statistics".to_string(),

            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TasksEmpty => "No tasks yet.".to_string(),

            // === NOTE MESSAGES ===
            Message::NoteCreated(title) => format!("Note '{}' created", title),
            Message::NoteUpdated(title) => format!("Note '{}' updated", title),
            Message::NoteDeleted(id) => format!("Note {} deleted", id),
            Message::NotesEmpty => "No notes yet.".to_string(),
            Message::NoteExported(path) => format!("Note exported to {}", path),

            // === HABIT MESSAGES ===
            Message::HabitCreated(name) => format!("Habit '{}' created", name),
            Message::HabitCompleted(name, streak) => format!("Habit '{}' completed. Current streak: {} days", name, streak),
            Message::HabitDeleted(id) => format!("Habit {} deleted", id),
            Message::HabitsEmpty => "No habits yet.".to_string(),
            Message::RecommendationsHeader(goals) => format!("Suggested habits for: {}", goals),
            Message::RecommendationsEmpty => "No recommendations returned for these goals.".to_string(),

            // === MONEY MESSAGES ===
            Message::TransactionAdded(desc) => format!("Transaction recorded: {}", desc),
            Message::TransactionDeleted(id) => format!("Transaction {} deleted", id),
            Message::TransactionsEmpty => "No transactions found.".to_string(),
            Message::BudgetSaved(category) => format!("Budget for '{}' saved", category),
            Message::BudgetsEmpty => "No budgets configured.".to_string(),
            Message::GoalAdded(name) => format!("Savings goal '{}' added", name),
            Message::GoalProgressUpdated(name) => format!("Progress updated for goal '{}'", name),
            Message::GoalsEmpty => "No savings goals yet.".to_string(),
            Message::DashboardHeader => "💰 Money dashboard".to_string(),
            Message::ReportHeader(start, end) => format!("📊 Money report {} to {}", start, end),

            // === CALORIE MESSAGES ===
            Message::CalorieEntryAdded(name, calories) => format!("Logged '{}' ({} kcal)", name, calories),
            Message::CalorieEntryDeleted(id) => format!("Entry {} removed from the calorie log", id),
            Message::CalorieEntryNotFound(id) => format!("No calorie entry with id {}", id),
            Message::CalorieGoalSet(goal) => format!("Daily calorie goal set to {} kcal", goal),
            Message::CalorieLogEmpty => "The calorie log is empty.".to_string(),

            // === CONVERTER MESSAGES ===
            Message::ConversionComplete(path) => format!("Saved {}", path),
            Message::UnsupportedImageFormat(ext) => format!("Unsupported format: {}. Try jpeg, png, or webp.", ext),
            Message::SameFormatConversion(fmt) => format!("Source and target formats are the same ({})", fmt),
            Message::NotADocxFile(path) => format!("{} is not a .docx file. Older .doc is not supported.", path),
            Message::FileTooLarge(max_mb) => format!("File size must be less than {}MB", max_mb),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),

            // === ERROR MESSAGES ===
            Message::RequestFailed(err) => format!("Request failed: {}", err),
            Message::ConfigParseError(err) => format!("Failed to parse configuration: {}", err),
        };
        write!(f, "{}", text)
    }
}
