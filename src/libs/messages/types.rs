#[derive(Debug, Clone)]
pub enum Message {
    // === AUTH MESSAGES ===
    LoggedIn(String),
    LoggedOut,
    NotLoggedIn,
    SignupComplete(String),
    AuthRequired,
    PromptEmail,
    PromptPassword,
    PromptName,
    PromptMobile,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptSelectModules,
    ConfigModuleServer,
    ConfigModuleTimer,
    ConfigModuleConverter,
    PromptServerApiUrl,
    PromptConverterApiUrl,
    PromptWorkDuration,
    PromptShortBreakDuration,
    PromptLongBreakDuration,
    PromptLongBreakInterval,

    // === POMODORO MESSAGES ===
    SessionStarting(String),
    WorkSessionComplete,
    BreakComplete,
    SessionRecorded(String),
    SessionSubmitFailed(String),
    StatsFetchFailed(String),
    SessionPaused,
    SessionStopped,
    SessionNoteAdded(String),
    SessionNoteRemoved(String),
    SessionNotesEmpty,
    StatsHeader,

    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TasksEmpty,

    // === NOTE MESSAGES ===
    NoteCreated(String),
    NoteUpdated(String),
    NoteDeleted(String),
    NotesEmpty,
    NoteExported(String),

    // === HABIT MESSAGES ===
    HabitCreated(String),
    HabitCompleted(String, u32),
    HabitDeleted(String),
    HabitsEmpty,
    RecommendationsHeader(String),
    RecommendationsEmpty,

    // === MONEY MESSAGES ===
    TransactionAdded(String),
    TransactionDeleted(String),
    TransactionsEmpty,
    BudgetSaved(String),
    BudgetsEmpty,
    GoalAdded(String),
    GoalProgressUpdated(String),
    GoalsEmpty,
    DashboardHeader,
    ReportHeader(String, String),

    // === CALORIE MESSAGES ===
    CalorieEntryAdded(String, u32),
    CalorieEntryDeleted(u64),
    CalorieEntryNotFound(u64),
    CalorieGoalSet(u32),
    CalorieLogEmpty,

    // === CONVERTER MESSAGES ===
    ConversionComplete(String),
    UnsupportedImageFormat(String),
    SameFormatConversion(String),
    NotADocxFile(String),
    FileTooLarge(u64),

    // === EXPORT MESSAGES ===
    ExportCompleted(String),

    // === ERROR MESSAGES ===
    RequestFailed(String),
    ConfigParseError(String),
}
