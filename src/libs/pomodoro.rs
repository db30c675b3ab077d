//! Pomodoro session engine.
//!
//! A synchronous state machine driving a single countdown: the caller
//! invokes [`PomodoroEngine::tick`] once per second and the engine decides
//! when a session completes, which mode follows, and what gets reported to
//! the statistics store. The engine holds no clock, no I/O, and no async
//! state, so the whole session lifecycle is unit-testable tick by tick.
//!
//! Mode transitions are evaluated only when a countdown reaches zero:
//! a finished work session is counted and every `long_break_interval`-th
//! one leads into a long break, otherwise a short break; finished breaks
//! always lead back to work. The engine always stops itself at a session
//! boundary rather than auto-chaining into the next countdown.
//!
//! Settings are trusted as-given. Input sanitization (positive durations,
//! interval >= 1) is the responsibility of whatever feeds
//! [`PomodoroEngine::update_settings`]: the config wizard and CLI
//! argument parsing in this crate.

use serde::{Deserialize, Serialize};

use crate::libs::config::TimerConfig;

/// The three session kinds, with the wire names the statistics store expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PomodoroMode {
    #[serde(rename = "work")]
    Work,
    #[serde(rename = "shortBreak")]
    ShortBreak,
    #[serde(rename = "longBreak")]
    LongBreak,
}

impl PomodoroMode {
    /// Human-readable label for prompts and countdown display.
    pub fn label(&self) -> &'static str {
        match self {
            PomodoroMode::Work => "work",
            PomodoroMode::ShortBreak => "short break",
            PomodoroMode::LongBreak => "long break",
        }
    }
}

/// Countdown durations and long-break cadence, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSettings {
    pub work_duration: u64,
    pub short_break_duration: u64,
    pub long_break_duration: u64,
    pub long_break_interval: u32,
}

impl TimerSettings {
    pub fn duration_for(&self, mode: PomodoroMode) -> u64 {
        match mode {
            PomodoroMode::Work => self.work_duration,
            PomodoroMode::ShortBreak => self.short_break_duration,
            PomodoroMode::LongBreak => self.long_break_duration,
        }
    }
}

impl Default for TimerSettings {
    fn default() -> Self {
        TimerConfig::default().into()
    }
}

impl From<TimerConfig> for TimerSettings {
    fn from(config: TimerConfig) -> Self {
        Self {
            work_duration: config.work_duration,
            short_break_duration: config.short_break_duration,
            long_break_duration: config.long_break_duration,
            long_break_interval: config.long_break_interval,
        }
    }
}

/// A finished session, handed to the statistics collaborator and not
/// retained by the engine. `duration` is the configured length of the
/// completed mode, and `notes` carries the full task-note list as context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedSession {
    #[serde(rename = "type")]
    pub mode: PomodoroMode,
    pub duration: u64,
    #[serde(rename = "tasks")]
    pub notes: Vec<String>,
}

/// Result of a single one-second tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tick {
    /// The engine is not running; nothing changed.
    Idle,
    /// The countdown advanced; the new remaining time is carried.
    Running(u64),
    /// The countdown hit zero: the session completed, the next mode was
    /// loaded, and the engine stopped itself.
    Completed(CompletedSession),
}

/// The session state machine. One instance is constructed at command start
/// and handed by reference to whatever drives and displays it; there is no
/// ambient global.
#[derive(Debug, Clone)]
pub struct PomodoroEngine {
    settings: TimerSettings,
    mode: PomodoroMode,
    seconds_remaining: u64,
    running: bool,
    completed_work_sessions: u32,
    notes: Vec<String>,
}

impl PomodoroEngine {
    /// Creates a stopped engine in work mode with a full countdown.
    pub fn new(settings: TimerSettings) -> Self {
        Self {
            settings,
            mode: PomodoroMode::Work,
            seconds_remaining: settings.work_duration,
            running: false,
            completed_work_sessions: 0,
            notes: Vec::new(),
        }
    }

    pub fn mode(&self) -> PomodoroMode {
        self.mode
    }

    pub fn seconds_remaining(&self) -> u64 {
        self.seconds_remaining
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn completed_work_sessions(&self) -> u32 {
        self.completed_work_sessions
    }

    pub fn settings(&self) -> TimerSettings {
        self.settings
    }

    pub fn notes(&self) -> &[String] {
        &self.notes
    }

    /// Seeds the work-session counter from the server's `today` statistic
    /// so long-break cadence survives restarts. Only meaningful before the
    /// first completion of a run.
    pub fn seed_completed_sessions(&mut self, count: u32) {
        self.completed_work_sessions = count;
    }

    /// Starts the countdown. No-op when already running. Remaining time is
    /// deliberately not validated: starting at zero completes on the next
    /// tick.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stops the countdown, preserving the remaining time exactly.
    pub fn pause(&mut self) {
        self.running = false;
    }

    /// Stops the countdown and reloads the full duration of the current
    /// mode. The session counter is untouched.
    pub fn reset(&mut self) {
        self.running = false;
        self.seconds_remaining = self.settings.duration_for(self.mode);
    }

    /// Stops the countdown and jumps to `target` with its full duration.
    /// May be called mid-countdown; the remaining time is discarded and no
    /// counter changes.
    pub fn switch_mode(&mut self, target: PomodoroMode) {
        self.running = false;
        self.mode = target;
        self.seconds_remaining = self.settings.duration_for(target);
    }

    /// Replaces the settings and recomputes the remaining time for the
    /// current mode from the new duration. Mode and the running flag are
    /// left as they are, so a running timer keeps ticking under the new
    /// total.
    pub fn update_settings(&mut self, settings: TimerSettings) {
        self.settings = settings;
        self.seconds_remaining = self.settings.duration_for(self.mode);
    }

    /// Appends a task note to the session scratch list.
    pub fn add_note(&mut self, text: impl Into<String>) {
        self.notes.push(text.into());
    }

    /// Removes the note at `index`, returning it. Positional and unstable
    /// across concurrent removals; out-of-range indices are ignored.
    pub fn remove_note(&mut self, index: usize) -> Option<String> {
        if index < self.notes.len() {
            Some(self.notes.remove(index))
        } else {
            None
        }
    }

    /// Clears the scratch list. Only explicit user action does this; the
    /// list survives session completions.
    pub fn clear_notes(&mut self) {
        self.notes.clear();
    }

    /// Advances the countdown by one second.
    ///
    /// While running, the remaining time decrements once; the tick on
    /// which it reaches zero also completes the session: the finished
    /// session is returned for submission, the transition rule picks the
    /// next mode, the new countdown is loaded, and the engine stops. Mode
    /// and remaining time change together within this call, so no
    /// intermediate state is observable. A tick at zero remaining (the
    /// start-at-zero edge case) completes immediately without underflow.
    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Idle;
        }

        if self.seconds_remaining > 0 {
            self.seconds_remaining -= 1;
        }
        if self.seconds_remaining > 0 {
            return Tick::Running(self.seconds_remaining);
        }

        let completed = CompletedSession {
            mode: self.mode,
            duration: self.settings.duration_for(self.mode),
            notes: self.notes.clone(),
        };

        let next = match self.mode {
            PomodoroMode::Work => {
                self.completed_work_sessions += 1;
                if self.completed_work_sessions % self.settings.long_break_interval == 0 {
                    PomodoroMode::LongBreak
                } else {
                    PomodoroMode::ShortBreak
                }
            }
            PomodoroMode::ShortBreak | PomodoroMode::LongBreak => PomodoroMode::Work,
        };

        self.mode = next;
        self.seconds_remaining = self.settings.duration_for(next);
        self.running = false;

        Tick::Completed(completed)
    }
}
