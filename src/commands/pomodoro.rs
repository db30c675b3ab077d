//! Pomodoro focus sessions.
//!
//! `prodo pomodoro` runs the session engine in the foreground: a
//! one-second tick loop renders the countdown, Ctrl-C pauses into an
//! interactive menu, and every completed session is reported to the
//! statistics store when signed in. The engine stops itself at each
//! session boundary; the user explicitly starts the next one from the
//! boundary menu.
//!
//! The tick interval exists only inside [`countdown`]: pausing, menus,
//! and quitting all drop it, so exactly one timer callback is pending at
//! any moment and none can fire into a torn-down loop.

use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::io::Write;
use tokio::time::{self, Duration, MissedTickBehavior};

use crate::api::ApiClient;
use crate::libs::config::Config;
use crate::libs::formatter::format_countdown;
use crate::libs::messages::Message;
use crate::libs::notifier::Notifier;
use crate::libs::pomodoro::{CompletedSession, PomodoroEngine, PomodoroMode, Tick, TimerSettings};
use crate::libs::view::View;
use crate::{msg_bail_anyhow, msg_debug, msg_print, msg_success, msg_warning};

#[derive(Debug, Args)]
pub struct PomodoroArgs {
    #[command(subcommand)]
    command: Option<PomodoroCommand>,
}

#[derive(Debug, Subcommand)]
enum PomodoroCommand {
    #[command(about = "Run focus sessions (default)")]
    Start(StartArgs),
    #[command(about = "Show aggregate statistics")]
    Stats,
}

#[derive(Debug, Default, Args)]
struct StartArgs {
    /// Task note attached to completed sessions; repeatable
    #[arg(long = "note", value_name = "TEXT")]
    notes: Vec<String>,
}

pub async fn cmd(args: PomodoroArgs) -> Result<()> {
    match args.command {
        Some(PomodoroCommand::Stats) => stats().await,
        Some(PomodoroCommand::Start(start)) => run(start).await,
        None => run(StartArgs::default()).await,
    }
}

async fn stats() -> Result<()> {
    let config = Config::read()?;
    let client = ApiClient::from_config(&config);
    if !client.is_authenticated() {
        msg_bail_anyhow!(Message::AuthRequired);
    }

    let stats = client.fetch_stats().await?;
    msg_print!(Message::StatsHeader, true);
    View::pomodoro_stats(&stats);
    Ok(())
}

/// How a countdown run ended.
enum Countdown {
    Completed(CompletedSession),
    Interrupted,
}

async fn run(args: StartArgs) -> Result<()> {
    let config = Config::read()?;
    let settings: TimerSettings = config.timer.clone().unwrap_or_default().into();
    let client = ApiClient::from_config(&config);
    let notifier = Notifier::new();

    let mut engine = PomodoroEngine::new(settings);
    for note in args.notes {
        engine.add_note(note);
    }

    // Signed-in runs seed the long-break cadence from the server count;
    // anonymous runs operate stats-free.
    if client.is_authenticated() {
        match client.fetch_stats().await {
            Ok(stats) => {
                engine.seed_completed_sessions(stats.today);
                View::pomodoro_stats(&stats);
            }
            Err(e) => msg_warning!(Message::StatsFetchFailed(e.to_string())),
        }
    }

    msg_print!(Message::SessionStarting(engine.mode().label().to_string()));
    engine.start();

    loop {
        match countdown(&mut engine).await {
            Countdown::Completed(session) => {
                println!();
                // Side-effects are best-effort; the transition already happened
                notifier.session_end();
                match session.mode {
                    PomodoroMode::Work => msg_success!(Message::WorkSessionComplete),
                    _ => msg_success!(Message::BreakComplete),
                }
                submit(&client, session);
                if !boundary_menu(&mut engine)? {
                    break;
                }
            }
            Countdown::Interrupted => {
                println!();
                engine.pause();
                msg_print!(Message::SessionPaused);
                if !pause_menu(&mut engine)? {
                    break;
                }
            }
        }
    }

    msg_print!(Message::SessionStopped);
    Ok(())
}

/// Ticks the engine once a second until the session completes or Ctrl-C
/// arrives. Owning the interval here is the cancellation discipline: it is
/// dropped on every return path.
async fn countdown(engine: &mut PomodoroEngine) -> Countdown {
    let mut interval = time::interval(Duration::from_secs(1));
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick resolves immediately; consume it so the countdown
    // advances at one-second boundaries.
    interval.tick().await;

    render(engine.mode(), engine.seconds_remaining());

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match engine.tick() {
                    Tick::Idle => return Countdown::Interrupted,
                    Tick::Running(remaining) => render(engine.mode(), remaining),
                    Tick::Completed(session) => return Countdown::Completed(session),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                return Countdown::Interrupted;
            }
        }
    }
}

fn render(mode: PomodoroMode, remaining: u64) {
    print!("\r[{}] {}  ", mode.label(), format_countdown(remaining));
    let _ = std::io::stdout().flush();
}

/// Fire-and-forget submission of a completed session. Failures are logged
/// and never retried; the stats refresh afterwards is informational only.
/// Nothing here can reach back into the engine.
fn submit(client: &ApiClient, session: CompletedSession) {
    if !client.is_authenticated() {
        return;
    }
    let client = client.clone();
    tokio::spawn(async move {
        match client.submit_session(&session).await {
            Ok(()) => {
                msg_debug!(Message::SessionRecorded(session.mode.label().to_string()).to_string());
                if let Err(e) = client.fetch_stats().await {
                    msg_debug!(Message::StatsFetchFailed(e.to_string()).to_string());
                }
            }
            Err(e) => msg_debug!(Message::SessionSubmitFailed(e.to_string()).to_string()),
        }
    });
}

/// Menu shown at a session boundary. Returns false when the user quits.
fn boundary_menu(engine: &mut PomodoroEngine) -> Result<bool> {
    loop {
        let prompt = format!("Next: {} ({})", engine.mode().label(), format_countdown(engine.seconds_remaining()));
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(&["Start next session", "Switch mode", "Task notes", "Adjust durations", "Quit"])
            .default(0)
            .interact()?;

        match choice {
            0 => {
                msg_print!(Message::SessionStarting(engine.mode().label().to_string()));
                engine.start();
                return Ok(true);
            }
            1 => switch_mode_menu(engine)?,
            2 => notes_menu(engine)?,
            3 => adjust_settings(engine)?,
            _ => return Ok(false),
        }
    }
}

/// Menu shown after a Ctrl-C pause. Returns false when the user quits.
fn pause_menu(engine: &mut PomodoroEngine) -> Result<bool> {
    loop {
        let prompt = format!("Paused: {} ({})", engine.mode().label(), format_countdown(engine.seconds_remaining()));
        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(&["Resume", "Reset session", "Switch mode", "Task notes", "Adjust durations", "Quit"])
            .default(0)
            .interact()?;

        match choice {
            0 => {
                engine.start();
                return Ok(true);
            }
            1 => engine.reset(),
            2 => switch_mode_menu(engine)?,
            3 => notes_menu(engine)?,
            4 => adjust_settings(engine)?,
            _ => return Ok(false),
        }
    }
}

fn switch_mode_menu(engine: &mut PomodoroEngine) -> Result<()> {
    let modes = [PomodoroMode::Work, PomodoroMode::ShortBreak, PomodoroMode::LongBreak];
    let labels: Vec<&str> = modes.iter().map(|m| m.label()).collect();
    let choice = Select::with_theme(&ColorfulTheme::default())
        .with_prompt("Switch to")
        .items(&labels)
        .default(0)
        .interact()?;
    engine.switch_mode(modes[choice]);
    Ok(())
}

fn notes_menu(engine: &mut PomodoroEngine) -> Result<()> {
    loop {
        if engine.notes().is_empty() {
            msg_print!(Message::SessionNotesEmpty);
        } else {
            View::session_notes(engine.notes());
        }

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Task notes")
            .items(&["Add note", "Remove note", "Clear notes", "Back"])
            .default(3)
            .interact()?;

        match choice {
            0 => {
                let text: String = Input::with_theme(&ColorfulTheme::default()).with_prompt("Note").interact_text()?;
                engine.add_note(text.clone());
                msg_print!(Message::SessionNoteAdded(text));
            }
            1 => {
                if engine.notes().is_empty() {
                    continue;
                }
                let index: usize = Input::with_theme(&ColorfulTheme::default())
                    .with_prompt("Note number to remove")
                    .interact_text()?;
                if let Some(removed) = engine.remove_note(index.saturating_sub(1)) {
                    msg_print!(Message::SessionNoteRemoved(removed));
                }
            }
            2 => engine.clear_notes(),
            _ => return Ok(()),
        }
    }
}

/// Live settings edit. The engine recomputes the current countdown from
/// the new duration and deliberately leaves the running flag alone.
fn adjust_settings(engine: &mut PomodoroEngine) -> Result<()> {
    let current = engine.settings();

    let settings = TimerSettings {
        work_duration: prompt_seconds(Message::PromptWorkDuration, current.work_duration)?,
        short_break_duration: prompt_seconds(Message::PromptShortBreakDuration, current.short_break_duration)?,
        long_break_duration: prompt_seconds(Message::PromptLongBreakDuration, current.long_break_duration)?,
        long_break_interval: Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptLongBreakInterval.to_string())
            .default(current.long_break_interval)
            .validate_with(|v: &u32| if *v >= 1 { Ok(()) } else { Err("must be at least 1") })
            .interact_text()?,
    };

    engine.update_settings(settings);
    Ok(())
}

fn prompt_seconds(prompt: Message, default: u64) -> Result<u64> {
    Ok(Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default)
        .validate_with(|v: &u64| if *v > 0 { Ok(()) } else { Err("must be greater than zero") })
        .interact_text()?)
}
