use prodo::libs::pomodoro::{CompletedSession, PomodoroEngine, PomodoroMode, Tick, TimerSettings};

fn small_settings() -> TimerSettings {
    TimerSettings {
        work_duration: 2,
        short_break_duration: 3,
        long_break_duration: 5,
        long_break_interval: 4,
    }
}

/// Ticks a running engine until it completes, returning the completed
/// session and the number of ticks it took.
fn run_to_completion(engine: &mut PomodoroEngine) -> (CompletedSession, u64) {
    let mut ticks = 0;
    loop {
        ticks += 1;
        match engine.tick() {
            Tick::Completed(session) => return (session, ticks),
            Tick::Running(_) => {}
            Tick::Idle => panic!("engine stopped without completing"),
        }
        assert!(ticks < 100_000, "countdown never completed");
    }
}

#[test]
fn test_countdown_completes_exactly_once_after_duration_ticks() {
    let settings = TimerSettings {
        work_duration: 10,
        ..small_settings()
    };
    let mut engine = PomodoroEngine::new(settings);
    engine.start();

    let mut completions = 0;
    for i in 1..=10u64 {
        match engine.tick() {
            Tick::Completed(_) => {
                completions += 1;
                assert_eq!(i, 10, "completion must fire on the final tick");
            }
            Tick::Running(remaining) => assert_eq!(remaining, 10 - i),
            Tick::Idle => panic!("engine must be running"),
        }
    }

    assert_eq!(completions, 1);
    // The engine stops itself at the boundary and never underflows
    assert!(!engine.is_running());
    assert_eq!(engine.tick(), Tick::Idle);
}

#[test]
fn test_pause_is_idempotent() {
    let mut engine = PomodoroEngine::new(small_settings());
    engine.start();
    engine.tick();

    let remaining = engine.seconds_remaining();
    engine.pause();
    engine.pause();

    assert!(!engine.is_running());
    assert_eq!(engine.seconds_remaining(), remaining);
}

#[test]
fn test_paused_engine_ignores_ticks() {
    let mut engine = PomodoroEngine::new(small_settings());
    let before = engine.seconds_remaining();

    assert_eq!(engine.tick(), Tick::Idle);
    assert_eq!(engine.seconds_remaining(), before);
}

#[test]
fn test_long_break_every_fourth_work_session() {
    let mut engine = PomodoroEngine::new(small_settings());

    let mut next_modes = Vec::new();
    for _ in 0..4 {
        if engine.mode() != PomodoroMode::Work {
            engine.switch_mode(PomodoroMode::Work);
        }
        engine.start();
        let (session, _) = run_to_completion(&mut engine);
        assert_eq!(session.mode, PomodoroMode::Work);
        next_modes.push(engine.mode());
    }

    assert_eq!(
        next_modes,
        vec![
            PomodoroMode::ShortBreak,
            PomodoroMode::ShortBreak,
            PomodoroMode::ShortBreak,
            PomodoroMode::LongBreak,
        ]
    );
    assert_eq!(engine.completed_work_sessions(), 4);
}

#[test]
fn test_breaks_lead_back_to_work_without_counting() {
    let mut engine = PomodoroEngine::new(small_settings());
    engine.switch_mode(PomodoroMode::ShortBreak);
    engine.start();

    let (session, ticks) = run_to_completion(&mut engine);

    assert_eq!(session.mode, PomodoroMode::ShortBreak);
    assert_eq!(session.duration, 3);
    assert_eq!(ticks, 3);
    assert_eq!(engine.mode(), PomodoroMode::Work);
    assert_eq!(engine.completed_work_sessions(), 0);
}

#[test]
fn test_start_at_zero_completes_on_next_tick() {
    // The engine does not validate settings, so a zero duration reaches a
    // zero countdown; the next tick must complete without underflow.
    let mut engine = PomodoroEngine::new(small_settings());
    engine.update_settings(TimerSettings {
        work_duration: 0,
        ..small_settings()
    });
    assert_eq!(engine.seconds_remaining(), 0);

    engine.start();
    match engine.tick() {
        Tick::Completed(session) => {
            assert_eq!(session.mode, PomodoroMode::Work);
            assert_eq!(session.duration, 0);
        }
        other => panic!("expected completion, got {:?}", other),
    }
    assert_eq!(engine.mode(), PomodoroMode::ShortBreak);
}

#[test]
fn test_switch_mode_discards_remaining_time() {
    let settings = TimerSettings {
        work_duration: 1000,
        short_break_duration: 300,
        ..small_settings()
    };
    let mut engine = PomodoroEngine::new(settings);
    engine.start();
    for _ in 0..500 {
        engine.tick();
    }
    assert_eq!(engine.seconds_remaining(), 500);

    engine.switch_mode(PomodoroMode::ShortBreak);

    assert_eq!(engine.mode(), PomodoroMode::ShortBreak);
    assert_eq!(engine.seconds_remaining(), 300);
    assert!(!engine.is_running());
    assert_eq!(engine.completed_work_sessions(), 0);
}

#[test]
fn test_full_default_work_session_scenario() {
    let mut engine = PomodoroEngine::new(TimerSettings::default());
    assert_eq!(engine.seconds_remaining(), 1500);
    assert!(!engine.is_running());

    engine.start();

    let mut completions = 0;
    for _ in 0..1500 {
        if let Tick::Completed(session) = engine.tick() {
            completions += 1;
            assert_eq!(session.mode, PomodoroMode::Work);
            assert_eq!(session.duration, 1500);
        }
    }

    assert_eq!(completions, 1);
    assert_eq!(engine.completed_work_sessions(), 1);
    assert_eq!(engine.mode(), PomodoroMode::ShortBreak);
    assert_eq!(engine.seconds_remaining(), 300);
    assert!(!engine.is_running());
}

#[test]
fn test_note_list_add_and_positional_remove() {
    let mut engine = PomodoroEngine::new(small_settings());
    engine.add_note("buy milk");
    engine.add_note("read");

    assert_eq!(engine.remove_note(0), Some("buy milk".to_string()));
    assert_eq!(engine.notes(), &["read".to_string()]);

    // Out-of-range removal is ignored
    assert_eq!(engine.remove_note(5), None);
    assert_eq!(engine.notes(), &["read".to_string()]);
}

#[test]
fn test_completed_session_carries_current_notes() {
    let mut engine = PomodoroEngine::new(small_settings());
    engine.add_note("write tests");
    engine.start();

    let (session, _) = run_to_completion(&mut engine);

    assert_eq!(session.notes, vec!["write tests".to_string()]);
    // The list survives the completion; only explicit action clears it
    assert_eq!(engine.notes().len(), 1);
    engine.clear_notes();
    assert!(engine.notes().is_empty());
}

#[test]
fn test_reset_reloads_current_mode_and_keeps_counter() {
    let mut engine = PomodoroEngine::new(small_settings());
    engine.start();
    run_to_completion(&mut engine);
    assert_eq!(engine.completed_work_sessions(), 1);

    engine.switch_mode(PomodoroMode::Work);
    engine.start();
    engine.tick();
    engine.reset();

    assert!(!engine.is_running());
    assert_eq!(engine.seconds_remaining(), 2);
    assert_eq!(engine.completed_work_sessions(), 1);
}

#[test]
fn test_update_settings_recomputes_current_mode_and_keeps_running() {
    let mut engine = PomodoroEngine::new(small_settings());
    engine.start();
    engine.tick();
    assert!(engine.is_running());

    let new_settings = TimerSettings {
        work_duration: 60,
        ..small_settings()
    };
    engine.update_settings(new_settings);

    // Remaining time reloads from the new duration for the current mode,
    // and a running timer keeps ticking under the new total
    assert_eq!(engine.seconds_remaining(), 60);
    assert!(engine.is_running());
    assert_eq!(engine.mode(), PomodoroMode::Work);
    assert_eq!(engine.tick(), Tick::Running(59));
}

#[test]
fn test_seeded_counter_drives_long_break_cadence() {
    let mut engine = PomodoroEngine::new(small_settings());
    // Three sessions already completed today according to the server, so
    // the very next completed work session hits the long-break interval
    engine.seed_completed_sessions(3);
    engine.start();

    run_to_completion(&mut engine);

    assert_eq!(engine.completed_work_sessions(), 4);
    assert_eq!(engine.mode(), PomodoroMode::LongBreak);
    assert_eq!(engine.seconds_remaining(), 5);
}

#[test]
fn test_start_is_noop_when_running() {
    let mut engine = PomodoroEngine::new(small_settings());
    engine.start();
    engine.tick();
    let remaining = engine.seconds_remaining();

    engine.start();

    assert!(engine.is_running());
    assert_eq!(engine.seconds_remaining(), remaining);
}
