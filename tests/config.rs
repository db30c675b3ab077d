#[cfg(test)]
mod tests {
    use parking_lot::{Mutex, MutexGuard};
    use prodo::libs::config::{Config, ConverterConfig, ServerConfig, TimerConfig, DEFAULT_API_URL};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // HOME is process-global, so tests touching it run one at a time
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock();
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_yields_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert!(config.server.is_none());
        assert!(config.timer.is_none());
        assert!(config.converter.is_none());
        assert_eq!(config.api_url(), DEFAULT_API_URL);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_round_trip(_ctx: &mut ConfigTestContext) {
        let mut config = Config::default();
        config.server = Some(ServerConfig {
            api_url: "https://api.example.com".to_string(),
        });
        config.timer = Some(TimerConfig {
            work_duration: 3000,
            short_break_duration: 600,
            long_break_duration: 1200,
            long_break_interval: 3,
        });
        config.converter = Some(ConverterConfig {
            api_url: "https://convert.example.com".to_string(),
        });
        config.save().unwrap();

        let reloaded = Config::read().unwrap();
        assert_eq!(reloaded.api_url(), "https://api.example.com");
        assert_eq!(reloaded.timer, config.timer);
        assert_eq!(reloaded.converter, config.converter);
    }

    #[test]
    fn test_timer_defaults_match_classic_pomodoro() {
        let timer = TimerConfig::default();
        assert_eq!(timer.work_duration, 1500);
        assert_eq!(timer.short_break_duration, 300);
        assert_eq!(timer.long_break_duration, 900);
        assert_eq!(timer.long_break_interval, 4);
    }
}
