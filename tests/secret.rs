#[cfg(test)]
mod tests {
    use parking_lot::{Mutex, MutexGuard};
    use prodo::libs::secret::Secret;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // HOME is process-global, so tests touching it run one at a time
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct SecretTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for SecretTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock();
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            SecretTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_store_and_load(_ctx: &mut SecretTestContext) {
        let secret = Secret::new(".test_token");
        assert!(!secret.exists());

        secret.store("a-bearer-token").unwrap();
        assert!(secret.exists());
        assert_eq!(secret.load().unwrap(), "a-bearer-token");
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_value_is_not_stored_in_plain_text(_ctx: &mut SecretTestContext) {
        let secret = Secret::new(".test_token");
        secret.store("hunter2-credential").unwrap();

        let storage = prodo::libs::data_storage::DataStorage::new();
        let raw = std::fs::read_to_string(storage.get_path(".test_token").unwrap()).unwrap();
        assert!(!raw.contains("hunter2-credential"));
    }

    #[test_context(SecretTestContext)]
    #[test]
    fn test_clear_is_idempotent(_ctx: &mut SecretTestContext) {
        let secret = Secret::new(".test_token");
        secret.store("temp").unwrap();

        secret.clear().unwrap();
        assert!(!secret.exists());
        assert!(secret.load().is_err());

        // Clearing an absent secret is not an error
        secret.clear().unwrap();
    }
}
