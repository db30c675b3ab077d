#[cfg(test)]
mod tests {
    use parking_lot::{Mutex, MutexGuard};
    use prodo::libs::calorie::{CalorieLog, MealType};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // HOME is process-global, so tests touching it run one at a time
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct CalorieTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for CalorieTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock();
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            CalorieTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(CalorieTestContext)]
    #[test]
    fn test_log_round_trip(_ctx: &mut CalorieTestContext) {
        let mut log = CalorieLog::read().unwrap();
        assert!(log.entries.is_empty());
        assert_eq!(log.daily_goal, 2000);

        log.add("Oatmeal", 350, MealType::Breakfast);
        log.add("Salad", 420, MealType::Lunch);
        log.save().unwrap();

        let reloaded = CalorieLog::read().unwrap();
        assert_eq!(reloaded.entries.len(), 2);
        assert_eq!(reloaded.total_calories(), 770);
        assert_eq!(reloaded.remaining(), 1230);
    }

    #[test_context(CalorieTestContext)]
    #[test]
    fn test_remove_entry(_ctx: &mut CalorieTestContext) {
        let mut log = CalorieLog::read().unwrap();
        let first = log.add("Toast", 200, MealType::Breakfast);
        let second = log.add("Coffee", 50, MealType::Snack);

        assert!(log.remove(first));
        assert!(!log.remove(999));
        assert_eq!(log.entries.len(), 1);
        assert_eq!(log.entries[0].id, second);

        // Ids are not reused after removal
        let third = log.add("Apple", 80, MealType::Snack);
        assert!(third > second);
    }

    #[test_context(CalorieTestContext)]
    #[test]
    fn test_goal_and_saturation(_ctx: &mut CalorieTestContext) {
        let mut log = CalorieLog::read().unwrap();
        log.set_goal(500);
        log.add("Burger", 800, MealType::Dinner);

        assert_eq!(log.daily_goal, 500);
        // Exceeding the goal clamps remaining at zero instead of underflowing
        assert_eq!(log.remaining(), 0);
    }
}
