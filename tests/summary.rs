#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use doable::db::tags::{Tag, Tags};
    use doable::db::tasks::Tasks;
    use doable::db::users::{User, Users};
    use doable::libs::summary::Summary;
    use doable::libs::task::Task;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SummaryTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for SummaryTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            SummaryTestContext { _temp_dir: temp_dir }
        }
    }

    fn create_user(name: &str) -> i64 {
        let mut users = Users::new().unwrap();
        let user = User {
            id: None,
            username: format!("{}_{}", name, std::process::id()),
            password_hash: "hash".to_string(),
            email: None,
            first_name: None,
            last_name: None,
        };
        users.create(&user).unwrap()
    }

    #[test_context(SummaryTestContext)]
    #[test]
    fn test_summary_counters(_ctx: &mut SummaryTestContext) {
        let user_id = create_user("summary");
        let mut tags = Tags::new().unwrap();
        let mut tasks = Tasks::new().unwrap();

        for name in ["work", "home", "errands"] {
            tags.create(&Tag::new(user_id, name.to_string())).unwrap();
        }

        let today = Local::now().date_naive();
        tasks.insert(&Task::new(user_id, "Due today", "", None, Some(today))).unwrap();
        tasks.insert(&Task::new(user_id, "Overdue", "", None, Some(today - Duration::days(2)))).unwrap();
        let done_id = tasks.insert(&Task::new(user_id, "Someday", "", None, None)).unwrap();

        let summary = Summary::fetch(user_id).unwrap();
        assert_eq!(summary.first_tags.len(), 2);
        assert_eq!(summary.active_tasks, 3);
        assert_eq!(summary.completed_tasks, 0);
        assert_eq!(summary.today_tasks, 1);
        assert_eq!(summary.overdue_tasks, 1);

        // Completing a task shifts the counters on the next fetch
        tasks.toggle(user_id, done_id).unwrap();
        let summary = Summary::fetch(user_id).unwrap();
        assert_eq!(summary.active_tasks, 2);
        assert_eq!(summary.completed_tasks, 1);
    }

    #[test_context(SummaryTestContext)]
    #[test]
    fn test_summary_scoped_to_user(_ctx: &mut SummaryTestContext) {
        let alice = create_user("summary_alice");
        let bob = create_user("summary_bob");
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new(alice, "Alice's task", "", None, None)).unwrap();

        let summary = Summary::fetch(bob).unwrap();
        assert_eq!(summary.active_tasks, 0);
        assert!(summary.first_tags.is_empty());
    }
}
