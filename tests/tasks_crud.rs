#[cfg(test)]
mod tests {
    use chrono::Local;
    use doable::db::tasks::Tasks;
    use doable::db::users::{User, Users};
    use doable::libs::task::{Task, TaskFilter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TaskTestContext { _temp_dir: temp_dir }
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

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_crud(_ctx: &mut TaskTestContext) {
        let user_id = create_user("crud");
        let mut tasks = Tasks::new().unwrap();

        // Create task
        let task = Task::new(user_id, "Write report", "Quarterly numbers", None, Some(Local::now().date_naive()));
        let task_id = tasks.insert(&task).unwrap();
        assert!(task_id > 0);

        // Read task
        let fetched = tasks.get(user_id, task_id).unwrap().unwrap();
        assert_eq!(fetched.title, "Write report");
        assert_eq!(fetched.description, "Quarterly numbers");
        assert!(!fetched.completed);

        // Update task
        let mut task = fetched;
        task.title = "Write annual report".to_string();
        tasks.update(&task).unwrap();
        let updated = tasks.get(user_id, task_id).unwrap().unwrap();
        assert_eq!(updated.title, "Write annual report");

        // Delete task
        assert_eq!(tasks.delete(user_id, task_id).unwrap(), 1);
        assert!(tasks.get(user_id, task_id).unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_toggle_completion(_ctx: &mut TaskTestContext) {
        let user_id = create_user("toggle");
        let mut tasks = Tasks::new().unwrap();

        let task = Task::new(user_id, "Buy milk", "", None, None);
        let task_id = tasks.insert(&task).unwrap();

        // Toggle marks the task completed
        let toggled = tasks.toggle(user_id, task_id).unwrap().unwrap();
        assert!(toggled.completed);
        assert!(tasks.get(user_id, task_id).unwrap().unwrap().completed);

        // Toggling again restores the original state
        let toggled = tasks.toggle(user_id, task_id).unwrap().unwrap();
        assert!(!toggled.completed);
        assert!(!tasks.get(user_id, task_id).unwrap().unwrap().completed);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_toggle_moves_between_partitions(_ctx: &mut TaskTestContext) {
        let user_id = create_user("partition_move");
        let mut tasks = Tasks::new().unwrap();

        let task_id = tasks.insert(&Task::new(user_id, "Ship release", "", None, None)).unwrap();

        let active = tasks.fetch(user_id, &TaskFilter::Active { search: None }).unwrap();
        assert!(active.iter().any(|t| t.id == Some(task_id)));
        assert!(tasks.fetch(user_id, &TaskFilter::Completed).unwrap().is_empty());

        tasks.toggle(user_id, task_id).unwrap();

        let active = tasks.fetch(user_id, &TaskFilter::Active { search: None }).unwrap();
        assert!(active.iter().all(|t| t.id != Some(task_id)));
        let completed = tasks.fetch(user_id, &TaskFilter::Completed).unwrap();
        assert!(completed.iter().any(|t| t.id == Some(task_id)));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_missing_task(_ctx: &mut TaskTestContext) {
        let user_id = create_user("delete_missing");
        let mut tasks = Tasks::new().unwrap();

        assert_eq!(tasks.delete(user_id, 424242).unwrap(), 0);
        assert!(tasks.toggle(user_id, 424242).unwrap().is_none());
    }
}
