#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use doable::db::tasks::Tasks;
    use doable::db::users::{User, Users};
    use doable::libs::task::{Task, TaskFilter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct PartitionTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for PartitionTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            PartitionTestContext { _temp_dir: temp_dir }
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

    #[test_context(PartitionTestContext)]
    #[test]
    fn test_today_and_overdue_membership(_ctx: &mut PartitionTestContext) {
        let user_id = create_user("membership");
        let mut tasks = Tasks::new().unwrap();

        let today = Local::now().date_naive();
        let due_today = tasks.insert(&Task::new(user_id, "Due today", "", None, Some(today))).unwrap();
        let overdue = tasks.insert(&Task::new(user_id, "Was due yesterday", "", None, Some(today - Duration::days(1)))).unwrap();
        let upcoming = tasks.insert(&Task::new(user_id, "Due tomorrow", "", None, Some(today + Duration::days(1)))).unwrap();

        let today_ids: Vec<i64> = tasks.fetch(user_id, &TaskFilter::Today).unwrap().iter().filter_map(|t| t.id).collect();
        assert_eq!(today_ids, vec![due_today]);

        let overdue_ids: Vec<i64> = tasks.fetch(user_id, &TaskFilter::Overdue).unwrap().iter().filter_map(|t| t.id).collect();
        assert_eq!(overdue_ids, vec![overdue]);

        // All three are active regardless of date
        let active_ids: Vec<i64> = tasks
            .fetch(user_id, &TaskFilter::Active { search: None })
            .unwrap()
            .iter()
            .filter_map(|t| t.id)
            .collect();
        assert!(active_ids.contains(&due_today));
        assert!(active_ids.contains(&overdue));
        assert!(active_ids.contains(&upcoming));
    }

    #[test_context(PartitionTestContext)]
    #[test]
    fn test_dateless_task_never_today_or_overdue(_ctx: &mut PartitionTestContext) {
        let user_id = create_user("dateless");
        let mut tasks = Tasks::new().unwrap();

        let task_id = tasks.insert(&Task::new(user_id, "Someday", "", None, None)).unwrap();

        assert!(tasks.fetch(user_id, &TaskFilter::Today).unwrap().is_empty());
        assert!(tasks.fetch(user_id, &TaskFilter::Overdue).unwrap().is_empty());

        let active = tasks.fetch(user_id, &TaskFilter::Active { search: None }).unwrap();
        assert!(active.iter().any(|t| t.id == Some(task_id)));

        // Once completed it shows up in the completed partition
        tasks.toggle(user_id, task_id).unwrap();
        let completed = tasks.fetch(user_id, &TaskFilter::Completed).unwrap();
        assert!(completed.iter().any(|t| t.id == Some(task_id)));
    }

    #[test_context(PartitionTestContext)]
    #[test]
    fn test_completed_tasks_leave_date_partitions(_ctx: &mut PartitionTestContext) {
        let user_id = create_user("completed_dates");
        let mut tasks = Tasks::new().unwrap();

        let today = Local::now().date_naive();
        let task_id = tasks.insert(&Task::new(user_id, "Due today", "", None, Some(today))).unwrap();

        assert_eq!(tasks.fetch(user_id, &TaskFilter::Today).unwrap().len(), 1);

        tasks.toggle(user_id, task_id).unwrap();

        // Completion removes it from the date partitions even though the
        // date still matches
        assert!(tasks.fetch(user_id, &TaskFilter::Today).unwrap().is_empty());
        assert_eq!(tasks.count(user_id, &TaskFilter::Completed).unwrap(), 1);
    }

    #[test_context(PartitionTestContext)]
    #[test]
    fn test_search_matches_title_and_description(_ctx: &mut PartitionTestContext) {
        let user_id = create_user("search");
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new(user_id, "Write report", "Quarterly numbers", None, None)).unwrap();
        tasks.insert(&Task::new(user_id, "Buy milk", "For the report party", None, None)).unwrap();
        tasks.insert(&Task::new(user_id, "Mow lawn", "", None, None)).unwrap();

        let hits = tasks
            .fetch(
                user_id,
                &TaskFilter::Active {
                    search: Some("report".to_string()),
                },
            )
            .unwrap();
        assert_eq!(hits.len(), 2);

        let hits = tasks
            .fetch(
                user_id,
                &TaskFilter::Active {
                    search: Some("lawn".to_string()),
                },
            )
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Mow lawn");

        let hits = tasks
            .fetch(
                user_id,
                &TaskFilter::Active {
                    search: Some("nomatch".to_string()),
                },
            )
            .unwrap();
        assert!(hits.is_empty());
    }

    #[test_context(PartitionTestContext)]
    #[test]
    fn test_search_treats_wildcards_literally(_ctx: &mut PartitionTestContext) {
        let user_id = create_user("wildcards");
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new(user_id, "Discount 100%", "", None, None)).unwrap();
        tasks.insert(&Task::new(user_id, "Progress 100x", "", None, None)).unwrap();
        tasks.insert(&Task::new(user_id, "under_score", "", None, None)).unwrap();

        // "%" must not act as a LIKE wildcard
        let hits = tasks
            .fetch(
                user_id,
                &TaskFilter::Active {
                    search: Some("100%".to_string()),
                },
            )
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Discount 100%");

        // "_" must not match an arbitrary character
        let hits = tasks
            .fetch(
                user_id,
                &TaskFilter::Active {
                    search: Some("r_s".to_string()),
                },
            )
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "under_score");
    }

    #[test_context(PartitionTestContext)]
    #[test]
    fn test_store_order_preserved(_ctx: &mut PartitionTestContext) {
        let user_id = create_user("order");
        let mut tasks = Tasks::new().unwrap();

        let first = tasks.insert(&Task::new(user_id, "First", "", None, None)).unwrap();
        let second = tasks.insert(&Task::new(user_id, "Second", "", None, None)).unwrap();
        let third = tasks.insert(&Task::new(user_id, "Third", "", None, None)).unwrap();

        let ids: Vec<i64> = tasks
            .fetch(user_id, &TaskFilter::Active { search: None })
            .unwrap()
            .iter()
            .filter_map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![first, second, third]);
    }
}
