#[cfg(test)]
mod tests {
    use doable::db::tags::{Tag, Tags};
    use doable::db::tasks::Tasks;
    use doable::db::users::{User, Users};
    use doable::libs::task::{Task, TaskFilter};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TagTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TagTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TagTestContext { _temp_dir: temp_dir }
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

    #[test_context(TagTestContext)]
    #[test]
    fn test_tag_crud(_ctx: &mut TagTestContext) {
        let user_id = create_user("tag_crud");
        let mut tags = Tags::new().unwrap();

        // Create tag
        let tag_id = tags.create(&Tag::new(user_id, "urgent".to_string())).unwrap();
        assert!(tag_id > 0);

        // Read tag
        let fetched = tags.get(user_id, tag_id).unwrap().unwrap();
        assert_eq!(fetched.name, "urgent");

        // Rename tag
        tags.update(user_id, tag_id, "critical").unwrap();
        assert_eq!(tags.get(user_id, tag_id).unwrap().unwrap().name, "critical");

        // Delete tag
        assert_eq!(tags.delete(user_id, tag_id).unwrap(), 1);
        assert!(tags.get(user_id, tag_id).unwrap().is_none());
    }

    #[test_context(TagTestContext)]
    #[test]
    fn test_duplicate_tag_names(_ctx: &mut TagTestContext) {
        let user_id = create_user("tag_dup");
        let mut tags = Tags::new().unwrap();

        // The same name twice produces two distinct tags
        let first = tags.create(&Tag::new(user_id, "home".to_string())).unwrap();
        let second = tags.create(&Tag::new(user_id, "home".to_string())).unwrap();
        assert_ne!(first, second);

        let names: Vec<String> = tags.list(user_id).unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names.iter().filter(|n| *n == "home").count(), 2);
    }

    #[test_context(TagTestContext)]
    #[test]
    fn test_delete_tag_cascades_to_tasks(_ctx: &mut TagTestContext) {
        let user_id = create_user("tag_cascade");
        let mut tags = Tags::new().unwrap();
        let mut tasks = Tasks::new().unwrap();

        let tag_id = tags.create(&Tag::new(user_id, "work".to_string())).unwrap();
        let tagged = tasks.insert(&Task::new(user_id, "Write report", "", Some(tag_id), None)).unwrap();
        let untagged = tasks.insert(&Task::new(user_id, "Buy milk", "", None, None)).unwrap();

        tags.delete(user_id, tag_id).unwrap();

        // The tagged task went with its tag; the untagged one survives
        assert!(tasks.get(user_id, tagged).unwrap().is_none());
        assert!(tasks.get(user_id, untagged).unwrap().is_some());
    }

    #[test_context(TagTestContext)]
    #[test]
    fn test_first_tags_limit(_ctx: &mut TagTestContext) {
        let user_id = create_user("tag_first");
        let mut tags = Tags::new().unwrap();

        for name in ["alpha", "beta", "gamma"] {
            tags.create(&Tag::new(user_id, name.to_string())).unwrap();
        }

        let first = tags.first(user_id, 2).unwrap();
        assert_eq!(first.len(), 2);
        assert_eq!(tags.count(user_id).unwrap(), 3);
    }

    #[test_context(TagTestContext)]
    #[test]
    fn test_by_tag_filter(_ctx: &mut TagTestContext) {
        let user_id = create_user("tag_filter");
        let mut tags = Tags::new().unwrap();
        let mut tasks = Tasks::new().unwrap();

        let work = tags.create(&Tag::new(user_id, "work".to_string())).unwrap();
        let home = tags.create(&Tag::new(user_id, "home".to_string())).unwrap();

        let report = tasks.insert(&Task::new(user_id, "Write report", "", Some(work), None)).unwrap();
        tasks.insert(&Task::new(user_id, "Mow lawn", "", Some(home), None)).unwrap();

        let work_tasks = tasks.fetch(user_id, &TaskFilter::ByTag(work)).unwrap();
        assert_eq!(work_tasks.len(), 1);
        assert_eq!(work_tasks[0].id, Some(report));

        // Completing the task removes it from the tag view
        tasks.toggle(user_id, report).unwrap();
        assert!(tasks.fetch(user_id, &TaskFilter::ByTag(work)).unwrap().is_empty());
    }
}
