#[cfg(test)]
mod tests {
    use doable::db::users::{User, Users};
    use doable::web::auth::{hash_password, verify_password};
    use doable::web::session::SessionStore;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct AuthTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for AuthTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            AuthTestContext { _temp_dir: temp_dir }
        }
    }

    #[test]
    fn test_password_hash_and_verify() {
        let hash = hash_password("correct horse battery staple").unwrap();
        assert_ne!(hash, "correct horse battery staple");

        assert!(verify_password("correct horse battery staple", &hash));
        assert!(!verify_password("wrong password", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("secret").unwrap();
        let second = hash_password("secret").unwrap();
        assert_ne!(first, second);
        assert!(verify_password("secret", &first));
        assert!(verify_password("secret", &second));
    }

    #[test]
    fn test_malformed_hash_is_a_mismatch() {
        assert!(!verify_password("secret", "not a phc string"));
        assert!(!verify_password("secret", ""));
    }

    #[test]
    fn test_session_store_lifecycle() {
        let store = SessionStore::new();

        let token = store.create(7, "alex");
        let user = store.resolve(&token).unwrap();
        assert_eq!(user.id, 7);
        assert_eq!(user.username, "alex");

        store.revoke(&token);
        assert!(store.resolve(&token).is_none());

        // Revoking twice is harmless
        store.revoke(&token);
    }

    #[test]
    fn test_session_tokens_are_unique() {
        let store = SessionStore::new();
        let first = store.create(1, "alex");
        let second = store.create(1, "alex");
        assert_ne!(first, second);

        // Both sessions resolve independently
        assert!(store.resolve(&first).is_some());
        assert!(store.resolve(&second).is_some());
    }

    #[test_context(AuthTestContext)]
    #[test]
    fn test_stored_credentials_round_trip(_ctx: &mut AuthTestContext) {
        let mut users = Users::new().unwrap();
        let username = format!("login_{}", std::process::id());

        let user = User {
            id: None,
            username: username.clone(),
            password_hash: hash_password("secret").unwrap(),
            email: Some("alex@example.com".to_string()),
            first_name: None,
            last_name: None,
        };
        users.create(&user).unwrap();

        let stored = users.get_by_username(&username).unwrap().unwrap();
        assert!(verify_password("secret", &stored.password_hash));
        assert!(!verify_password("guess", &stored.password_hash));
    }
}
