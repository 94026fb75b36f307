#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskNotFound,

    // === TAG MESSAGES ===
    TagNotFound,

    // === FORM VALIDATION MESSAGES ===
    FieldRequired(String),
    FieldTooLong(String, usize),
    InvalidDate(String),
    TagNotSelectable,
    InvalidTagChoice(String),
    PasswordMismatch,
    UsernameTaken(String),

    // === AUTH MESSAGES ===
    InvalidCredentials,
    LoggedOut,
    RegistrationSuccessful(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptHost,
    PromptPort,

    // === SERVER MESSAGES ===
    ServerStarting(String),
    ServerStopped,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseUpToDate,
    DatabaseVersion(u32),
    NothingToRollback,
    RollingBack(u32, u32),
    RollbackCompleted(u32),
}
