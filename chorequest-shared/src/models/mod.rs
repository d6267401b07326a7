/// Database models
///
/// Each module pairs a row struct with its SQL operations:
///
/// - `user`: user accounts
/// - `chore_list`: chore lists and ownership
/// - `chore_list_share`: per-user list shares and permissions
/// - `chore`: chores, assignment and recurrence state
/// - `notification`: per-user notifications
/// - `password_reset_token`: single-use reset tokens
///
/// Write operations take `impl PgExecutor` so they run equally against the
/// pool or inside a transaction; multi-query reads take the pool directly.

pub mod chore;
pub mod chore_list;
pub mod chore_list_share;
pub mod notification;
pub mod password_reset_token;
pub mod user;
