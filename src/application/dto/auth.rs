use crate::domain::user::UserId;
use chrono::{DateTime, Utc};

/// The signed-in user as resolved from the platform's access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: UserId,
    pub email: Option<String>,
    pub expires_at: DateTime<Utc>,
}
