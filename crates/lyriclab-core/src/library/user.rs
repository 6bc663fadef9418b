use serde::{Deserialize, Serialize};

use super::ids::UserId;

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub picture: Option<String>,
}
