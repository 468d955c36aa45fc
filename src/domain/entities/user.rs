use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::entities::collection::Collection;

/// Declared for the `user` collection; no endpoint reads or writes it yet.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub address: String,

    #[validate(range(min = 0, max = 120, message = "Age must be between 0 and 120"))]
    #[serde(default)]
    pub age: Option<i32>,

    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl Collection for User {
    const NAME: &'static str = "user";
}

/// Returns true, used for serde default.
pub(crate) fn default_true() -> bool {
    true
}
