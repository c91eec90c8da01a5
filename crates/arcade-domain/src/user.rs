//! Login credential records. Authentication itself lives outside this crate;
//! only the stored account shape is modeled here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{Identifiable, Role};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: Uuid,
    pub username: String,
    /// Opaque hash produced by the external auth layer.
    pub password_hash: String,
    pub role: Role,
}

impl UserAccount {
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>, role: Role) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            password_hash: password_hash.into(),
            role,
        }
    }
}

impl Identifiable for UserAccount {
    fn id(&self) -> Uuid {
        self.id
    }
}
