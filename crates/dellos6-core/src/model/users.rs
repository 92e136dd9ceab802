use serde::{Deserialize, Serialize};

/// A local user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Privilege level, 1 when the configuration omits it.
    pub level: u8,
    /// Password hash as stored in the configuration.
    pub password: String,
    pub sshkeys: Vec<String>,
}

impl Default for User {
    fn default() -> Self {
        Self {
            level: 1,
            password: String::new(),
            sshkeys: Vec::new(),
        }
    }
}
