use serde::{Deserialize, Serialize};

/// Customer directory entry
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub address1: String,
    pub address2: String,
}
