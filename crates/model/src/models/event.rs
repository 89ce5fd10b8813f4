use serde::{Deserialize, Serialize};

/// A wrestling show. `date` is kept exactly as the server sends it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub promotion: String,
    pub date: String,
}
