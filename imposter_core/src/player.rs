use serde::{Deserialize, Serialize};

pub type PlayerId = usize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(id: PlayerId) -> Self {
        Player {
            id,
            name: String::new(),
        }
    }

    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}
