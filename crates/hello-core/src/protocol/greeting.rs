//! Greeting payload: `{"message": "Hello, World!"}`.

use serde::{Deserialize, Serialize};

/// Fixed greeting text.
pub const HELLO_WORLD: &str = "Hello, World!";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

impl Greeting {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn hello_world() -> Self {
        Self::new(HELLO_WORLD)
    }
}

impl Default for Greeting {
    fn default() -> Self {
        Self::hello_world()
    }
}
