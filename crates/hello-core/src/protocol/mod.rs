//! Response payloads served over HTTP.

pub mod greeting;

pub use greeting::{Greeting, HELLO_WORLD};
