//! Top-level facade crate for hello-metrics.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use hello_core::*;
}

pub mod server {
    pub use hello_server::*;
}
