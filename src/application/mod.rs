//! Application layer - command and query handlers.
//!
//! One handler per operation, holding its port collaborators behind
//! `Arc<dyn Trait>`. Handlers orchestrate; computation lives in the
//! domain layer.

pub mod handlers;
