//! Adapters - Infrastructure implementations of the ports.

pub mod http;
pub mod postgres;
