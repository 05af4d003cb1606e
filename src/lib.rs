//! Crewplan - Team Capacity Planning Service
//!
//! This crate turns time-boxed iterations, member rosters and per-member
//! attendance inputs into deterministic, auditable capacity numbers.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
