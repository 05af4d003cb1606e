//! Domain layer - pure capacity-planning model.
//!
//! No I/O happens here. Everything is a value object, an aggregate, or a
//! pure function over rows supplied by the persistence layer.

pub mod capacity;
pub mod foundation;
pub mod team;
