//! Command and query handlers, grouped by module.

pub mod capacity;
pub mod iteration;
pub mod team;

#[cfg(test)]
pub(crate) mod test_support;
