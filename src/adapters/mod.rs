//! Adapter implementations of the port traits.

#[cfg(test)]
pub(crate) mod failing;
pub mod live;
pub mod sqlite;
