//! Adapters between the outside world and the domain: JSON parameter input
//! and tabular payload output.

pub mod csv;
pub mod json;
