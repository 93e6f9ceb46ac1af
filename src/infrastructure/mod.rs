//! Gateway implementations.

pub mod in_memory;
