//! Storage contracts.

pub mod kv;
