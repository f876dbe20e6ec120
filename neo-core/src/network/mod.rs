//! Network payloads.

pub mod payloads;
