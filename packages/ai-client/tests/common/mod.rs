// Common test utilities
#![allow(dead_code)]

pub mod provider_stub;

pub use provider_stub::*;
