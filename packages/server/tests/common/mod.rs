// Common test utilities
#![allow(dead_code)]

pub mod harness;
pub mod browser;
pub mod linkedin_stub;

pub use harness::*;
#[allow(unused_imports)]
pub use browser::*;
pub use linkedin_stub::*;
