//! Type definitions for the BTSE API

pub mod api;
pub mod constants;
pub mod market;
pub mod orders;

// Re-export commonly used types
pub use api::*;
pub use constants::*;
pub use market::*;
pub use orders::*;
