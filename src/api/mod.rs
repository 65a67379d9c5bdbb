//! REST dispatch for public and signed BTSE endpoints

pub mod client;
pub mod utils;

pub use client::ApiClient;
