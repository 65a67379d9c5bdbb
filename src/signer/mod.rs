//! Credentials, configuration and request signing for BTSE

pub mod config;
pub mod signer;
pub mod utils;

pub use config::{Config, Credentials};
pub use signer::{BtseSigner, SignedEnvelope};
pub use utils::*;
