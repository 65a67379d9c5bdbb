//! Typed endpoint catalog for BTSE

pub mod agent;

pub use agent::Agent;
