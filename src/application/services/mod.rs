pub mod ranking;
mod recovery_service;

pub use recovery_service::{RecoveryError, RecoveryService};
