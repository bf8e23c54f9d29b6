//! # SIP Core
//!
//! Domain layer shared by the calculator, to-do and auth apps.
//! Pure logic and port traits only; every implementation that touches the
//! filesystem or process state lives in `sip-infra`.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
