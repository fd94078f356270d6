#![warn(clippy::all, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::new_without_default,
    clippy::return_self_not_must_use
)]

pub mod attestation;
pub mod cli;
pub mod config;
pub mod error;
pub mod evidence;
pub mod oracle;
pub mod ui;

pub use attestation::{Attestation, ScoreTier, Skill};
pub use config::WalletConfig;
pub use error::{OracleError, Result, WalletError};
pub use evidence::{EvidenceKind, EvidenceSource};
pub use oracle::AttestationOracle;
