//! Error types for wgips.

use thiserror::Error;

/// Errors produced by the calculation core.
///
/// These are the only two failure modes: bad input text, or no allowed
/// input at all. Range subtraction and summarization are total functions
/// over valid prefixes and cannot fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// A token in the input is not a valid IP address or CIDR.
    #[error("Invalid IP/CIDR '{token}': {reason}")]
    Parse { token: String, reason: String },

    /// The allowed-IPs field is empty or whitespace-only.
    #[error("Allowed IPs field is empty")]
    EmptyAllowed,
}
