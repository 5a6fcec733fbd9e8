//! # wgips - WireGuard AllowedIPs Calculator
//!
//! Computes the minimal set of CIDR blocks representing "allowed minus
//! disallowed" address space, for use as a WireGuard peer's `AllowedIPs`
//! list. Mixed IPv4/IPv6 input is supported; each family is processed
//! independently and IPv4 blocks come first in the output.
//!
//! ## Features
//!
//! - **Exact Arithmetic** - Subtraction works on inclusive integer ranges,
//!   so any overlap, containment, or split case is handled exactly
//! - **Minimal Output** - Greedy power-of-two summarization plus
//!   adjacent-range coalescing yields the smallest possible block list
//! - **Overlap Tolerant** - Duplicate or overlapping input entries are
//!   absorbed, never an error
//! - **Pure Core** - No I/O, no logging, no shared state; every call is
//!   independent and safe to run in parallel
//!
//! ## Example Usage
//!
//! ```
//! use wgips::calc::calculate_allowed_ips;
//!
//! let line = calculate_allowed_ips("0.0.0.0/0", "192.0.2.0/24").unwrap();
//! assert!(line.starts_with("AllowedIPs = 0.0.0.0/1, 128.0.0.0/2"));
//! ```
//!
//! ## Modules
//!
//! - [`calc`] - High-level orchestration and output formatting
//! - [`cli`] - Command-line interface definitions
//! - [`error`] - The core's two error kinds
//! - [`parser`] - Free-form IP/CIDR list parsing
//! - [`ranges`] - Inclusive address ranges and range subtraction
//! - [`summarizer`] - Range-to-CIDR summarization

pub mod calc;
pub mod cli;
pub mod error;
pub mod parser;
pub mod ranges;
pub mod summarizer;

pub use calc::calculate_allowed_ips;
pub use cli::Cli;
pub use error::CalcError;
pub use parser::parse_ip_list;
