//! High-level AllowedIPs calculation.
//!
//! Glues the parser, range engine, and summarizer into the single entry
//! point used by the CLI: parse both lists, split by IP version, subtract
//! and summarize per family, then format the WireGuard `AllowedIPs` line.

use ipnet::{IpNet, Ipv4Net, Ipv6Net};

use crate::error::CalcError;
use crate::parser::parse_ip_list;
use crate::ranges::{nets_to_ranges, subtract};
use crate::summarizer::{summarize_v4, summarize_v6};

/// Split mixed prefixes into IPv4 and IPv6 lists, preserving order.
pub fn split_by_version(nets: &[IpNet]) -> (Vec<Ipv4Net>, Vec<Ipv6Net>) {
    let mut v4 = Vec::new();
    let mut v6 = Vec::new();
    for net in nets {
        match net {
            IpNet::V4(n) => v4.push(*n),
            IpNet::V6(n) => v6.push(*n),
        }
    }
    (v4, v6)
}

/// Compute the final `AllowedIPs` line from raw user text.
///
/// Returns a single string of the form
/// `AllowedIPs = 0.0.0.0/5, 8.0.0.0/7, ..., ::/0`
/// with IPv4 blocks first, each family sorted ascending. If nothing
/// survives the subtraction the list after `= ` is empty.
///
/// Fails with [`CalcError::EmptyAllowed`] when `allowed_text` is blank and
/// with [`CalcError::Parse`] on the first invalid token in either list.
/// A blank `disallowed_text` means no exclusions.
///
/// # Examples
/// ```
/// use wgips::calc::calculate_allowed_ips;
/// let line = calculate_allowed_ips("0.0.0.0/0", "").unwrap();
/// assert_eq!(line, "AllowedIPs = 0.0.0.0/0");
/// ```
pub fn calculate_allowed_ips(
    allowed_text: &str,
    disallowed_text: &str,
) -> Result<String, CalcError> {
    if allowed_text.trim().is_empty() {
        return Err(CalcError::EmptyAllowed);
    }

    let allowed = parse_ip_list(allowed_text)?;
    let disallowed = if disallowed_text.trim().is_empty() {
        Vec::new()
    } else {
        parse_ip_list(disallowed_text)?
    };

    let (allowed_v4, allowed_v6) = split_by_version(&allowed);
    let (disallowed_v4, disallowed_v6) = split_by_version(&disallowed);

    let final_v4 = summarize_v4(subtract(
        nets_to_ranges(&allowed_v4),
        &nets_to_ranges(&disallowed_v4),
    ));
    let final_v6 = summarize_v6(subtract(
        nets_to_ranges(&allowed_v6),
        &nets_to_ranges(&disallowed_v6),
    ));

    let joined = final_v4
        .iter()
        .map(|n| n.to_string())
        .chain(final_v6.iter().map(|n| n.to_string()))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!("AllowedIPs = {joined}"))
}
