//! Parsing of free-form IP/CIDR list text.
//!
//! Input is a comma- and/or whitespace-separated list of tokens. Each token
//! is either a CIDR (`10.0.0.0/24`, `2001:db8::/32`) or a bare address,
//! which becomes a full-length /32 or /128 prefix. Non-canonical CIDRs
//! (host bits set) are normalized by masking, never rejected.

use ipnet::IpNet;
use std::net::IpAddr;

use crate::error::CalcError;

/// Parse a comma/whitespace-separated list of IPs and CIDRs.
///
/// Returns prefixes in input order, canonicalized. The first invalid token
/// aborts the whole call; no partial results are returned. Empty input
/// (after trimming) yields an empty list.
///
/// # Examples
/// ```
/// use wgips::parser::parse_ip_list;
/// let nets = parse_ip_list("10.0.0.1, 192.168.0.0/24").unwrap();
/// assert_eq!(nets[0].to_string(), "10.0.0.1/32");
/// assert_eq!(nets[1].to_string(), "192.168.0.0/24");
/// assert!(parse_ip_list("10.0.0.999").is_err());
/// ```
pub fn parse_ip_list(text: &str) -> Result<Vec<IpNet>, CalcError> {
    text.trim()
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect()
}

/// Parse a single IP or CIDR token into a canonical prefix.
fn parse_token(token: &str) -> Result<IpNet, CalcError> {
    if token.contains('/') {
        let net: IpNet = token.parse().map_err(|e| parse_error(token, e))?;
        // Mask off host bits so the base address is canonical.
        Ok(net.trunc())
    } else {
        let ip: IpAddr = token.parse().map_err(|e| parse_error(token, e))?;
        Ok(IpNet::from(ip))
    }
}

fn parse_error(token: &str, reason: impl std::fmt::Display) -> CalcError {
    CalcError::Parse {
        token: token.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_ipv4() {
        let nets = parse_ip_list("10.0.0.1").unwrap();
        assert_eq!(nets.len(), 1);
        assert_eq!(nets[0].to_string(), "10.0.0.1/32");
    }

    #[test]
    fn test_parse_single_ipv6() {
        let nets = parse_ip_list("2001:db8::1").unwrap();
        assert_eq!(nets.len(), 1);
        assert_eq!(nets[0].to_string(), "2001:db8::1/128");
    }

    #[test]
    fn test_parse_cidr() {
        let nets = parse_ip_list("10.0.0.0/24").unwrap();
        assert_eq!(nets.len(), 1);
        assert_eq!(nets[0].to_string(), "10.0.0.0/24");
    }

    #[test]
    fn test_parse_non_canonical_cidr_is_masked() {
        let nets = parse_ip_list("10.0.0.77/24").unwrap();
        assert_eq!(nets[0].to_string(), "10.0.0.0/24");
    }

    #[test]
    fn test_parse_mixed_separators() {
        let nets = parse_ip_list("10.0.0.0/8,  192.168.1.1\n::/0").unwrap();
        assert_eq!(nets.len(), 3);
        assert_eq!(nets[2].to_string(), "::/0");
    }

    #[test]
    fn test_parse_preserves_input_order() {
        let nets = parse_ip_list("192.168.0.0/16 10.0.0.0/8").unwrap();
        assert_eq!(nets[0].to_string(), "192.168.0.0/16");
        assert_eq!(nets[1].to_string(), "10.0.0.0/8");
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_ip_list("").unwrap().is_empty());
        assert!(parse_ip_list("  \n\t ").unwrap().is_empty());
        assert!(parse_ip_list(", ,,").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_ip_fails() {
        let err = parse_ip_list("10.0.0.999").unwrap_err();
        match err {
            CalcError::Parse { token, .. } => assert_eq!(token, "10.0.0.999"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_prefix_length_out_of_range_fails() {
        assert!(parse_ip_list("10.0.0.0/33").is_err());
        assert!(parse_ip_list("2001:db8::/129").is_err());
    }

    #[test]
    fn test_parse_fails_atomically() {
        // A bad token anywhere invalidates the whole call.
        let result = parse_ip_list("10.0.0.1, not-an-ip, 192.168.0.0/24");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_error_names_token() {
        let err = parse_ip_list("0.0.0.0/0, junk").unwrap_err();
        assert!(err.to_string().contains("'junk'"));
    }

    #[test]
    fn test_parse_zero_prefix() {
        let nets = parse_ip_list("0.0.0.0/0, ::/0").unwrap();
        assert_eq!(nets[0].to_string(), "0.0.0.0/0");
        assert_eq!(nets[1].to_string(), "::/0");
    }
}
