//! Inclusive address ranges and range subtraction.
//!
//! Prefixes are converted to inclusive `[start, end]` integer intervals so
//! that "allowed minus disallowed" becomes plain interval arithmetic. Both
//! families share one representation: `u128` is wide enough for IPv6 and
//! IPv4 endpoints are widened, while the caller keeps the families split
//! (ranges are only ever compared within one family).

use ipnet::{Ipv4Net, Ipv6Net};

/// An inclusive range of addresses, `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AddrRange {
    pub start: u128,
    pub end: u128,
}

impl AddrRange {
    pub fn new(start: u128, end: u128) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    /// Whether `addr` falls inside this range.
    pub fn contains(&self, addr: u128) -> bool {
        self.start <= addr && addr <= self.end
    }
}

impl From<Ipv4Net> for AddrRange {
    fn from(net: Ipv4Net) -> Self {
        Self::new(
            u32::from(net.network()) as u128,
            u32::from(net.broadcast()) as u128,
        )
    }
}

impl From<Ipv6Net> for AddrRange {
    fn from(net: Ipv6Net) -> Self {
        Self::new(u128::from(net.network()), u128::from(net.broadcast()))
    }
}

/// Convert a family's prefixes to inclusive ranges, element-wise.
///
/// No merging or sorting happens here; overlap and disorder are absorbed
/// later by the summarizer.
pub fn nets_to_ranges<N>(nets: &[N]) -> Vec<AddrRange>
where
    N: Copy,
    AddrRange: From<N>,
{
    nets.iter().map(|&n| AddrRange::from(n)).collect()
}

/// Subtract all `disallowed` ranges from `allowed` ranges.
///
/// Disallowed ranges are applied one at a time, each pass consuming the
/// output of the previous one. The result may be empty. Never fails:
/// endpoints derive from valid prefixes, so `d + 1` and `c - 1` below
/// cannot overflow where they are reached.
pub fn subtract(allowed: Vec<AddrRange>, disallowed: &[AddrRange]) -> Vec<AddrRange> {
    disallowed
        .iter()
        .fold(allowed, |surviving, &remove| subtract_one(&surviving, remove))
}

/// Remove one inclusive range `[c, d]` from every range in `ranges`.
///
/// For each surviving `[a, b]` exactly one of five cases applies, checked
/// in this order (later arms rely on earlier ones not matching):
/// no overlap, full cover, right part kept, left part kept, split in two.
fn subtract_one(ranges: &[AddrRange], remove: AddrRange) -> Vec<AddrRange> {
    let AddrRange { start: c, end: d } = remove;
    let mut result = Vec::with_capacity(ranges.len() + 1);

    for &AddrRange { start: a, end: b } in ranges {
        // No overlap
        if d < a || c > b {
            result.push(AddrRange::new(a, b));
            continue;
        }

        // Full cover: [c, d] swallows [a, b]
        if c <= a && d >= b {
            continue;
        }

        // c <= a <= d < b: keep right part
        if c <= a && d < b {
            result.push(AddrRange::new(d + 1, b));
            continue;
        }

        // a < c <= b <= d: keep left part
        if a < c && b <= d {
            result.push(AddrRange::new(a, c - 1));
            continue;
        }

        // a < c and d < b: removal is strictly inside, split
        result.push(AddrRange::new(a, c - 1));
        result.push(AddrRange::new(d + 1, b));
    }

    result
}
