//! Range-to-CIDR summarization.
//!
//! Turns a family's surviving address ranges back into the minimal sorted
//! list of canonical CIDR blocks. Overlapping, adjacent, and duplicate
//! ranges are coalesced first, then each maximal range is decomposed with
//! the greedy power-of-two alignment rule: the next block is the largest
//! one whose base is sufficiently aligned and that does not overshoot the
//! range end. Coalescing first makes the result independent of input order.

use ipnet::{Ipv4Net, Ipv6Net};
use std::net::{Ipv4Addr, Ipv6Addr};

use crate::ranges::AddrRange;

/// Summarize IPv4 ranges into a minimal sorted list of canonical blocks.
pub fn summarize_v4(ranges: Vec<AddrRange>) -> Vec<Ipv4Net> {
    split_all(ranges, 32)
        .into_iter()
        .map(|(base, len)| {
            // len is at most 32 by construction in split_range.
            Ipv4Net::new(Ipv4Addr::from(base as u32), len).expect("valid prefix length")
        })
        .collect()
}

/// Summarize IPv6 ranges into a minimal sorted list of canonical blocks.
pub fn summarize_v6(ranges: Vec<AddrRange>) -> Vec<Ipv6Net> {
    split_all(ranges, 128)
        .into_iter()
        .map(|(base, len)| {
            Ipv6Net::new(Ipv6Addr::from(base), len).expect("valid prefix length")
        })
        .collect()
}

/// Coalesce, then decompose every maximal range into `(base, prefix_len)`
/// blocks. Blocks come out disjoint and ascending by base address.
fn split_all(ranges: Vec<AddrRange>, width: u32) -> Vec<(u128, u8)> {
    let mut blocks = Vec::new();
    for range in coalesce(ranges) {
        split_range(range, width, &mut blocks);
    }
    blocks
}

/// Merge overlapping and adjacent ranges into disjoint maximal ranges,
/// sorted ascending. Duplicates collapse as a side effect.
fn coalesce(mut ranges: Vec<AddrRange>) -> Vec<AddrRange> {
    ranges.sort_unstable();
    let mut merged: Vec<AddrRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            // saturating_add: a range ending at the top of the space is
            // adjacent to nothing above it but must still absorb overlaps.
            Some(last) if range.start <= last.end.saturating_add(1) => {
                last.end = last.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }
    merged
}

/// Greedy decomposition of one inclusive range into canonical blocks.
///
/// At each step the block size is limited by two things: the alignment of
/// the current start (trailing zero bits, capped at the family width) and
/// the number of addresses left. Taking the minimum of both yields the
/// provably smallest block count for a single range.
fn split_range(range: AddrRange, width: u32, blocks: &mut Vec<(u128, u8)>) {
    let mut start = range.start;
    loop {
        let align = start.trailing_zeros().min(width);
        let span = range.end - start;
        // Largest n with 2^n - 1 <= span. The whole-IPv6-space span has no
        // representable span + 1, so it is pinned to the full width.
        let fit = if span == u128::MAX {
            128
        } else {
            127 - (span + 1).leading_zeros()
        };
        let host_bits = align.min(fit);

        blocks.push((start, (width - host_bits) as u8));

        let block_end = if host_bits == 128 {
            u128::MAX
        } else {
            start + ((1u128 << host_bits) - 1)
        };
        if block_end >= range.end {
            break;
        }
        start = block_end + 1;
    }
}
