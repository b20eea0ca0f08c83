//! Print pair sequencing
//!
//! Each signature is walked from both ends at once. Pair `j` joins page
//! `j` with page `n-1-j`, and the order inside the pair alternates with
//! every pair emitted:
//!
//! ```text
//! 4 page signature [1 2 3 4], flip starting false:
//!   pair 0  flip -> true   (4, 1)
//!   pair 1  flip -> false  (2, 3)
//! ```
//!
//! The flip state is shared by the whole run. A second signature picks up
//! where the first left off, so the parity of the printed sides stays
//! consistent across the book.
//!
//! When a signature has an odd number of pages, the middle page
//! `signature[n / 2]` is not paired and is left out of the output.

use super::{FlipState, PagePair, PageRef};

/// Produce the print pairs for one signature, advancing `flip` once per pair.
pub fn sequence_signature(signature: &[PageRef], flip: &mut FlipState) -> Vec<PagePair> {
    let n = signature.len();
    let mut pairs = Vec::with_capacity(n / 2);

    for j in 0..n / 2 {
        let outer = signature[n - 1 - j];
        let inner = signature[j];
        let pair = if flip.toggle() {
            PagePair::new(outer, inner)
        } else {
            PagePair::new(inner, outer)
        };
        log::debug!("pair {}: first {:?} second {:?}", j, pair.first, pair.second);
        pairs.push(pair);
    }

    if let Some(page) = dropped_middle(signature) {
        log::warn!(
            "signature of {} pages has no partner for its middle page {:?}; it is left out",
            n,
            page
        );
    }

    pairs
}

/// The page skipped by [`sequence_signature`] for an odd-length signature
pub fn dropped_middle(signature: &[PageRef]) -> Option<PageRef> {
    if signature.len() % 2 == 1 {
        Some(signature[signature.len() / 2])
    } else {
        None
    }
}

// =============================================================================
// Tests
// =============================================================================
