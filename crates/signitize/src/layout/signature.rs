//! Signature chunking
//!
//! A volume is cut into signatures (folios) of `leaves * 4` pages. Every
//! signature but the last is full size; the last one takes whatever is
//! left. Only the volume total is padded, so the last signature is not
//! necessarily a multiple of 4.

use crate::constants::PAGES_PER_LEAF;
use crate::types::{Result, SignitizeError};

use super::PageRef;

/// Pages in a signature built from `leaves` folded sheets
pub fn signature_size(leaves: usize) -> usize {
    leaves * PAGES_PER_LEAF
}

/// Split a volume's pages into consecutive signatures.
///
/// Concatenating the returned slices reproduces `pages` exactly.
pub fn chunk_signatures(pages: &[PageRef], signature_size: usize) -> Result<Vec<&[PageRef]>> {
    if signature_size == 0 {
        return Err(SignitizeError::Usage(
            "signature size must be at least 1 page".to_string(),
        ));
    }
    Ok(pages.chunks(signature_size).collect())
}

// =============================================================================
// Tests
// =============================================================================
