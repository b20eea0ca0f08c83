//! Volume splitting
//!
//! A document can be bound as several books. Split points name the last
//! page of every volume except the final one, which always ends on the
//! last page of the document. Each volume is padded with blanks so its
//! length is a multiple of 4, whatever the signature size.

use crate::constants::VOLUME_PAGE_MULTIPLE;
use crate::types::{Result, SignitizeError};

use super::{PageRef, Volume};

/// Number of blank pages needed to round `len` up to a multiple of 4
pub fn padding_for(len: usize) -> usize {
    (VOLUME_PAGE_MULTIPLE - len % VOLUME_PAGE_MULTIPLE) % VOLUME_PAGE_MULTIPLE
}

/// Check split points against the document length.
///
/// Every point must lie in `1..=num_pages` and be strictly greater than the
/// one before it. A final point equal to `num_pages` is allowed and simply
/// restates the implicit end of the last volume.
pub fn validate_split_points(num_pages: usize, split_points: &[usize]) -> Result<()> {
    let mut previous = 0;
    for &point in split_points {
        if point == 0 || point > num_pages {
            return Err(SignitizeError::Usage(format!(
                "split page {} is outside the document (1..={})",
                point, num_pages
            )));
        }
        if point <= previous {
            return Err(SignitizeError::Usage(format!(
                "split page {} must be greater than the previous split page {}",
                point, previous
            )));
        }
        previous = point;
    }
    Ok(())
}

/// Partition `num_pages` source pages into padded volumes.
pub fn split_volumes(num_pages: usize, split_points: &[usize]) -> Result<Vec<Volume>> {
    if num_pages == 0 {
        return Err(SignitizeError::NoPages);
    }
    validate_split_points(num_pages, split_points)?;

    let mut ends: Vec<usize> = split_points.to_vec();
    if ends.last() != Some(&num_pages) {
        ends.push(num_pages);
    }

    let mut volumes = Vec::with_capacity(ends.len());
    let mut previous = 0;
    for (i, &last_page) in ends.iter().enumerate() {
        let first_page = previous + 1;
        let mut pages: Vec<PageRef> = (previous..last_page).map(PageRef::Source).collect();
        let blanks_added = padding_for(pages.len());
        pages.extend(std::iter::repeat_n(PageRef::Blank, blanks_added));

        log::debug!(
            "volume {}: pages {}..={} ({} blanks added, {} total)",
            i + 1,
            first_page,
            last_page,
            blanks_added,
            pages.len()
        );

        volumes.push(Volume {
            index: i + 1,
            first_page,
            last_page,
            pages,
            blanks_added,
        });
        previous = last_page;
    }

    Ok(volumes)
}

// =============================================================================
// Tests
// =============================================================================
