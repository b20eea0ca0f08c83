//! Layout data types for signitizing
//!
//! These are the values that flow between the volume splitter, the
//! signature chunker and the pair sequencer. None of them know anything
//! about PDF objects; pages are identified by index only.

/// Handle to one page of the imposed output
///
/// The engine never looks inside a page. A source page is just its
/// position in the document, and every filler page refers to the same
/// synthesized blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageRef {
    /// 0-based index into the source document's page list
    Source(usize),
    /// The synthesized blank filler page
    Blank,
}

impl PageRef {
    pub fn is_blank(self) -> bool {
        matches!(self, PageRef::Blank)
    }

    /// 1-based page number of a source page
    pub fn page_number(self) -> Option<usize> {
        match self {
            PageRef::Source(idx) => Some(idx + 1),
            PageRef::Blank => None,
        }
    }
}

/// Two pages written back to back, in print order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePair {
    pub first: PageRef,
    pub second: PageRef,
}

impl PagePair {
    pub fn new(first: PageRef, second: PageRef) -> Self {
        Self { first, second }
    }
}

/// Alternation flag deciding the orientation of each emitted pair
///
/// One value is carried through an entire run. It must not be reset
/// between signatures or volumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FlipState(bool);

impl FlipState {
    pub fn new() -> Self {
        Self(false)
    }

    /// Flip the flag and return the new value
    pub fn toggle(&mut self) -> bool {
        self.0 = !self.0;
        self.0
    }

    pub fn is_flipped(self) -> bool {
        self.0
    }
}

/// One bound book cut from a contiguous range of the source document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Volume {
    /// 1-based volume number
    pub index: usize,
    /// First source page in this volume (1-based, inclusive)
    pub first_page: usize,
    /// Last source page in this volume (1-based, inclusive)
    pub last_page: usize,
    /// Source pages followed by blank padding; length is a multiple of 4
    pub pages: Vec<PageRef>,
    /// Number of blanks appended to reach a multiple of 4
    pub blanks_added: usize,
}

impl Volume {
    /// Number of source pages, not counting padding
    pub fn source_len(&self) -> usize {
        self.last_page + 1 - self.first_page
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
