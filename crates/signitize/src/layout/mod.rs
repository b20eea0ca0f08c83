//! Layout calculation modules for signitizing
//!
//! This module holds the page-ordering core, independent of PDF:
//! - Volume splitting and blank padding
//! - Signature (folio) chunking
//! - Print pair sequencing with a run-wide flip state

mod sequence;
mod signature;
mod types;
mod volume;

pub use sequence::*;
pub use signature::*;
pub use types::*;
pub use volume::*;
