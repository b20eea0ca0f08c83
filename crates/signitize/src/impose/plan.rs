//! Imposition planning
//!
//! Runs the layout stages in order and records every signature's print
//! pairs. The plan is pure data; writing it out is the router's job.

use crate::layout::{
    FlipState, PagePair, PageRef, Volume, chunk_signatures, dropped_middle, sequence_signature,
    split_volumes,
};
use crate::options::SignitizeOptions;
use crate::types::*;

/// Print order for a whole run
#[derive(Debug, Clone, PartialEq)]
pub struct ImpositionPlan {
    /// Source pages in the document
    pub source_pages: usize,
    pub volumes: Vec<VolumePlan>,
}

/// A volume and the signatures cut from it
#[derive(Debug, Clone, PartialEq)]
pub struct VolumePlan {
    pub volume: Volume,
    pub signatures: Vec<SignaturePlan>,
}

/// One signature and the pairs it prints as
#[derive(Debug, Clone, PartialEq)]
pub struct SignaturePlan {
    /// 1-based, restarting at 1 in every volume
    pub index: usize,
    pub pages: Vec<PageRef>,
    pub pairs: Vec<PagePair>,
    /// Middle page left out of an odd-length signature
    pub dropped: Option<PageRef>,
}

impl ImpositionPlan {
    /// All pairs in print order, across every volume and signature
    pub fn pairs(&self) -> impl Iterator<Item = &PagePair> {
        self.volumes
            .iter()
            .flat_map(|v| v.signatures.iter())
            .flat_map(|s| s.pairs.iter())
    }

    pub fn signature_count(&self) -> usize {
        self.volumes.iter().map(|v| v.signatures.len()).sum()
    }
}

/// Build the print plan for a document of `num_pages` pages.
pub fn build_plan(num_pages: usize, options: &SignitizeOptions) -> Result<ImpositionPlan> {
    options.validate()?;

    let volumes = split_volumes(num_pages, &options.split_pages)?;
    let signature_size = options.signature_size();

    // One flip state for the entire run
    let mut flip = FlipState::new();
    let mut planned = Vec::with_capacity(volumes.len());

    for volume in volumes {
        let mut signatures = Vec::new();
        for (i, pages) in chunk_signatures(&volume.pages, signature_size)?
            .into_iter()
            .enumerate()
        {
            log::debug!(
                "volume {} signature {}: {} pages",
                volume.index,
                i + 1,
                pages.len()
            );
            let pairs = sequence_signature(pages, &mut flip);
            signatures.push(SignaturePlan {
                index: i + 1,
                pages: pages.to_vec(),
                pairs,
                dropped: dropped_middle(pages),
            });
        }
        planned.push(VolumePlan { volume, signatures });
    }

    Ok(ImpositionPlan {
        source_pages: num_pages,
        volumes: planned,
    })
}
