//! Output routing
//!
//! Decides which output stream each page of the plan goes to and when
//! streams are opened and closed. The sink behind the [`PageSink`] trait
//! does the actual writing.

use super::plan::ImpositionPlan;
use crate::constants::{INDEX_WIDTH, OUTPUT_SUFFIX};
use crate::layout::PageRef;
use crate::types::*;

/// Identifies one output stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct StreamKey {
    /// 1-based volume number, present when more than one volume is
    /// written to separate streams
    pub volume: Option<usize>,
    /// 1-based signature number within the volume, present when writing
    /// one stream per signature
    pub signature: Option<usize>,
}

/// Receiver of routed pages.
///
/// At most one stream is open at a time. Pages are only written between
/// `begin_stream` and `end_stream`.
pub trait PageSink {
    fn begin_stream(&mut self, key: StreamKey) -> Result<()>;
    fn write_page(&mut self, page: PageRef) -> Result<()>;
    fn end_stream(&mut self) -> Result<()>;
}

/// Write every pair of `plan` into `sink`, split into streams per `mode`.
pub fn route<S: PageSink + ?Sized>(
    plan: &ImpositionPlan,
    mode: OutputMode,
    sink: &mut S,
) -> Result<()> {
    let multi_volume = plan.volumes.len() > 1;

    if mode == OutputMode::Combined {
        sink.begin_stream(StreamKey::default())?;
    }

    for volume_plan in &plan.volumes {
        let volume = (multi_volume && mode != OutputMode::Combined)
            .then_some(volume_plan.volume.index);

        if mode == OutputMode::PerVolume {
            sink.begin_stream(StreamKey {
                volume,
                signature: None,
            })?;
        }

        for signature in &volume_plan.signatures {
            if mode == OutputMode::PerSignature {
                sink.begin_stream(StreamKey {
                    volume,
                    signature: Some(signature.index),
                })?;
            }

            for pair in &signature.pairs {
                sink.write_page(pair.first)?;
                sink.write_page(pair.second)?;
            }

            if mode == OutputMode::PerSignature {
                sink.end_stream()?;
            }
        }

        if mode == OutputMode::PerVolume {
            sink.end_stream()?;
        }
    }

    if mode == OutputMode::Combined {
        sink.end_stream()?;
    }

    Ok(())
}

/// File name for a stream: `<basename>-out[-VVV][-SSS].pdf`
pub fn output_file_name(basename: &str, key: StreamKey) -> String {
    let mut name = format!("{}{}", basename, OUTPUT_SUFFIX);
    if let Some(volume) = key.volume {
        name.push_str(&format!("-{:0width$}", volume, width = INDEX_WIDTH));
    }
    if let Some(signature) = key.signature {
        name.push_str(&format!("-{:0width$}", signature, width = INDEX_WIDTH));
    }
    name.push_str(".pdf");
    name
}

// =============================================================================
// Tests
// =============================================================================
