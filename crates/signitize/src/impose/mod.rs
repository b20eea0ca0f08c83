//! Signitizing - reordering pages for signature bookbinding
//!
//! This module orchestrates a run:
//! 1. Load and unlock the source document
//! 2. Split into volumes and signatures, sequence the print pairs
//! 3. Route pairs into output streams
//! 4. Write each stream as a PDF file

mod io;
mod plan;
mod router;
mod writer;

pub use io::{PageSource, ensure_output_dir, load_pdf, unlock};
pub use plan::{ImpositionPlan, SignaturePlan, VolumePlan, build_plan};
pub use router::{PageSink, StreamKey, output_file_name, route};
pub use writer::PdfFileSink;

use crate::options::SignitizeOptions;
use crate::stats::calculate_statistics;
use crate::types::*;
use lopdf::Document;

/// Main signitize function
///
/// Writes the imposed files into `options.output_dir` and reports what was
/// written. Nothing is created on disk unless the plan is valid. Files
/// already written are left in place if a later one fails.
pub async fn signitize(document: &Document, options: &SignitizeOptions) -> Result<SignitizeReport> {
    let plan = plan_document(document, options)?;
    ensure_output_dir(&options.output_dir).await?;

    let document = document.clone();
    let options = options.clone();

    tokio::task::spawn_blocking(move || signitize_sync(&document, &options, &plan)).await?
}

/// Build the print plan for a loaded document without writing anything
pub fn plan_document(document: &Document, options: &SignitizeOptions) -> Result<ImpositionPlan> {
    let source = PageSource::new(document)?;
    build_plan(source.len(), options)
}

fn signitize_sync(
    document: &Document,
    options: &SignitizeOptions,
    plan: &ImpositionPlan,
) -> Result<SignitizeReport> {
    let source = PageSource::new(document)?;
    let statistics = calculate_statistics(plan);

    let mut sink = PdfFileSink::new(&source, &options.output_dir, options.basename());
    route(plan, options.output_mode, &mut sink)?;

    Ok(SignitizeReport {
        files: sink.into_written(),
        statistics,
    })
}
