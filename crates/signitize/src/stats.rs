use crate::impose::ImpositionPlan;
use crate::types::*;

/// Calculate statistics for a planned run
pub fn calculate_statistics(plan: &ImpositionPlan) -> SignitizeStatistics {
    let blank_pages_added = plan.volumes.iter().map(|v| v.volume.blanks_added).sum();
    let dropped_pages = plan
        .volumes
        .iter()
        .flat_map(|v| v.signatures.iter())
        .filter(|s| s.dropped.is_some())
        .count();
    let pairs = plan.pairs().count();

    // Each pair is one printed side; two sides make a sheet
    let output_pages = pairs * 2;
    let sheets = pairs.div_ceil(2);

    SignitizeStatistics {
        source_pages: plan.source_pages,
        volumes: plan.volumes.len(),
        signatures: plan.signature_count(),
        blank_pages_added,
        dropped_pages,
        output_pages,
        sheets,
    }
}
