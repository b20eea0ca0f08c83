// Page ordering through the full split -> chunk -> sequence pipeline.
// Page numbers in comments are 1-based; PageRef indices are 0-based.

use signitize::impose::build_plan;
use signitize::layout::*;
use signitize::*;

fn src(page_number: usize) -> PageRef {
    PageRef::Source(page_number - 1)
}

fn pair(first: PageRef, second: PageRef) -> PagePair {
    PagePair::new(first, second)
}

/// Run the layout stages by hand with an arbitrary signature size
fn sequence_document(num_pages: usize, splits: &[usize], signature_size: usize) -> Vec<PagePair> {
    let volumes = split_volumes(num_pages, splits).unwrap();
    let mut flip = FlipState::new();
    let mut pairs = Vec::new();
    for volume in &volumes {
        for signature in chunk_signatures(&volume.pages, signature_size).unwrap() {
            pairs.extend(sequence_signature(signature, &mut flip));
        }
    }
    pairs
}

fn options(leaves: usize, splits: Vec<usize>) -> SignitizeOptions {
    SignitizeOptions {
        input_file: "book.pdf".into(),
        leaves_per_signature: leaves,
        split_pages: splits,
        ..Default::default()
    }
}

#[test]
fn test_eight_pages_single_leaf_signatures() {
    let pairs = sequence_document(8, &[], 4);
    assert_eq!(
        pairs,
        vec![
            pair(src(4), src(1)),
            pair(src(2), src(3)),
            pair(src(8), src(5)),
            pair(src(6), src(7)),
        ]
    );
}

#[test]
fn test_six_pages_padded_with_blanks() {
    let pairs = sequence_document(6, &[], 4);
    assert_eq!(
        pairs,
        vec![
            pair(src(4), src(1)),
            pair(src(2), src(3)),
            pair(PageRef::Blank, src(5)),
            pair(src(6), PageRef::Blank),
        ]
    );
}

#[test]
fn test_flip_continues_across_volumes() {
    // Volume 1: pages 1-6 -> 8 slots, one 8 page signature, 4 pairs.
    // Volume 2: pages 7-10 -> 4 slots, 2 pairs.
    let pairs = sequence_document(10, &[6], 8);
    assert_eq!(pairs.len(), 6);

    // Volume 2 starts with the flag back at false, so its first pair is flipped
    assert_eq!(pairs[4], pair(src(10), src(7)));
    assert_eq!(pairs[5], pair(src(8), src(9)));
}

#[test]
fn test_flip_parity_is_global() {
    // A 12 page signature emits 6 pairs; a 4 page signature 2 pairs. The
    // orientation of pair k depends only on k.
    let pairs = sequence_document(16, &[], 12);
    assert_eq!(pairs.len(), 8);
    for (k, p) in pairs.iter().enumerate() {
        let outer_first = p.first > p.second;
        assert_eq!(outer_first, k % 2 == 0, "pair {} {:?}", k, p);
    }
}

#[test]
fn test_build_plan_default_signature() {
    // 40 pages, 4 leaves -> 16 page signatures: 16 + 16 + 8
    let plan = build_plan(40, &options(4, Vec::new())).unwrap();
    assert_eq!(plan.volumes.len(), 1);

    let sigs = &plan.volumes[0].signatures;
    assert_eq!(sigs.len(), 3);
    assert_eq!(sigs[0].pages.len(), 16);
    assert_eq!(sigs[1].pages.len(), 16);
    assert_eq!(sigs[2].pages.len(), 8);
    assert!(sigs.iter().all(|s| s.dropped.is_none()));
    assert_eq!(plan.pairs().count(), 20);
}

#[test]
fn test_build_plan_signature_numbers_restart_per_volume() {
    let plan = build_plan(30, &options(2, vec![20])).unwrap();
    assert_eq!(plan.volumes.len(), 2);

    let first: Vec<usize> = plan.volumes[0].signatures.iter().map(|s| s.index).collect();
    let second: Vec<usize> = plan.volumes[1].signatures.iter().map(|s| s.index).collect();
    assert_eq!(first, vec![1, 2, 3]);
    assert_eq!(second, vec![1, 2]);
}

#[test]
fn test_build_plan_uses_every_page_once() {
    let plan = build_plan(37, &options(3, vec![11, 25])).unwrap();

    let mut seen: Vec<PageRef> = plan
        .pairs()
        .flat_map(|p| [p.first, p.second])
        .filter(|p| !p.is_blank())
        .collect();
    seen.sort();
    let expected: Vec<PageRef> = (0..37).map(PageRef::Source).collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_build_plan_matches_manual_pipeline() {
    let plan = build_plan(26, &options(2, vec![9])).unwrap();
    let planned: Vec<PagePair> = plan.pairs().copied().collect();
    assert_eq!(planned, sequence_document(26, &[9], 8));
}

#[test]
fn test_build_plan_rejects_bad_input() {
    assert!(matches!(
        build_plan(0, &options(4, Vec::new())),
        Err(SignitizeError::NoPages)
    ));
    assert!(matches!(
        build_plan(10, &options(1, Vec::new())),
        Err(SignitizeError::Usage(_))
    ));
    assert!(matches!(
        build_plan(10, &options(4, vec![12])),
        Err(SignitizeError::Usage(_))
    ));
}
