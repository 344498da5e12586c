use std::cmp::Ordering;

use crate::model::Listing;

/// Sorts listings descending by `rating*0.7 + reviews*0.3`.
///
/// The sort is stable and the comparator has no randomness, so ties keep
/// their first-seen (post-dedup) order and re-ranking a ranked list is a
/// no-op.
pub fn rank(listings: &mut [Listing]) {
    listings.sort_by(|a, b| {
        b.composite_score()
            .partial_cmp(&a.composite_score())
            .unwrap_or(Ordering::Equal)
    });
}
