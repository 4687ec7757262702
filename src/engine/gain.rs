//! Attribute discriminative power.
//!
//! "Gain" here is the Shannon entropy of an attribute's yes/no split
//! across the live (non-rejected) items. It is a proxy for how well a
//! question divides the candidates, not information gain against a target.

use rustc_hash::FxHashMap;

use crate::core::SessionState;
use crate::items::{Item, ItemDatabase};

/// `+1` if the item has the attribute set to true, `-1` otherwise.
///
/// A missing key and an explicit `false` both map to `-1`.
#[inline]
#[must_use]
pub fn attribute_value(item: &Item, attr: &str) -> i8 {
    if item.is_set(attr) {
        1
    } else {
        -1
    }
}

/// Items not rejected in this session, in database order.
pub fn live_items<'a>(
    db: &'a ItemDatabase,
    session: &'a SessionState,
) -> impl Iterator<Item = &'a Item> + 'a {
    db.iter().filter(move |item| !session.is_rejected(&item.title))
}

/// Entropy (bits) of the attribute's value distribution over live items.
///
/// Returns 0 when no items are live or every live item has the same value.
#[must_use]
pub fn information_gain(db: &ItemDatabase, session: &SessionState, attr: &str) -> f64 {
    let mut counts: FxHashMap<i8, usize> = FxHashMap::default();
    let mut total = 0usize;

    for item in live_items(db, session) {
        *counts.entry(attribute_value(item, attr)).or_insert(0) += 1;
        total += 1;
    }

    if counts.len() < 2 {
        return 0.0;
    }

    counts
        .values()
        .map(|&count| {
            let p = count as f64 / total as f64;
            -p * p.log2()
        })
        .sum()
}
