//! Ordinal extraction and ordering of layout keys.

use std::cmp::Ordering;

use crate::item::LayoutItem;

/// Ordinal encoded in `key`: the segment after the first `separator`, read as
/// its leading decimal digits (`item-12` and `item-12b` both give 12).
///
/// Returns `None` when the key has no separator, the segment does not start
/// with a digit, or the number overflows.
pub fn ordinal_of(key: &str, separator: &str) -> Option<u64> {
    let segment = key.split(separator).nth(1)?;
    let end = segment
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(segment.len());
    segment[..end].parse().ok()
}

/// Three-way comparison of two items by key ordinal.
///
/// Keys must be well-formed for a meaningful order. A malformed key is logged
/// and orders before every well-formed key, which keeps the comparison a
/// total order that sorting can rely on.
pub fn compare_by_ordinal(a: &LayoutItem, b: &LayoutItem, separator: &str) -> Ordering {
    ordinal_or_warn(&a.key, separator).cmp(&ordinal_or_warn(&b.key, separator))
}

/// Stable-sort `items` ascending by key ordinal.
pub fn sort_by_ordinal(items: &mut [LayoutItem], separator: &str) {
    items.sort_by_cached_key(|item| ordinal_or_warn(&item.key, separator));
}

fn ordinal_or_warn(key: &str, separator: &str) -> Option<u64> {
    let ordinal = ordinal_of(key, separator);
    if ordinal.is_none() {
        tracing::warn!(key, separator, "layout key has no numeric ordinal");
    }
    ordinal
}
