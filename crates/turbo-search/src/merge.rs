//! Rank-preserving merge of AI ranking and catalog detail.

use std::collections::HashMap;

/// Order `records` by `ranked`, dropping ranked keys with no record.
///
/// Output is `[record(k) for k in ranked if k has a record]`. A key ranked
/// twice appears twice; when several records share a key the first wins.
pub fn merge_ranked<'a, T, F>(ranked: &[&str], records: &'a [T], key: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    let mut by_key: HashMap<&str, &'a T> = HashMap::with_capacity(records.len());
    for record in records {
        by_key.entry(key(record)).or_insert(record);
    }

    ranked
        .iter()
        .filter_map(|sku| by_key.get(sku).copied())
        .collect()
}
