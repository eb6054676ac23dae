// src/dedup.rs
//! Deduplication and ranking: the same customer found on several pages (or
//! several times on one page) collapses to its highest-confidence instance,
//! then the surviving set is sorted and capped.
//!
//! This stage must run once, globally, after all pages have been processed —
//! deduping per page would leave lower-confidence duplicates alive across
//! pages.

use std::collections::HashMap;

use crate::customer::ScoredCustomer;

/// Identity used to merge duplicate candidates: lowercased, trimmed name.
pub fn dedup_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Merge by [`dedup_key`], keeping the strictly-higher-confidence instance
/// (overwritten in place), then stable-sort descending by confidence and
/// truncate to `max_results`.
///
/// Returns the ranked survivors and the number of merged-away duplicates.
/// Empty input yields empty output.
pub fn dedupe_and_rank(
    customers: Vec<ScoredCustomer>,
    max_results: usize,
) -> (Vec<ScoredCustomer>, usize) {
    let input_len = customers.len();

    let mut index: HashMap<String, usize> = HashMap::with_capacity(input_len);
    let mut survivors: Vec<ScoredCustomer> = Vec::with_capacity(input_len);

    for customer in customers {
        let key = dedup_key(&customer.name);
        match index.get(&key) {
            None => {
                index.insert(key, survivors.len());
                survivors.push(customer);
            }
            Some(&slot) => {
                if customer.confidence > survivors[slot].confidence {
                    survivors[slot] = customer;
                }
            }
        }
    }

    let merged = input_len - survivors.len();

    // Stable: equal confidences keep their encounter order.
    survivors.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    survivors.truncate(max_results);

    (survivors, merged)
}
