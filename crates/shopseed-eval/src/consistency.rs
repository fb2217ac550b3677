use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use shopseed_core::{Dataset, EntityKind, round2};

const MONEY_TOLERANCE: f64 = 1e-6;

/// Economic and identity checks that go beyond foreign keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    /// Transactions whose total differs from the sum of their line totals.
    pub total_mismatches: u64,
    /// Items whose line total does not follow the discount formula.
    pub line_total_mismatches: u64,
    /// Products with a cost outside `[0, price]` or a non-positive price.
    pub margin_violations: u64,
    /// Ids that do not follow the entity's sequential format.
    pub malformed_ids: u64,
    /// Ids that appear more than once within their collection.
    pub duplicate_ids: u64,
}

impl ConsistencyReport {
    pub fn is_clean(&self) -> bool {
        *self == Self::default()
    }
}

pub fn check_consistency(dataset: &Dataset) -> ConsistencyReport {
    let mut report = ConsistencyReport::default();

    let mut sums: HashMap<&str, f64> = HashMap::new();
    for item in &dataset.items {
        *sums.entry(item.transaction_id.as_str()).or_insert(0.0) += item.line_total;
        if (item.expected_line_total() - item.line_total).abs() > MONEY_TOLERANCE {
            report.line_total_mismatches += 1;
        }
    }
    for txn in &dataset.transactions {
        let expected = round2(sums.get(txn.transaction_id.as_str()).copied().unwrap_or(0.0));
        if (expected - txn.total_amount).abs() > MONEY_TOLERANCE {
            report.total_mismatches += 1;
        }
    }

    report.margin_violations = dataset
        .products
        .iter()
        .filter(|product| product.price <= 0.0 || !product.has_valid_margin())
        .count() as u64;

    let id_sets: [(EntityKind, Vec<&str>); 4] = [
        (
            EntityKind::Customer,
            dataset.customers.iter().map(|c| c.customer_id.as_str()).collect(),
        ),
        (
            EntityKind::Product,
            dataset.products.iter().map(|p| p.product_id.as_str()).collect(),
        ),
        (
            EntityKind::Transaction,
            dataset
                .transactions
                .iter()
                .map(|t| t.transaction_id.as_str())
                .collect(),
        ),
        (
            EntityKind::TransactionItem,
            dataset.items.iter().map(|i| i.item_id.as_str()).collect(),
        ),
    ];
    for (kind, ids) in &id_sets {
        let mut seen = HashSet::with_capacity(ids.len());
        for id in ids {
            if kind.parse_sequence(id).is_none() {
                report.malformed_ids += 1;
            }
            if !seen.insert(*id) {
                report.duplicate_ids += 1;
            }
        }
    }

    report
}
