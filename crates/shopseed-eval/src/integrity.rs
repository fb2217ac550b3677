use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize, Serializer};
use tracing::warn;

use shopseed_core::{Customer, Dataset, Product, Transaction, TransactionItem, round2};

/// How orphan counts are folded into a quality score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringPolicy {
    /// 100 without violations, a flat 80 otherwise.
    #[default]
    Binary,
    /// `100 * (1 - violations / checked_records)`, clamped to `[0, 100]`.
    Proportional,
}

/// Orphaned references found in a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OrphanRecords {
    pub orphan_customers: u64,
    pub orphan_products: u64,
    pub orphan_transactions: u64,
}

impl OrphanRecords {
    pub fn total(&self) -> u64 {
        self.orphan_customers + self.orphan_products + self.orphan_transactions
    }
}

/// Data quality score in `[0, 100]`.
///
/// Serializes as an integer when it has no fractional part.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, JsonSchema)]
pub struct QualityScore(pub f64);

impl QualityScore {
    pub const PERFECT: QualityScore = QualityScore(100.0);
    pub const DEGRADED: QualityScore = QualityScore(80.0);

    pub fn value(self) -> f64 {
        self.0
    }

    /// Plain JSON number for the score.
    pub fn to_portable(self) -> serde_json::Value {
        let value = round2(self.0);
        if value.fract() == 0.0 && value >= 0.0 {
            serde_json::Value::from(value as u64)
        } else {
            serde_json::Value::from(value)
        }
    }
}

impl Serialize for QualityScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_portable().serialize(serializer)
    }
}

/// Referential integrity report for the four collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct IntegrityReport {
    pub orphan_records: OrphanRecords,
    pub data_quality_score: QualityScore,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.orphan_records.total() == 0
    }
}

/// Check that every transaction and item reference resolves.
///
/// Orphaned item transaction references are added into
/// `orphan_transactions` together with transactions that point at unknown
/// customers. Customers carry no reference, so `orphan_customers` stays 0.
pub fn validate_referential_integrity(
    customers: &[Customer],
    products: &[Product],
    transactions: &[Transaction],
    items: &[TransactionItem],
    policy: ScoringPolicy,
) -> IntegrityReport {
    let customer_ids: HashSet<&str> = customers.iter().map(|c| c.customer_id.as_str()).collect();
    let product_ids: HashSet<&str> = products.iter().map(|p| p.product_id.as_str()).collect();
    let transaction_ids: HashSet<&str> = transactions
        .iter()
        .map(|t| t.transaction_id.as_str())
        .collect();

    let mut orphans = OrphanRecords::default();

    orphans.orphan_transactions = transactions
        .iter()
        .filter(|txn| !customer_ids.contains(txn.customer_id.as_str()))
        .count() as u64;
    orphans.orphan_products = items
        .iter()
        .filter(|item| !product_ids.contains(item.product_id.as_str()))
        .count() as u64;
    orphans.orphan_transactions += items
        .iter()
        .filter(|item| !transaction_ids.contains(item.transaction_id.as_str()))
        .count() as u64;

    let checked = (transactions.len() + items.len()) as u64;
    let score = score(&orphans, checked, policy);

    if orphans.total() > 0 {
        warn!(
            orphan_products = orphans.orphan_products,
            orphan_transactions = orphans.orphan_transactions,
            score = score.value(),
            "referential integrity violations detected"
        );
    }

    IntegrityReport {
        orphan_records: orphans,
        data_quality_score: score,
    }
}

/// Convenience form of [`validate_referential_integrity`] over a [`Dataset`].
pub fn validate_dataset(dataset: &Dataset, policy: ScoringPolicy) -> IntegrityReport {
    validate_referential_integrity(
        &dataset.customers,
        &dataset.products,
        &dataset.transactions,
        &dataset.items,
        policy,
    )
}

fn score(orphans: &OrphanRecords, checked: u64, policy: ScoringPolicy) -> QualityScore {
    let violations = orphans.total();
    match policy {
        ScoringPolicy::Binary => {
            if violations == 0 {
                QualityScore::PERFECT
            } else {
                QualityScore::DEGRADED
            }
        }
        ScoringPolicy::Proportional => {
            if checked == 0 {
                return QualityScore::PERFECT;
            }
            let ratio = violations as f64 / checked as f64;
            QualityScore(round2((100.0 * (1.0 - ratio)).clamp(0.0, 100.0)))
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use shopseed_core::{AgeGroup, Discount, PaymentMethod};

    use super::*;

    fn customer(id: &str) -> Customer {
        Customer {
            customer_id: id.to_string(),
            first_name: "Asha".to_string(),
            last_name: "Rao".to_string(),
            email: "user1@example.com".to_string(),
            phone: "9876543210".to_string(),
            registration_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap_or_default(),
            city: "Pune".to_string(),
            state: "Maharashtra".to_string(),
            country: "India".to_string(),
            age_group: AgeGroup::From26To35,
        }
    }

    fn product(id: &str) -> Product {
        Product {
            product_id: id.to_string(),
            product_name: "Lamp".to_string(),
            category: "Home & Kitchen".to_string(),
            sub_category: "Furniture".to_string(),
            price: 1000.0,
            cost: 700.0,
            brand: "Acme".to_string(),
            stock_quantity: 10,
            supplier_id: "SUP001".to_string(),
        }
    }

    fn transaction(id: &str, customer_id: &str) -> Transaction {
        Transaction {
            transaction_id: id.to_string(),
            customer_id: customer_id.to_string(),
            transaction_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap_or_default(),
            transaction_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap_or_default(),
            payment_method: PaymentMethod::Upi,
            shipping_address: "1 MG Road, Pune".to_string(),
            total_amount: 1000.0,
        }
    }

    fn item(id: &str, transaction_id: &str, product_id: &str) -> TransactionItem {
        TransactionItem {
            item_id: id.to_string(),
            transaction_id: transaction_id.to_string(),
            product_id: product_id.to_string(),
            quantity: 1,
            unit_price: 1000.0,
            discount_percentage: Discount::None,
            line_total: 1000.0,
        }
    }

    #[test]
    fn clean_dataset_scores_perfect() {
        let report = validate_referential_integrity(
            &[customer("CUST0001")],
            &[product("PROD0001")],
            &[transaction("TXN00001", "CUST0001")],
            &[item("ITEM00001", "TXN00001", "PROD0001")],
            ScoringPolicy::Binary,
        );

        assert!(report.is_clean());
        assert_eq!(report.data_quality_score, QualityScore::PERFECT);
    }

    #[test]
    fn counts_each_orphan_kind() {
        let report = validate_referential_integrity(
            &[customer("CUST0001")],
            &[product("PROD0001")],
            &[
                transaction("TXN00001", "CUST0001"),
                transaction("TXN00002", "CUST0099"),
            ],
            &[
                item("ITEM00001", "TXN00001", "PROD0001"),
                item("ITEM00002", "TXN00001", "PROD0404"),
                item("ITEM00003", "TXN00404", "PROD0001"),
            ],
            ScoringPolicy::Binary,
        );

        assert_eq!(report.orphan_records.orphan_customers, 0);
        assert_eq!(report.orphan_records.orphan_products, 1);
        assert_eq!(report.orphan_records.orphan_transactions, 2);
        assert_eq!(report.data_quality_score, QualityScore::DEGRADED);
    }

    #[test]
    fn binary_score_ignores_magnitude() {
        let items: Vec<_> = (1..=20)
            .map(|i| item(&format!("ITEM{i:05}"), "TXN00001", "PROD0404"))
            .collect();
        let report = validate_referential_integrity(
            &[customer("CUST0001")],
            &[product("PROD0001")],
            &[transaction("TXN00001", "CUST0001")],
            &items,
            ScoringPolicy::Binary,
        );

        assert_eq!(report.orphan_records.orphan_products, 20);
        assert_eq!(report.data_quality_score, QualityScore::DEGRADED);
    }

    #[test]
    fn proportional_score_tracks_violation_rate() {
        let report = validate_referential_integrity(
            &[customer("CUST0001")],
            &[product("PROD0001")],
            &[transaction("TXN00001", "CUST0001")],
            &[
                item("ITEM00001", "TXN00001", "PROD0001"),
                item("ITEM00002", "TXN00001", "PROD0001"),
                item("ITEM00003", "TXN00001", "PROD0404"),
            ],
            ScoringPolicy::Proportional,
        );

        assert_eq!(report.data_quality_score, QualityScore(75.0));
    }

    #[test]
    fn proportional_score_is_perfect_without_records() {
        let report = validate_referential_integrity(&[], &[], &[], &[], ScoringPolicy::Proportional);
        assert_eq!(report.data_quality_score, QualityScore::PERFECT);
    }

    #[test]
    fn score_serializes_as_plain_number() {
        assert_eq!(
            serde_json::to_value(QualityScore::PERFECT).expect("serialize score"),
            serde_json::json!(100)
        );
        assert_eq!(
            serde_json::to_value(QualityScore(66.666)).expect("serialize score"),
            serde_json::json!(66.67)
        );
    }
}
