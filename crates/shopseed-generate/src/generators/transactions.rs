use chrono::{Days, NaiveDate, NaiveTime};
use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, StateName, StreetName, ZipCode};
use rand::Rng;

use shopseed_core::{EntityKind, PaymentMethod, Transaction, format_id};

use super::pick;
use crate::errors::GenerationError;

/// Days covered by the transaction window.
pub const TRANSACTION_WINDOW_DAYS: u64 = 365;

const SECONDS_PER_DAY: u32 = 86_400;

/// Generate `count` transaction headers with ids `TXN00001..`.
///
/// Each header references a customer drawn uniformly from `customer_ids`.
/// `total_amount` starts at `0.0` and is filled in once the items exist.
pub fn generate_transactions(
    count: usize,
    customer_ids: &[String],
    window_start: NaiveDate,
    rng: &mut impl Rng,
) -> Result<Vec<Transaction>, GenerationError> {
    if count > 0 && customer_ids.is_empty() {
        return Err(GenerationError::EmptyParent {
            child: "transactions",
            parent: "customers",
        });
    }

    let transactions = (1..=count as u64)
        .map(|index| {
            let customer_id = customer_ids[rng.random_range(0..customer_ids.len())].clone();
            let offset = rng.random_range(0..TRANSACTION_WINDOW_DAYS);
            let transaction_date = window_start
                .checked_add_days(Days::new(offset))
                .unwrap_or(window_start);
            let transaction_time =
                NaiveTime::from_num_seconds_from_midnight_opt(rng.random_range(0..SECONDS_PER_DAY), 0)
                    .unwrap_or_default();

            Transaction {
                transaction_id: format_id(EntityKind::Transaction, index),
                customer_id,
                transaction_date,
                transaction_time,
                payment_method: pick(&PaymentMethod::ALL, rng),
                shipping_address: shipping_address(rng),
                total_amount: 0.0,
            }
        })
        .collect();

    Ok(transactions)
}

fn shipping_address(rng: &mut impl Rng) -> String {
    let building: String = BuildingNumber().fake_with_rng(rng);
    let street: String = StreetName().fake_with_rng(rng);
    let city: String = CityName().fake_with_rng(rng);
    let state: String = StateName().fake_with_rng(rng);
    let zip: String = ZipCode().fake_with_rng(rng);
    format!("{building} {street}, {city}, {state} {zip}")
}
