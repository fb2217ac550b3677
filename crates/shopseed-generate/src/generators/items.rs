use std::collections::HashMap;

use rand::Rng;
use rand::seq::index;

use shopseed_core::{
    Discount, EntityKind, Product, Transaction, TransactionItem, format_id, line_total, round2,
};

use super::pick;

const MAX_ITEMS_PER_TRANSACTION: usize = 5;
const MAX_QUANTITY: u32 = 4;

/// Generate line items for every transaction, then back-fill totals.
///
/// Each transaction receives 1 to 5 distinct products (never more than
/// the catalog holds). Item ids come from one counter across the run.
/// With no products or no transactions the result is empty and totals are
/// left untouched.
pub fn generate_transaction_items(
    transactions: &mut [Transaction],
    products: &[Product],
    rng: &mut impl Rng,
) -> Vec<TransactionItem> {
    if products.is_empty() {
        return Vec::new();
    }

    let mut items = Vec::with_capacity(transactions.len() * 3);
    let mut next_item = 1_u64;

    for txn in transactions.iter() {
        let max_items = MAX_ITEMS_PER_TRANSACTION.min(products.len());
        let item_count = rng.random_range(1..=max_items);

        for product_index in index::sample(rng, products.len(), item_count) {
            let product = &products[product_index];
            let quantity = rng.random_range(1..=MAX_QUANTITY);
            let discount: Discount = pick(&Discount::ALL, rng);

            items.push(TransactionItem {
                item_id: format_id(EntityKind::TransactionItem, next_item),
                transaction_id: txn.transaction_id.clone(),
                product_id: product.product_id.clone(),
                quantity,
                unit_price: product.price,
                discount_percentage: discount,
                line_total: line_total(quantity, product.price, discount.percentage()),
            });
            next_item += 1;
        }
    }

    backfill_totals(transactions, &items);
    items
}

/// Write `round2(sum of line totals)` into each transaction, matched by id.
///
/// Builds the id lookup once and sums in a single pass over `items`.
/// Transactions without items keep their current total. Returns the number
/// of items whose transaction id matched nothing.
pub fn backfill_totals(transactions: &mut [Transaction], items: &[TransactionItem]) -> usize {
    let mut sums: Vec<Option<f64>> = vec![None; transactions.len()];
    let mut unmatched = 0;

    {
        let by_id: HashMap<&str, usize> = transactions
            .iter()
            .enumerate()
            .map(|(position, txn)| (txn.transaction_id.as_str(), position))
            .collect();

        for item in items {
            match by_id.get(item.transaction_id.as_str()) {
                Some(&position) => *sums[position].get_or_insert(0.0) += item.line_total,
                None => unmatched += 1,
            }
        }
    }

    for (txn, sum) in transactions.iter_mut().zip(sums) {
        if let Some(sum) = sum {
            txn.total_amount = round2(sum);
        }
    }

    unmatched
}
