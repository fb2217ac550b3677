use fake::Fake;
use fake::faker::company::en::CompanyName;
use fake::faker::lorem::en::Word;
use rand::Rng;

use shopseed_core::{CATEGORIES, EntityKind, Product, SUPPLIER_POOL_SIZE, format_id, round2};

use super::pick;

const PRICE_RANGE: (f64, f64) = (100.0, 50_000.0);
const COST_RATIO_RANGE: (f64, f64) = (0.6, 0.85);
const STOCK_RANGE: (u32, u32) = (10, 500);

/// Generate `count` products with ids `PROD0001..`.
///
/// Cost is derived from the price, so `cost <= price` holds by
/// construction.
pub fn generate_products(count: usize, rng: &mut impl Rng) -> Vec<Product> {
    (1..=count as u64)
        .map(|index| {
            let (category, sub_categories) = pick(CATEGORIES, rng);
            let sub_category = pick(sub_categories, rng);
            let price = round2(rng.random_range(PRICE_RANGE.0..=PRICE_RANGE.1));
            let cost = round2(price * rng.random_range(COST_RATIO_RANGE.0..=COST_RATIO_RANGE.1));
            let word: String = Word().fake_with_rng(rng);
            let brand: String = CompanyName().fake_with_rng(rng);

            Product {
                product_id: format_id(EntityKind::Product, index),
                product_name: capitalize(&word),
                category: category.to_string(),
                sub_category: sub_category.to_string(),
                price,
                cost,
                brand,
                stock_quantity: rng.random_range(STOCK_RANGE.0..=STOCK_RANGE.1),
                supplier_id: format!("SUP{:03}", rng.random_range(1..=SUPPLIER_POOL_SIZE)),
            }
        })
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use shopseed_core::sub_categories;

    use super::*;
    use crate::generators::stream_rng;

    #[test]
    fn prices_and_costs_respect_margin() {
        for product in generate_products(500, &mut stream_rng(3, "products")) {
            assert!(product.price >= PRICE_RANGE.0 && product.price <= PRICE_RANGE.1);
            assert!(product.has_valid_margin(), "{product:?}");
            assert!(product.cost >= round2(product.price * COST_RATIO_RANGE.0) - 0.01);
            assert!(product.cost <= round2(product.price * COST_RATIO_RANGE.1) + 0.01);
            assert_eq!(round2(product.price), product.price);
        }
    }

    #[test]
    fn sub_category_belongs_to_category() {
        for product in generate_products(200, &mut stream_rng(4, "products")) {
            let subs = sub_categories(&product.category).expect("known category");
            assert!(subs.contains(&product.sub_category.as_str()));
        }
    }

    #[test]
    fn suppliers_and_stock_come_from_fixed_ranges() {
        for product in generate_products(200, &mut stream_rng(6, "products")) {
            let supplier: u32 = product.supplier_id["SUP".len()..]
                .parse()
                .expect("numeric supplier");
            assert!((1..=SUPPLIER_POOL_SIZE).contains(&supplier));
            assert_eq!(product.supplier_id.len(), 6);
            assert!((STOCK_RANGE.0..=STOCK_RANGE.1).contains(&product.stock_quantity));
        }
    }

    #[test]
    fn capitalizes_names() {
        assert_eq!(capitalize("lamp"), "Lamp");
        assert_eq!(capitalize(""), "");
    }
}
