use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::types::{AgeGroup, Discount, PaymentMethod};

/// Customer record. Field order is the `customers` table column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub registration_date: NaiveDate,
    pub city: String,
    pub state: String,
    pub country: String,
    pub age_group: AgeGroup,
}

impl Customer {
    pub const COLUMNS: &'static [&'static str] = &[
        "customer_id",
        "first_name",
        "last_name",
        "email",
        "phone",
        "registration_date",
        "city",
        "state",
        "country",
        "age_group",
    ];
}

/// Product record. Field order is the `products` table column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: String,
    pub product_name: String,
    pub category: String,
    pub sub_category: String,
    pub price: f64,
    pub cost: f64,
    pub brand: String,
    pub stock_quantity: u32,
    pub supplier_id: String,
}

impl Product {
    pub const COLUMNS: &'static [&'static str] = &[
        "product_id",
        "product_name",
        "category",
        "sub_category",
        "price",
        "cost",
        "brand",
        "stock_quantity",
        "supplier_id",
    ];

    /// True when `0 <= cost <= price`.
    pub fn has_valid_margin(&self) -> bool {
        self.cost >= 0.0 && self.cost <= self.price
    }
}

/// Transaction header. `total_amount` is back-filled from the items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub customer_id: String,
    pub transaction_date: NaiveDate,
    pub transaction_time: NaiveTime,
    pub payment_method: PaymentMethod,
    pub shipping_address: String,
    pub total_amount: f64,
}

impl Transaction {
    pub const COLUMNS: &'static [&'static str] = &[
        "transaction_id",
        "customer_id",
        "transaction_date",
        "transaction_time",
        "payment_method",
        "shipping_address",
        "total_amount",
    ];
}

/// Line item of a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionItem {
    pub item_id: String,
    pub transaction_id: String,
    pub product_id: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub discount_percentage: Discount,
    pub line_total: f64,
}

impl TransactionItem {
    pub const COLUMNS: &'static [&'static str] = &[
        "item_id",
        "transaction_id",
        "product_id",
        "quantity",
        "unit_price",
        "discount_percentage",
        "line_total",
    ];

    /// Line total recomputed from quantity, unit price and discount.
    pub fn expected_line_total(&self) -> f64 {
        crate::money::line_total(
            self.quantity,
            self.unit_price,
            self.discount_percentage.percentage(),
        )
    }
}

/// The four collections produced by one generation run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub customers: Vec<Customer>,
    pub products: Vec<Product>,
    pub transactions: Vec<Transaction>,
    pub items: Vec<TransactionItem>,
}

impl Dataset {
    pub fn total_records(&self) -> usize {
        self.customers.len() + self.products.len() + self.transactions.len() + self.items.len()
    }

    /// Items belonging to `transaction_id`, in generation order.
    pub fn items_for<'a>(
        &'a self,
        transaction_id: &'a str,
    ) -> impl Iterator<Item = &'a TransactionItem> + 'a {
        self.items
            .iter()
            .filter(move |item| item.transaction_id == transaction_id)
    }
}
