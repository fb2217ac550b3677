use std::fmt;

use crate::entities::{Customer, Product, Transaction, TransactionItem};

/// Entities with sequential, zero-padded identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Customer,
    Product,
    Transaction,
    TransactionItem,
}

impl EntityKind {
    /// Entities in generation and load order.
    pub const ALL: [EntityKind; 4] = [
        EntityKind::Customer,
        EntityKind::Product,
        EntityKind::Transaction,
        EntityKind::TransactionItem,
    ];

    pub fn prefix(self) -> &'static str {
        match self {
            Self::Customer => "CUST",
            Self::Product => "PROD",
            Self::Transaction => "TXN",
            Self::TransactionItem => "ITEM",
        }
    }

    pub fn width(self) -> usize {
        match self {
            Self::Customer | Self::Product => 4,
            Self::Transaction | Self::TransactionItem => 5,
        }
    }

    /// Name of the table the entity is written to.
    pub fn table_name(self) -> &'static str {
        match self {
            Self::Customer => "customers",
            Self::Product => "products",
            Self::Transaction => "transactions",
            Self::TransactionItem => "transaction_items",
        }
    }

    /// Column order of the entity's table.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Self::Customer => Customer::COLUMNS,
            Self::Product => Product::COLUMNS,
            Self::Transaction => Transaction::COLUMNS,
            Self::TransactionItem => TransactionItem::COLUMNS,
        }
    }

    /// CSV file the entity's table is written to.
    pub fn file_name(self) -> String {
        format!("{}.csv", self.table_name())
    }

    /// Parse the sequence number back out of an id such as `TXN00042`.
    ///
    /// Returns `None` when the prefix or the padded width does not match.
    pub fn parse_sequence(self, id: &str) -> Option<u64> {
        let digits = id.strip_prefix(self.prefix())?;
        if digits.len() < self.width() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let value = digits.parse::<u64>().ok()?;
        if value == 0 { None } else { Some(value) }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table_name())
    }
}

/// Format the 1-based `index` as the entity's id (`CUST0001`, `TXN00001`).
pub fn format_id(kind: EntityKind, index: u64) -> String {
    format!("{}{:0width$}", kind.prefix(), index, width = kind.width())
}
