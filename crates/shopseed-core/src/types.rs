use std::fmt;

use serde::{Deserialize, Serialize};

/// Category to sub-category enumeration used for products.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    ("Electronics", &["Mobile", "Laptop", "Accessories"]),
    ("Clothing", &["Men", "Women"]),
    ("Home & Kitchen", &["Appliances", "Furniture"]),
    ("Books", &["Education", "Fiction"]),
    ("Sports", &["Indoor", "Outdoor"]),
    ("Beauty", &["Skincare", "Cosmetics"]),
];

/// Number of suppliers in the pool (`SUP001`..=`SUP050`).
pub const SUPPLIER_POOL_SIZE: u32 = 50;

/// Customer age bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    #[serde(rename = "18-25")]
    From18To25,
    #[serde(rename = "26-35")]
    From26To35,
    #[serde(rename = "36-45")]
    From36To45,
    #[serde(rename = "46-60")]
    From46To60,
    #[serde(rename = "60+")]
    Over60,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 5] = [
        AgeGroup::From18To25,
        AgeGroup::From26To35,
        AgeGroup::From36To45,
        AgeGroup::From46To60,
        AgeGroup::Over60,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::From18To25 => "18-25",
            Self::From26To35 => "26-35",
            Self::From36To45 => "36-45",
            Self::From46To60 => "46-60",
            Self::Over60 => "60+",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment method recorded on a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[serde(rename = "UPI")]
    Upi,
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
    #[serde(rename = "Net Banking")]
    NetBanking,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 5] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Upi,
        PaymentMethod::CashOnDelivery,
        PaymentMethod::NetBanking,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::CreditCard => "Credit Card",
            Self::DebitCard => "Debit Card",
            Self::Upi => "UPI",
            Self::CashOnDelivery => "Cash on Delivery",
            Self::NetBanking => "Net Banking",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discount applied to a line item, serialized as its percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Discount {
    None,
    Five,
    Ten,
    Fifteen,
    Twenty,
}

impl Discount {
    pub const ALL: [Discount; 5] = [
        Discount::None,
        Discount::Five,
        Discount::Ten,
        Discount::Fifteen,
        Discount::Twenty,
    ];

    pub fn percentage(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Five => 5,
            Self::Ten => 10,
            Self::Fifteen => 15,
            Self::Twenty => 20,
        }
    }
}

impl TryFrom<u8> for Discount {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|discount| discount.percentage() == value)
            .ok_or_else(|| format!("discount {value}% is not one of 0, 5, 10, 15, 20"))
    }
}

impl From<Discount> for u8 {
    fn from(value: Discount) -> Self {
        value.percentage()
    }
}

/// Look up the sub-categories of a category.
pub fn sub_categories(category: &str) -> Option<&'static [&'static str]> {
    CATEGORIES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, subs)| *subs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_round_trips_through_percentage() {
        for discount in Discount::ALL {
            assert_eq!(Discount::try_from(discount.percentage()), Ok(discount));
        }
        assert!(Discount::try_from(7).is_err());
    }

    #[test]
    fn labels_match_serialized_form() {
        let json = serde_json::to_string(&AgeGroup::Over60).expect("serialize age group");
        assert_eq!(json, "\"60+\"");
        let json = serde_json::to_string(&PaymentMethod::CashOnDelivery).expect("serialize method");
        assert_eq!(json, format!("\"{}\"", PaymentMethod::CashOnDelivery));
    }

    #[test]
    fn every_category_has_sub_categories() {
        for (category, subs) in CATEGORIES {
            assert!(!subs.is_empty(), "{category} has no sub-categories");
            assert_eq!(sub_categories(category), Some(*subs));
        }
        assert_eq!(sub_categories("Toys"), None);
    }
}
