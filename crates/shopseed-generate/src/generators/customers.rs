use chrono::{Days, NaiveDate};
use fake::Fake;
use fake::faker::address::en::{CityName, StateName};
use fake::faker::name::en::{FirstName, LastName};
use rand::Rng;

use shopseed_core::{AgeGroup, Customer, EntityKind, format_id};

use super::pick;

/// Length of the registration window ending at the base date.
const REGISTRATION_WINDOW_DAYS: u64 = 730;

/// Generate `count` customers with ids `CUST0001..`.
///
/// Only the id and the `user{i}@example.com` email are unique; every other
/// field is drawn independently from `rng`.
pub fn generate_customers(count: usize, base_date: NaiveDate, rng: &mut impl Rng) -> Vec<Customer> {
    (1..=count as u64)
        .map(|index| {
            let first_name: String = FirstName().fake_with_rng(rng);
            let last_name: String = LastName().fake_with_rng(rng);
            let phone = format!(
                "{}{:09}",
                rng.random_range(6..=9_u8),
                rng.random_range(0..1_000_000_000_u32)
            );
            let offset = rng.random_range(0..=REGISTRATION_WINDOW_DAYS);
            let registration_date = base_date
                .checked_sub_days(Days::new(offset))
                .unwrap_or(base_date);
            let city: String = CityName().fake_with_rng(rng);
            let state: String = StateName().fake_with_rng(rng);

            Customer {
                customer_id: format_id(EntityKind::Customer, index),
                first_name,
                last_name,
                email: format!("user{index}@example.com"),
                phone,
                registration_date,
                city,
                state,
                country: "India".to_string(),
                age_group: pick(&AgeGroup::ALL, rng),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::stream_rng;

    fn base_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
    }

    #[test]
    fn assigns_sequential_ids_and_emails() {
        let customers = generate_customers(12, base_date(), &mut stream_rng(1, "customers"));

        assert_eq!(customers.len(), 12);
        assert_eq!(customers[0].customer_id, "CUST0001");
        assert_eq!(customers[11].customer_id, "CUST0012");
        assert_eq!(customers[11].email, "user12@example.com");
    }

    #[test]
    fn fields_stay_in_range() {
        let base = base_date();
        let earliest = base - Days::new(REGISTRATION_WINDOW_DAYS);
        for customer in generate_customers(200, base, &mut stream_rng(9, "customers")) {
            assert!(customer.registration_date <= base);
            assert!(customer.registration_date >= earliest);
            assert_eq!(customer.phone.len(), 10);
            assert!(customer.phone.bytes().all(|b| b.is_ascii_digit()));
            assert!(matches!(customer.phone.as_bytes()[0], b'6'..=b'9'));
            assert_eq!(customer.country, "India");
            assert!(AgeGroup::ALL.contains(&customer.age_group));
        }
    }

    #[test]
    fn same_seed_same_customers() {
        let a = generate_customers(25, base_date(), &mut stream_rng(5, "customers"));
        let b = generate_customers(25, base_date(), &mut stream_rng(5, "customers"));
        assert_eq!(a, b);
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(generate_customers(0, base_date(), &mut stream_rng(5, "customers")).is_empty());
    }
}
