/// Round to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Line total for an item: `round2(quantity * unit_price * (1 - discount / 100))`.
pub fn line_total(quantity: u32, unit_price: f64, discount_percentage: u8) -> f64 {
    let factor = 1.0 - f64::from(discount_percentage) / 100.0;
    round2(f64::from(quantity) * unit_price * factor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_cents() {
        assert_eq!(round2(10.004), 10.0);
        assert_eq!(round2(10.006), 10.01);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn applies_discount_to_line_total() {
        assert_eq!(line_total(2, 100.0, 10), 180.0);
        assert_eq!(line_total(1, 999.99, 0), 999.99);
        assert_eq!(line_total(4, 250.5, 20), 801.6);
    }
}
