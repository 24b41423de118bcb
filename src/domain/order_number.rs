/// Format an order number from a year and an already-reserved sequence value.
///
/// The sequence must come from an atomic counter so concurrent creations can
/// never observe the same value; formatting itself is pure. Sequences above
/// 99999 widen past five digits rather than wrapping.
pub fn format_order_number(year: i32, sequence: i64) -> String {
    format!("ORD-{}-{:05}", year, sequence)
}

#[cfg(test)]
mod tests {
    use super::format_order_number;

    #[test]
    fn pads_sequence_to_five_digits() {
        assert_eq!(format_order_number(2026, 1), "ORD-2026-00001");
        assert_eq!(format_order_number(2026, 42), "ORD-2026-00042");
    }

    #[test]
    fn large_sequences_widen_instead_of_truncating() {
        assert_eq!(format_order_number(2026, 123456), "ORD-2026-123456");
    }

    #[test]
    fn year_is_part_of_the_number() {
        assert_ne!(
            format_order_number(2025, 7),
            format_order_number(2026, 7)
        );
    }
}
