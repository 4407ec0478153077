//! Profile display formatting

use jiff::{Timestamp, tz::TimeZone};
use rust_decimal::{Decimal, prelude::FromPrimitive};

/// Shown when the user has no orders.
pub const NO_ORDERS: &str = "No orders yet";

/// Image used when an item has none.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// Avatar initials: first letter of each word, upper-cased, at most two.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(2)
        .collect()
}

/// Rupee amount with Indian digit grouping and up to two decimals,
/// e.g. `₹1,23,456.78` or `₹1,299`.
pub fn format_inr(amount: f64) -> String {
    let rounded = Decimal::from_f64(amount)
        .unwrap_or_default()
        .round_dp(2)
        .normalize();

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = rounded.abs().to_string();

    match digits.split_once('.') {
        Some((whole, fraction)) => format!("{sign}₹{}.{fraction}", group_indian(whole)),
        None => format!("{sign}₹{}", group_indian(&digits)),
    }
}

fn group_indian(digits: &str) -> String {
    let mut reversed = Vec::with_capacity(digits.len() + digits.len() / 2);

    for (position, digit) in digits.chars().rev().enumerate() {
        if position == 3 || (position > 3 && (position - 3) % 2 == 0) {
            reversed.push(',');
        }

        reversed.push(digit);
    }

    reversed.into_iter().rev().collect()
}

/// Long date, e.g. `16 October 2026`.
pub fn format_date(timestamp: Timestamp, tz: &TimeZone) -> String {
    timestamp
        .to_zoned(tz.clone())
        .strftime("%-d %B %Y")
        .to_string()
}

/// Short order number: the last eight characters of the id, upper-cased.
pub fn order_number(id: &str) -> String {
    let count = id.chars().count();

    id.chars()
        .skip(count.saturating_sub(8))
        .collect::<String>()
        .to_uppercase()
}

/// `1 item` / `N items`.
pub fn item_count_label(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}

/// Order count badge.
pub fn orders_badge(count: usize) -> String {
    format!("{count} Orders")
}

/// `image`, or the placeholder when blank.
pub fn image_or_placeholder(image: &str) -> &str {
    if image.is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        image
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn initials_take_two_words() {
        assert_eq!(initials("ada lovelace"), "AL");
        assert_eq!(initials("John Ronald Reuel Tolkien"), "JR");
        assert_eq!(initials("Plato"), "P");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn rupees_use_indian_grouping() {
        assert_eq!(format_inr(123_456.78), "₹1,23,456.78");
        assert_eq!(format_inr(1_299.0), "₹1,299");
        assert_eq!(format_inr(1_299.5), "₹1,299.5");
        assert_eq!(format_inr(12_345_678.0), "₹1,23,45,678");
        assert_eq!(format_inr(999.999), "₹1,000");
        assert_eq!(format_inr(0.0), "₹0");
        assert_eq!(format_inr(-2_500.0), "-₹2,500");
    }

    #[test]
    fn long_dates() -> TestResult {
        let placed_at: Timestamp = "2026-10-16T09:30:00Z".parse()?;

        assert_eq!(format_date(placed_at, &TimeZone::UTC), "16 October 2026");

        Ok(())
    }

    #[test]
    fn order_numbers_are_id_suffixes() {
        assert_eq!(order_number("665f1c2ab3e4d5f6a7b8c9d0"), "A7B8C9D0");
        assert_eq!(order_number("abc"), "ABC");
    }

    #[test]
    fn labels() {
        assert_eq!(item_count_label(1), "1 item");
        assert_eq!(item_count_label(3), "3 items");
        assert_eq!(item_count_label(0), "0 items");
        assert_eq!(orders_badge(2), "2 Orders");
        assert_eq!(image_or_placeholder(""), PLACEHOLDER_IMAGE);
        assert_eq!(image_or_placeholder("/tee.jpg"), "/tee.jpg");
    }
}
