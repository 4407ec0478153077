//! Cart
//!
//! The cart is a flat list of lines keyed by (product id, color). Lookups
//! are linear; carts stay small.

use rusty_money::{Money, iso::Currency};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    pricing::{PricingError, extended_price, sum},
    products::{Product, ProductId},
};

/// Errors raised by cart updates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// Quantities below zero are rejected.
    #[error("quantity must not be negative, got {0}")]
    NegativeQuantity(i64),

    /// Quantity exceeds what a cart line can hold.
    #[error("quantity {0} is too large")]
    QuantityTooLarge(i64),
}

/// One (product, color) purchase-intent entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    /// Product identifier
    pub id: ProductId,

    /// Product name at the time it was added
    pub name: String,

    /// Unit price at the time it was added
    #[serde(serialize_with = "serialize_money")]
    pub price: Money<'static, Currency>,

    /// Image path
    pub image: String,

    /// Units of this product and color
    pub quantity: u32,

    /// Chosen color variant
    pub selected_color: String,
}

impl CartLine {
    fn from_product(product: &Product, color: &str) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            image: product.image.clone(),
            quantity: 1,
            selected_color: color.to_string(),
        }
    }

    fn is(&self, id: ProductId, color: &str) -> bool {
        self.id == id && self.selected_color == color
    }

    /// Price of this line: unit price × quantity.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the total does not fit.
    pub fn line_total(&self) -> Result<Money<'static, Currency>, PricingError> {
        extended_price(self.price, self.quantity)
    }
}

fn serialize_money<S>(money: &Money<'static, Currency>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&money.to_string())
}

/// Shopping cart.
#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
    currency: &'static Currency,
}

impl Cart {
    /// Create an empty cart priced in `currency`.
    pub fn new(currency: &'static Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add one unit of `product` in `color`.
    ///
    /// Increments the existing line for the pair, or appends a new line
    /// with quantity 1.
    pub fn add_to_cart(&mut self, product: &Product, color: &str) {
        if let Some(line) = self.line_mut(product.id, color) {
            line.quantity = line.quantity.saturating_add(1);

            debug!(product = %product.id, color, quantity = line.quantity, "incremented cart line");

            return;
        }

        self.lines.push(CartLine::from_product(product, color));

        debug!(product = %product.id, color, "added cart line");
    }

    /// Set the quantity of the (id, color) line.
    ///
    /// Zero removes the line. Updating an absent pair is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NegativeQuantity`] for negative input and
    /// [`CartError::QuantityTooLarge`] if the value does not fit a line.
    /// The cart is unchanged on error.
    pub fn update_quantity(
        &mut self,
        id: ProductId,
        color: &str,
        new_quantity: i64,
    ) -> Result<(), CartError> {
        if new_quantity < 0 {
            return Err(CartError::NegativeQuantity(new_quantity));
        }

        if new_quantity == 0 {
            self.lines.retain(|line| !line.is(id, color));

            debug!(product = %id, color, "removed cart line");

            return Ok(());
        }

        let quantity =
            u32::try_from(new_quantity).map_err(|_err| CartError::QuantityTooLarge(new_quantity))?;

        if let Some(line) = self.line_mut(id, color) {
            line.quantity = quantity;

            debug!(product = %id, color, quantity, "updated cart line");
        }

        Ok(())
    }

    /// Sum of price × quantity over all lines.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if the total overflows.
    pub fn total_price(&self) -> Result<Money<'static, Currency>, PricingError> {
        let line_totals = self
            .lines
            .iter()
            .map(CartLine::line_total)
            .collect::<Result<Vec<_>, _>>()?;

        sum(line_totals, self.currency)
    }

    /// Sum of quantities over all lines.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for (id, color), if present.
    pub fn line(&self, id: ProductId, color: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.is(id, color))
    }

    fn line_mut(&mut self, id: ProductId, color: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.is(id, color))
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Currency the cart is priced in.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::iso;
    use testresult::TestResult;

    use crate::products::Category;

    use super::*;

    fn product(id: u32, minor: i64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {id}"),
            price: Money::from_minor(minor, iso::USD),
            original_price: Money::from_minor(minor, iso::USD),
            image: format!("/products/{id}.jpg"),
            category: Category::TShirts,
            is_new: false,
            rating: Decimal::new(4, 0),
            colors: vec!["Black".to_string(), "White".to_string()],
        }
    }

    #[test]
    fn adding_same_pair_twice_increments_quantity() -> TestResult {
        let tee = product(1, 2_999);
        let mut cart = Cart::new(iso::USD);

        cart.add_to_cart(&tee, "Black");
        cart.add_to_cart(&tee, "Black");

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 2);

        let line = cart.line(ProductId(1), "Black").ok_or("missing line")?;

        assert_eq!(line.quantity, 2);
        assert_eq!(line.line_total()?, Money::from_minor(5_998, iso::USD));

        Ok(())
    }

    #[test]
    fn different_colors_are_distinct_lines() {
        let tee = product(1, 2_999);
        let mut cart = Cart::new(iso::USD);

        cart.add_to_cart(&tee, "Black");
        cart.add_to_cart(&tee, "White");

        assert_eq!(cart.len(), 2);
        assert!(cart.line(ProductId(1), "Black").is_some());
        assert!(cart.line(ProductId(1), "White").is_some());
    }

    #[test]
    fn repeated_adds_leave_one_line_per_pair() {
        let a = product(1, 100);
        let b = product(2, 200);
        let mut cart = Cart::new(iso::USD);

        let calls = [
            (&a, "Black"),
            (&b, "Black"),
            (&a, "White"),
            (&a, "Black"),
            (&b, "Black"),
            (&a, "Black"),
        ];

        for (product, color) in calls {
            cart.add_to_cart(product, color);
        }

        let quantities: Vec<(u32, &str, u32)> = cart
            .lines()
            .iter()
            .map(|line| (line.id.0, line.selected_color.as_str(), line.quantity))
            .collect();

        assert_eq!(
            quantities,
            vec![(1, "Black", 3), (2, "Black", 2), (1, "White", 1)]
        );
    }

    #[test]
    fn update_to_zero_removes_line_and_repeat_is_noop() -> TestResult {
        let tee = product(1, 2_999);
        let mut cart = Cart::new(iso::USD);

        cart.add_to_cart(&tee, "Black");
        cart.update_quantity(ProductId(1), "Black", 0)?;

        assert!(cart.is_empty());

        cart.update_quantity(ProductId(1), "Black", 0)?;

        assert!(cart.is_empty());

        Ok(())
    }

    #[test]
    fn update_sets_quantity() -> TestResult {
        let tee = product(1, 2_999);
        let mut cart = Cart::new(iso::USD);

        cart.add_to_cart(&tee, "Black");
        cart.update_quantity(ProductId(1), "Black", 5)?;

        assert_eq!(cart.total_items(), 5);
        assert_eq!(cart.total_price()?, Money::from_minor(14_995, iso::USD));

        Ok(())
    }

    #[test]
    fn update_of_absent_pair_leaves_cart_unchanged() -> TestResult {
        let tee = product(1, 2_999);
        let mut cart = Cart::new(iso::USD);

        cart.add_to_cart(&tee, "Black");
        cart.update_quantity(ProductId(1), "White", 3)?;

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_items(), 1);

        Ok(())
    }

    #[test]
    fn negative_quantity_is_rejected() {
        let tee = product(1, 2_999);
        let mut cart = Cart::new(iso::USD);

        cart.add_to_cart(&tee, "Black");

        assert_eq!(
            cart.update_quantity(ProductId(1), "Black", -1),
            Err(CartError::NegativeQuantity(-1))
        );
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn oversized_quantity_is_rejected() {
        let tee = product(1, 2_999);
        let mut cart = Cart::new(iso::USD);

        cart.add_to_cart(&tee, "Black");

        let too_many = i64::from(u32::MAX) + 1;

        assert_eq!(
            cart.update_quantity(ProductId(1), "Black", too_many),
            Err(CartError::QuantityTooLarge(too_many))
        );
    }

    #[test]
    fn total_price_sums_lines() -> TestResult {
        let tee = product(1, 2_999);
        let jacket = product(2, 8_999);
        let mut cart = Cart::new(iso::USD);

        cart.add_to_cart(&tee, "Black");
        cart.add_to_cart(&tee, "Black");
        cart.add_to_cart(&jacket, "White");

        assert_eq!(cart.total_price()?, Money::from_minor(14_997, iso::USD));
        assert_eq!(cart.total_items(), 3);

        Ok(())
    }

    #[test]
    fn empty_cart_totals_are_zero() -> TestResult {
        let cart = Cart::new(iso::USD);

        assert_eq!(cart.total_price()?, Money::from_minor(0, iso::USD));
        assert_eq!(cart.total_items(), 0);

        Ok(())
    }

    #[test]
    fn clear_empties_cart() {
        let mut cart = Cart::new(iso::USD);

        cart.add_to_cart(&product(1, 100), "Black");
        cart.clear();

        assert!(cart.is_empty());
    }
}
