//! Checkout
//!
//! Shipping details, the checkout state machine and the storefront
//! session that owns cart, form and order history.

use std::fmt;

use rusty_money::iso::Currency;
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    cart::{Cart, CartError},
    clock::{Clock, SystemClock},
    orders::{Order, OrderIdGenerator},
    pricing::PricingError,
    products::{Product, ProductId},
};

/// Shipping form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShippingField {
    /// Full name (required)
    Name,

    /// Email (required)
    Email,

    /// Street address (required)
    Address,

    /// City
    City,

    /// ZIP code
    ZipCode,
}

impl ShippingField {
    /// Every field, in form order.
    pub const ALL: [ShippingField; 5] = [
        ShippingField::Name,
        ShippingField::Email,
        ShippingField::Address,
        ShippingField::City,
        ShippingField::ZipCode,
    ];

    /// Fields that must be filled before an order can be placed.
    pub const REQUIRED: [ShippingField; 3] =
        [ShippingField::Name, ShippingField::Email, ShippingField::Address];

    /// Input placeholder.
    pub fn placeholder(self) -> &'static str {
        match self {
            ShippingField::Name => "Full Name",
            ShippingField::Email => "Email",
            ShippingField::Address => "Address",
            ShippingField::City => "City",
            ShippingField::ZipCode => "ZIP Code",
        }
    }
}

impl fmt::Display for ShippingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.placeholder())
    }
}

/// Shipping information collected during checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerInfo {
    /// Full name
    pub name: String,

    /// Email
    pub email: String,

    /// Street address
    pub address: String,

    /// City
    pub city: String,

    /// ZIP code
    pub zip_code: String,
}

impl CustomerInfo {
    /// Current value of `field`.
    pub fn get(&self, field: ShippingField) -> &str {
        match field {
            ShippingField::Name => &self.name,
            ShippingField::Email => &self.email,
            ShippingField::Address => &self.address,
            ShippingField::City => &self.city,
            ShippingField::ZipCode => &self.zip_code,
        }
    }

    /// Replace the value of `field`.
    pub fn set(&mut self, field: ShippingField, value: impl Into<String>) {
        let slot = match field {
            ShippingField::Name => &mut self.name,
            ShippingField::Email => &mut self.email,
            ShippingField::Address => &mut self.address,
            ShippingField::City => &mut self.city,
            ShippingField::ZipCode => &mut self.zip_code,
        };

        *slot = value.into();
    }

    /// Required fields that are blank.
    pub fn missing_required(&self) -> SmallVec<[ShippingField; 3]> {
        ShippingField::REQUIRED
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    /// Whether every required field is filled.
    pub fn is_complete(&self) -> bool {
        self.missing_required().is_empty()
    }
}

/// Where the shopper is in the checkout flow.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CheckoutStage {
    /// Browsing the grid, no overlay
    #[default]
    Browsing,

    /// Cart panel open
    CartOpen,

    /// Checkout modal open
    CheckingOut,

    /// Confirmation modal showing the last order
    OrderConfirmed,
}

impl fmt::Display for CheckoutStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CheckoutStage::Browsing => "browsing",
            CheckoutStage::CartOpen => "cart open",
            CheckoutStage::CheckingOut => "checking out",
            CheckoutStage::OrderConfirmed => "order confirmed",
        })
    }
}

/// Checkout action names, for transition errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutAction {
    /// Open the cart panel
    OpenCart,

    /// Close the cart panel
    CloseCart,

    /// Move from cart to checkout
    ProceedToCheckout,

    /// Close the checkout modal
    CancelCheckout,

    /// Place the order
    PlaceOrder,

    /// Dismiss the confirmation
    DismissConfirmation,
}

impl fmt::Display for CheckoutAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CheckoutAction::OpenCart => "open cart",
            CheckoutAction::CloseCart => "close cart",
            CheckoutAction::ProceedToCheckout => "proceed to checkout",
            CheckoutAction::CancelCheckout => "cancel checkout",
            CheckoutAction::PlaceOrder => "place order",
            CheckoutAction::DismissConfirmation => "dismiss confirmation",
        })
    }
}

/// Errors raised by checkout transitions.
#[derive(Debug, Error, PartialEq)]
pub enum CheckoutError {
    /// The action is not available from the current stage.
    #[error("cannot {action} while {stage}")]
    InvalidTransition {
        /// Stage the session was in
        stage: CheckoutStage,

        /// Attempted action
        action: CheckoutAction,
    },

    /// Checkout needs at least one cart line.
    #[error("cart is empty")]
    EmptyCart,

    /// Required shipping fields are blank.
    #[error("missing required fields: {}", format_fields(.0))]
    MissingFields(SmallVec<[ShippingField; 3]>),

    /// Cart update rejected.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// Total could not be computed.
    #[error(transparent)]
    Pricing(#[from] PricingError),
}

fn format_fields(fields: &[ShippingField]) -> String {
    fields
        .iter()
        .copied()
        .map(ShippingField::placeholder)
        .collect::<Vec<_>>()
        .join(", ")
}

/// One shopper's session: cart, shipping form, flow stage and orders.
#[derive(Debug)]
pub struct Storefront<C: Clock = SystemClock> {
    cart: Cart,
    customer: CustomerInfo,
    stage: CheckoutStage,
    orders: Vec<Order>,
    order_ids: OrderIdGenerator,
    clock: C,
}

impl Storefront<SystemClock> {
    /// Create a session using the wall clock.
    pub fn new(currency: &'static Currency) -> Self {
        Self::with_clock(currency, SystemClock)
    }
}

impl<C: Clock> Storefront<C> {
    /// Create a session using `clock` for order timestamps.
    pub fn with_clock(currency: &'static Currency, clock: C) -> Self {
        Self {
            cart: Cart::new(currency),
            customer: CustomerInfo::default(),
            stage: CheckoutStage::Browsing,
            orders: Vec::new(),
            order_ids: OrderIdGenerator::new(),
            clock,
        }
    }

    /// The cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Shipping form state.
    pub fn customer(&self) -> &CustomerInfo {
        &self.customer
    }

    /// Current flow stage.
    pub fn stage(&self) -> &CheckoutStage {
        &self.stage
    }

    /// Orders placed this session, newest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// The most recently placed order.
    pub fn last_order(&self) -> Option<&Order> {
        self.orders.first()
    }

    /// Add one unit of `product` in `color` to the cart.
    pub fn add_to_cart(&mut self, product: &Product, color: &str) {
        self.cart.add_to_cart(product, color);
    }

    /// Set a cart line's quantity; zero removes it.
    ///
    /// # Errors
    ///
    /// Returns a [`CartError`] for negative or oversized quantities.
    pub fn update_quantity(
        &mut self,
        id: ProductId,
        color: &str,
        new_quantity: i64,
    ) -> Result<(), CartError> {
        self.cart.update_quantity(id, color, new_quantity)
    }

    /// Edit one shipping field.
    pub fn set_field(&mut self, field: ShippingField, value: impl Into<String>) {
        self.customer.set(field, value);
    }

    /// Whether the "Place Order" button is enabled.
    pub fn can_place_order(&self) -> bool {
        self.stage == CheckoutStage::CheckingOut
            && !self.cart.is_empty()
            && self.customer.is_complete()
    }

    fn transition(
        &mut self,
        action: CheckoutAction,
        from: &CheckoutStage,
        to: CheckoutStage,
    ) -> Result<(), CheckoutError> {
        if &self.stage != from {
            return Err(CheckoutError::InvalidTransition {
                stage: self.stage.clone(),
                action,
            });
        }

        debug!(from = %self.stage, to = %to, %action, "checkout transition");

        self.stage = to;

        Ok(())
    }

    /// Browsing → cart open.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidTransition`] from any other stage.
    pub fn open_cart(&mut self) -> Result<(), CheckoutError> {
        self.transition(
            CheckoutAction::OpenCart,
            &CheckoutStage::Browsing,
            CheckoutStage::CartOpen,
        )
    }

    /// Cart open → browsing.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidTransition`] from any other stage.
    pub fn close_cart(&mut self) -> Result<(), CheckoutError> {
        self.transition(
            CheckoutAction::CloseCart,
            &CheckoutStage::CartOpen,
            CheckoutStage::Browsing,
        )
    }

    /// Cart open → checking out. Requires a non-empty cart.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] for an empty cart, or
    /// [`CheckoutError::InvalidTransition`] from any stage but cart open.
    pub fn proceed_to_checkout(&mut self) -> Result<(), CheckoutError> {
        if self.stage == CheckoutStage::CartOpen && self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        self.transition(
            CheckoutAction::ProceedToCheckout,
            &CheckoutStage::CartOpen,
            CheckoutStage::CheckingOut,
        )
    }

    /// Checking out → cart open.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidTransition`] from any other stage.
    pub fn cancel_checkout(&mut self) -> Result<(), CheckoutError> {
        self.transition(
            CheckoutAction::CancelCheckout,
            &CheckoutStage::CheckingOut,
            CheckoutStage::CartOpen,
        )
    }

    /// Place the order: snapshot the cart, record the order, then clear the
    /// cart and the shipping form. Returns a copy of the recorded order.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidTransition`] outside checkout,
    /// [`CheckoutError::EmptyCart`] for an empty cart, or
    /// [`CheckoutError::MissingFields`] while required fields are blank.
    /// Nothing changes on error.
    pub fn place_order(&mut self) -> Result<Order, CheckoutError> {
        if self.stage != CheckoutStage::CheckingOut {
            return Err(CheckoutError::InvalidTransition {
                stage: self.stage.clone(),
                action: CheckoutAction::PlaceOrder,
            });
        }

        if self.cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let missing = self.customer.missing_required();

        if !missing.is_empty() {
            return Err(CheckoutError::MissingFields(missing));
        }

        let total = self.cart.total_price()?;
        let placed_at = self.clock.now();
        let id = self.order_ids.next_id(placed_at);
        let order = Order::confirmed(id, self.cart.lines().to_vec(), total, placed_at);

        info!(
            order_id = %order.id(),
            lines = order.items().len(),
            total = %order.total(),
            "order placed"
        );

        self.orders.insert(0, order.clone());
        self.cart.clear();
        self.customer = CustomerInfo::default();
        self.stage = CheckoutStage::OrderConfirmed;

        Ok(order)
    }

    /// Order confirmed → browsing ("Continue Shopping").
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidTransition`] from any other stage.
    pub fn dismiss_confirmation(&mut self) -> Result<(), CheckoutError> {
        self.transition(
            CheckoutAction::DismissConfirmation,
            &CheckoutStage::OrderConfirmed,
            CheckoutStage::Browsing,
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use rust_decimal::Decimal;
    use rusty_money::{Money, iso};
    use smallvec::smallvec;
    use testresult::TestResult;

    use crate::{clock::ManualClock, products::Category};

    use super::*;

    fn product(id: u32, minor: i64) -> Product {
        Product {
            id: ProductId(id),
            name: format!("Product {id}"),
            price: Money::from_minor(minor, iso::USD),
            original_price: Money::from_minor(minor, iso::USD),
            image: String::new(),
            category: Category::Jackets,
            is_new: false,
            rating: Decimal::ZERO,
            colors: vec!["Black".to_string()],
        }
    }

    fn fill_required(session: &mut Storefront<&ManualClock>) {
        session.set_field(ShippingField::Name, "Ada Lovelace");
        session.set_field(ShippingField::Email, "ada@example.com");
        session.set_field(ShippingField::Address, "12 Analytical Row");
    }

    fn clock() -> Result<ManualClock, jiff::Error> {
        Ok(ManualClock::new(Timestamp::from_millisecond(
            1_760_000_000_000,
        )?))
    }

    #[test]
    fn full_flow_places_order_and_resets() -> TestResult {
        let clock = clock()?;
        let mut session = Storefront::with_clock(iso::USD, &clock);

        session.add_to_cart(&product(1, 2_999), "Black");
        session.add_to_cart(&product(1, 2_999), "Black");
        session.open_cart()?;
        session.proceed_to_checkout()?;
        fill_required(&mut session);
        session.set_field(ShippingField::City, "London");

        assert!(session.can_place_order());

        let expected_total = session.cart().total_price()?;
        let order = session.place_order()?;

        assert_eq!(session.last_order(), Some(&order));
        assert_eq!(order.total(), expected_total);
        assert_eq!(order.total(), Money::from_minor(5_998, iso::USD));
        assert_eq!(order.id().as_str(), "ORD-1760000000000");
        assert_eq!(order.items().len(), 1);
        assert!(session.cart().is_empty());
        assert_eq!(session.customer(), &CustomerInfo::default());
        assert_eq!(session.stage(), &CheckoutStage::OrderConfirmed);

        session.dismiss_confirmation()?;

        assert_eq!(session.stage(), &CheckoutStage::Browsing);

        Ok(())
    }

    #[test]
    fn order_snapshot_ignores_later_cart_changes() -> TestResult {
        let clock = clock()?;
        let mut session = Storefront::with_clock(iso::USD, &clock);
        let tee = product(1, 2_999);

        session.add_to_cart(&tee, "Black");
        session.open_cart()?;
        session.proceed_to_checkout()?;
        fill_required(&mut session);
        session.place_order()?;
        session.dismiss_confirmation()?;

        session.add_to_cart(&tee, "Black");
        session.add_to_cart(&tee, "Black");

        let order = session.last_order().ok_or("no order")?;

        assert_eq!(order.items().first().map(|line| line.quantity), Some(1));
        assert_eq!(order.total(), Money::from_minor(2_999, iso::USD));

        Ok(())
    }

    #[test]
    fn checkout_requires_items() -> TestResult {
        let clock = clock()?;
        let mut session = Storefront::with_clock(iso::USD, &clock);

        session.open_cart()?;

        assert_eq!(session.proceed_to_checkout(), Err(CheckoutError::EmptyCart));
        assert_eq!(session.stage(), &CheckoutStage::CartOpen);

        Ok(())
    }

    #[test]
    fn place_order_blocked_until_required_fields_filled() -> TestResult {
        let clock = clock()?;
        let mut session = Storefront::with_clock(iso::USD, &clock);

        session.add_to_cart(&product(1, 100), "Black");
        session.open_cart()?;
        session.proceed_to_checkout()?;
        session.set_field(ShippingField::Email, "ada@example.com");
        session.set_field(ShippingField::Address, "   ");

        assert!(!session.can_place_order());
        assert_eq!(
            session.place_order().map(|order| order.id().clone()),
            Err(CheckoutError::MissingFields(smallvec![
                ShippingField::Name,
                ShippingField::Address
            ]))
        );
        assert_eq!(session.cart().len(), 1);
        assert_eq!(session.stage(), &CheckoutStage::CheckingOut);

        Ok(())
    }

    #[test]
    fn invalid_transitions_leave_stage_unchanged() -> TestResult {
        let clock = clock()?;
        let mut session = Storefront::with_clock(iso::USD, &clock);

        assert_eq!(
            session.close_cart(),
            Err(CheckoutError::InvalidTransition {
                stage: CheckoutStage::Browsing,
                action: CheckoutAction::CloseCart,
            })
        );
        assert!(matches!(
            session.place_order(),
            Err(CheckoutError::InvalidTransition { .. })
        ));
        assert_eq!(session.stage(), &CheckoutStage::Browsing);

        Ok(())
    }

    #[test]
    fn cancel_checkout_returns_to_cart() -> TestResult {
        let clock = clock()?;
        let mut session = Storefront::with_clock(iso::USD, &clock);

        session.add_to_cart(&product(1, 100), "Black");
        session.open_cart()?;
        session.proceed_to_checkout()?;
        session.cancel_checkout()?;

        assert_eq!(session.stage(), &CheckoutStage::CartOpen);

        session.close_cart()?;

        assert_eq!(session.stage(), &CheckoutStage::Browsing);

        Ok(())
    }

    #[test]
    fn orders_are_newest_first_with_unique_ids() -> TestResult {
        let clock = clock()?;
        let mut session = Storefront::with_clock(iso::USD, &clock);

        for _ in 0..2 {
            session.add_to_cart(&product(1, 100), "Black");
            session.open_cart()?;
            session.proceed_to_checkout()?;
            fill_required(&mut session);
            session.place_order()?;
            session.dismiss_confirmation()?;
        }

        let ids: Vec<&str> = session
            .orders()
            .iter()
            .map(|order| order.id().as_str())
            .collect();

        assert_eq!(ids, vec!["ORD-1760000000001", "ORD-1760000000000"]);

        Ok(())
    }

    #[test]
    fn missing_fields_error_lists_placeholders() {
        let error =
            CheckoutError::MissingFields(smallvec![ShippingField::Name, ShippingField::Email]);

        assert_eq!(error.to_string(), "missing required fields: Full Name, Email");
    }
}
