//! Orders

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};
use rusty_money::{Money, iso::Currency};
use serde::Serialize;

use crate::cart::CartLine;

/// Order identifier, `ORD-<unix milliseconds>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    fn from_millis(millis: i64) -> Self {
        Self(format!("ORD-{millis}"))
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Issues time-derived order ids that never repeat within a session.
#[derive(Debug, Default, Clone)]
pub struct OrderIdGenerator {
    last_millis: Option<i64>,
}

impl OrderIdGenerator {
    /// Create a generator with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Next id for an order placed at `now`.
    ///
    /// Placements within the same millisecond (or after a clock step
    /// backwards) take the next unused millisecond value.
    pub fn next_id(&mut self, now: Timestamp) -> OrderId {
        let millis = now.as_millisecond();

        let millis = match self.last_millis {
            Some(last) if millis <= last => last.saturating_add(1),
            _ => millis,
        };

        self.last_millis = Some(millis);

        OrderId::from_millis(millis)
    }
}

/// Order lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Accepted; every new order starts here
    Confirmed,

    /// Being prepared
    Processing,

    /// Handed to the carrier
    Shipped,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
        })
    }
}

/// A placed order. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    id: OrderId,
    items: Vec<CartLine>,
    total: Money<'static, Currency>,
    placed_at: Timestamp,
    status: OrderStatus,
}

impl Order {
    /// Create a confirmed order from a snapshot of cart lines.
    ///
    /// `total` is taken as computed at placement time and never recomputed.
    pub fn confirmed(
        id: OrderId,
        items: Vec<CartLine>,
        total: Money<'static, Currency>,
        placed_at: Timestamp,
    ) -> Self {
        Self {
            id,
            items,
            total,
            placed_at,
            status: OrderStatus::Confirmed,
        }
    }

    /// Order id.
    pub fn id(&self) -> &OrderId {
        &self.id
    }

    /// Lines as they were when the order was placed.
    pub fn items(&self) -> &[CartLine] {
        &self.items
    }

    /// Total at placement time.
    pub fn total(&self) -> Money<'static, Currency> {
        self.total
    }

    /// Placement instant.
    pub fn placed_at(&self) -> Timestamp {
        self.placed_at
    }

    /// Order status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Placement date as `M/D/YYYY` in `tz`.
    pub fn date_label(&self, tz: &TimeZone) -> String {
        self.placed_at
            .to_zoned(tz.clone())
            .strftime("%-m/%-d/%Y")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn ids_are_time_derived() -> TestResult {
        let mut ids = OrderIdGenerator::new();
        let now = Timestamp::from_millisecond(1_700_000_000_000)?;

        assert_eq!(ids.next_id(now).as_str(), "ORD-1700000000000");

        Ok(())
    }

    #[test]
    fn ids_stay_unique_within_one_millisecond() -> TestResult {
        let mut ids = OrderIdGenerator::new();
        let now = Timestamp::from_millisecond(1_700_000_000_000)?;

        let first = ids.next_id(now);
        let second = ids.next_id(now);
        let earlier = ids.next_id(Timestamp::from_millisecond(1_699_999_999_000)?);

        assert_eq!(first.as_str(), "ORD-1700000000000");
        assert_eq!(second.as_str(), "ORD-1700000000001");
        assert_eq!(earlier.as_str(), "ORD-1700000000002");

        Ok(())
    }

    #[test]
    fn new_orders_are_confirmed() -> TestResult {
        let placed_at: Timestamp = "2026-10-16T09:30:00Z".parse()?;
        let order = Order::confirmed(
            OrderId::from_millis(placed_at.as_millisecond()),
            Vec::new(),
            Money::from_minor(0, iso::USD),
            placed_at,
        );

        assert_eq!(order.status(), OrderStatus::Confirmed);
        assert_eq!(order.date_label(&TimeZone::UTC), "10/16/2026");

        Ok(())
    }
}
