//! Storefront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    animation::{
        AnimationDriver, AnimationKey, Breakpoint, Element, LandingSequence, PlaybackEngine,
        ScrollEvent, StyleSheet, Timeline, TimelineError, Viewport,
    },
    cart::{Cart, CartError, CartLine},
    catalog::{Catalog, CategoryFilter, Collection, items_label},
    checkout::{CheckoutError, CheckoutStage, CustomerInfo, ShippingField, Storefront},
    clock::{Clock, ManualClock, SystemClock},
    fixtures::FixtureError,
    orders::{Order, OrderId, OrderStatus},
    pricing::{PricingError, format_money},
    products::{Category, Product, ProductId},
};
