//! Storefront
//!
//! Domain core of a client-rendered clothing storefront: product catalogs,
//! the cart, checkout and orders, and the landing page animation sequence.
//! Everything here is synchronous and free of I/O.

pub mod animation;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod clock;
pub mod fixtures;
pub mod orders;
pub mod prelude;
pub mod pricing;
pub mod products;
