//! Catalog Fixtures

use rust_decimal::{Decimal, prelude::FromPrimitive};
use rustc_hash::FxHashSet;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::{
    catalog::Catalog,
    fixtures::{FixtureError, parse_price},
    products::{Category, Product, ProductId},
};

/// Catalog file as written in YAML.
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Collection display name
    pub name: String,

    /// Filterable categories, in button order
    pub categories: Vec<String>,

    /// Products, in display order
    pub products: Vec<ProductFixture>,
}

/// Product Fixture
#[derive(Debug, Deserialize)]
pub struct ProductFixture {
    /// Product identifier
    pub id: u32,

    /// Product name
    pub name: String,

    /// Product price (e.g., "29.99 USD")
    pub price: String,

    /// Original price (e.g., "39.99 USD")
    pub original_price: String,

    /// Image path
    pub image: String,

    /// Category display name
    pub category: String,

    /// New arrival flag
    #[serde(default)]
    pub is_new: bool,

    /// Rating, 0 to 5
    pub rating: f64,

    /// Color variants
    pub colors: Vec<String>,
}

fn parse_category(name: &str) -> Result<Category, FixtureError> {
    Category::from_name(name).ok_or_else(|| FixtureError::UnknownCategory(name.to_string()))
}

fn parse_money(s: &str) -> Result<Money<'static, Currency>, FixtureError> {
    let (minor_units, currency) = parse_price(s)?;

    Ok(Money::from_minor(minor_units, currency))
}

impl TryFrom<ProductFixture> for Product {
    type Error = FixtureError;

    fn try_from(fixture: ProductFixture) -> Result<Self, Self::Error> {
        let id = ProductId(fixture.id);
        let price = parse_money(&fixture.price)?;
        let original_price = parse_money(&fixture.original_price)?;

        if price.currency() != original_price.currency() {
            return Err(FixtureError::CurrencyMismatch(
                price.currency().iso_alpha_code.to_string(),
                original_price.currency().iso_alpha_code.to_string(),
            ));
        }

        if original_price.to_minor_units() < price.to_minor_units() {
            return Err(FixtureError::OriginalBelowPrice(id));
        }

        let rating = Decimal::from_f64(fixture.rating)
            .map(|rating| rating.round_dp(2))
            .filter(|rating| *rating >= Decimal::ZERO && *rating <= Decimal::new(5, 0))
            .ok_or(FixtureError::InvalidRating(id))?;

        if fixture.colors.is_empty() {
            return Err(FixtureError::NoColors(id));
        }

        Ok(Product {
            id,
            name: fixture.name,
            price,
            original_price,
            image: fixture.image,
            category: parse_category(&fixture.category)?,
            is_new: fixture.is_new,
            rating,
            colors: fixture.colors,
        })
    }
}

impl TryFrom<CatalogFixture> for Catalog {
    type Error = FixtureError;

    fn try_from(fixture: CatalogFixture) -> Result<Self, Self::Error> {
        let categories = fixture
            .categories
            .iter()
            .map(|name| parse_category(name))
            .collect::<Result<Vec<_>, _>>()?;

        let mut seen = FxHashSet::default();
        let mut currency: Option<&'static Currency> = None;
        let mut products = Vec::with_capacity(fixture.products.len());

        for product_fixture in fixture.products {
            let product = Product::try_from(product_fixture)?;

            if !seen.insert(product.id) {
                return Err(FixtureError::DuplicateProduct(product.id));
            }

            if !categories.contains(&product.category) {
                return Err(FixtureError::UnlistedCategory(
                    product.id,
                    product.category.name().to_string(),
                ));
            }

            let product_currency = product.price.currency();

            if let Some(existing) = currency
                && existing != product_currency
            {
                return Err(FixtureError::CurrencyMismatch(
                    existing.iso_alpha_code.to_string(),
                    product_currency.iso_alpha_code.to_string(),
                ));
            }

            currency = Some(product_currency);
            products.push(product);
        }

        Ok(Catalog::new(fixture.name, categories, products))
    }
}

/// Parse a catalog from YAML.
///
/// # Errors
///
/// Returns an error if the YAML is malformed or any product fails validation.
pub fn parse_catalog(yaml: &str) -> Result<Catalog, FixtureError> {
    let fixture: CatalogFixture = serde_norway::from_str(yaml)?;

    Catalog::try_from(fixture)
}
