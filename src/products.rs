//! Products

use std::fmt;

use decimal_percentage::Percentage;
use rust_decimal::{Decimal, prelude::FromPrimitive};
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

/// Product identifier, unique within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ProductId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// Product category.
///
/// The set is closed: catalogs may only reference these categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// T-Shirts
    #[serde(rename = "T-Shirts")]
    TShirts,

    /// Jackets
    Jackets,

    /// Jeans
    Jeans,

    /// Hoodies
    Hoodies,

    /// Shoes
    Shoes,

    /// Blazers
    Blazers,

    /// Dresses
    Dresses,

    /// Shorts
    Shorts,

    /// Boots
    Boots,

    /// Heels
    Heels,

    /// Sweaters
    Sweaters,

    /// Skirts
    Skirts,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 12] = [
        Category::TShirts,
        Category::Jackets,
        Category::Jeans,
        Category::Hoodies,
        Category::Shoes,
        Category::Blazers,
        Category::Dresses,
        Category::Shorts,
        Category::Boots,
        Category::Heels,
        Category::Sweaters,
        Category::Skirts,
    ];

    /// Display name, as used on filter buttons and in fixtures.
    pub fn name(self) -> &'static str {
        match self {
            Category::TShirts => "T-Shirts",
            Category::Jackets => "Jackets",
            Category::Jeans => "Jeans",
            Category::Hoodies => "Hoodies",
            Category::Shoes => "Shoes",
            Category::Blazers => "Blazers",
            Category::Dresses => "Dresses",
            Category::Shorts => "Shorts",
            Category::Boots => "Boots",
            Category::Heels => "Heels",
            Category::Sweaters => "Sweaters",
            Category::Skirts => "Skirts",
        }
    }

    /// Look up a category by its exact display name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.name() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Product
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Product identifier
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Selling price
    pub price: Money<'static, Currency>,

    /// Price before markdown; never below `price`
    pub original_price: Money<'static, Currency>,

    /// Image path
    pub image: String,

    /// Product category
    pub category: Category,

    /// Whether the product is flagged as a new arrival
    pub is_new: bool,

    /// Average rating, 0 to 5
    pub rating: Decimal,

    /// Available color variants, in display order
    pub colors: Vec<String>,
}

impl Product {
    /// Whether the product is sold below its original price.
    pub fn is_discounted(&self) -> bool {
        self.original_price.to_minor_units() > self.price.to_minor_units()
    }

    /// Markdown relative to the original price, as a fraction.
    pub fn discount(&self) -> Percentage {
        let original = self.original_price.to_minor_units();
        let price = self.price.to_minor_units();

        if original <= 0 || price >= original {
            return Percentage::from(0.0);
        }

        let saved = Decimal::from_i64(original - price).unwrap_or(Decimal::ZERO);
        let original = Decimal::from_i64(original).unwrap_or(Decimal::ONE);

        Percentage::from(saved / original)
    }

    /// Default color preselected on the product card.
    pub fn default_color(&self) -> Option<&str> {
        self.colors.first().map(String::as_str)
    }

    /// Whether the product is offered in the given color.
    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|candidate| candidate == color)
    }
}
