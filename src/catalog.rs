//! Catalog
//!
//! Static, read-only product collections and the category filter.

use std::fmt;

use crate::{
    fixtures::{FixtureError, catalogs::parse_catalog},
    products::{Category, Product, ProductId},
};

const SHOP_FIXTURE_YAML: &str = include_str!("../fixtures/catalogs/shop.yml");
const NEW_ARRIVALS_FIXTURE_YAML: &str = include_str!("../fixtures/catalogs/new-arrivals.yml");

/// Category selector: the "All" sentinel or one exact category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    /// Every product
    #[default]
    All,

    /// Products in exactly this category
    Only(Category),
}

impl CategoryFilter {
    /// Parse a filter label: `"All"` or an exact category name.
    pub fn parse(label: &str) -> Option<Self> {
        if label == "All" {
            return Some(Self::All);
        }

        Category::from_name(label).map(Self::Only)
    }

    /// Button label for this filter.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.name(),
        }
    }

    /// Whether a product passes this filter.
    pub fn matches(self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Built-in collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Collection {
    /// Main shop
    #[default]
    Shop,

    /// New arrivals
    NewArrivals,
}

impl Collection {
    /// Load the bundled catalog for this collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled fixture fails to parse or validate.
    pub fn load(self) -> Result<Catalog, FixtureError> {
        match self {
            Self::Shop => parse_catalog(SHOP_FIXTURE_YAML),
            Self::NewArrivals => parse_catalog(NEW_ARRIVALS_FIXTURE_YAML),
        }
    }
}

/// An immutable, ordered list of products.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    name: String,
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from already-validated parts.
    pub fn new(name: impl Into<String>, categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            name: name.into(),
            categories,
            products,
        }
    }

    /// Collection display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Categories offered as filters, in button order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Filter buttons: "All" followed by each category.
    pub fn filters(&self) -> impl Iterator<Item = CategoryFilter> + '_ {
        std::iter::once(CategoryFilter::All)
            .chain(self.categories.iter().copied().map(CategoryFilter::Only))
    }

    /// Every product, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products passing `filter`, preserving catalog order.
    pub fn filter(&self, filter: CategoryFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| filter.matches(product))
            .collect()
    }

    /// Look up a product by id.
    pub fn product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Result count label shown above the grid.
pub fn items_label(count: usize) -> String {
    format!("{count} items")
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|product| product.id.0).collect()
    }

    #[test]
    fn bundled_catalogs_load() -> TestResult {
        let shop = Collection::Shop.load()?;
        let arrivals = Collection::NewArrivals.load()?;

        assert_eq!(shop.len(), 8);
        assert_eq!(arrivals.len(), 8);
        assert_eq!(shop.name(), "Shop Collection");
        assert_eq!(arrivals.name(), "New Arrivals");

        Ok(())
    }

    #[test]
    fn all_filter_returns_full_list_in_order() -> TestResult {
        let shop = Collection::Shop.load()?;

        let all = shop.filter(CategoryFilter::All);

        assert_eq!(ids(&all), vec![1, 2, 3, 4, 5, 6, 7, 8]);

        Ok(())
    }

    #[test]
    fn category_filter_preserves_order() -> TestResult {
        let arrivals = Collection::NewArrivals.load()?;

        let dresses = arrivals.filter(CategoryFilter::Only(Category::Dresses));

        assert_eq!(ids(&dresses), vec![1, 11]);
        assert!(dresses.iter().all(|product| product.category == Category::Dresses));

        Ok(())
    }

    #[test]
    fn category_without_products_is_empty() -> TestResult {
        let shop = Collection::Shop.load()?;

        assert!(shop.filter(CategoryFilter::Only(Category::Skirts)).is_empty());

        Ok(())
    }

    #[test]
    fn filters_start_with_all() -> TestResult {
        let shop = Collection::Shop.load()?;

        let labels: Vec<&str> = shop.filters().map(CategoryFilter::label).collect();

        assert_eq!(
            labels,
            vec![
                "All", "T-Shirts", "Jackets", "Jeans", "Hoodies", "Shoes", "Blazers", "Dresses",
                "Shorts"
            ]
        );

        Ok(())
    }

    #[test]
    fn parse_filter_labels() {
        assert_eq!(CategoryFilter::parse("All"), Some(CategoryFilter::All));
        assert_eq!(
            CategoryFilter::parse("Heels"),
            Some(CategoryFilter::Only(Category::Heels))
        );
        assert_eq!(CategoryFilter::parse("sale"), None);
    }

    #[test]
    fn product_lookup_by_id() -> TestResult {
        let shop = Collection::Shop.load()?;

        assert_eq!(
            shop.product(ProductId(5)).map(|product| product.name.as_str()),
            Some("Crazy Sneakers")
        );
        assert!(shop.product(ProductId(99)).is_none());

        Ok(())
    }

    #[test]
    fn items_label_counts() {
        assert_eq!(items_label(3), "3 items");
    }
}
