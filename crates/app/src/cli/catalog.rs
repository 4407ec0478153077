use clap::{Args, ValueEnum};
use storefront::{
    catalog::{CategoryFilter, Collection, items_label},
    pricing::{format_money, percent_points},
    products::Product,
};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub(crate) enum CollectionArg {
    /// Main shop
    #[default]
    Shop,

    /// New arrivals
    NewArrivals,
}

impl From<CollectionArg> for Collection {
    fn from(value: CollectionArg) -> Self {
        match value {
            CollectionArg::Shop => Collection::Shop,
            CollectionArg::NewArrivals => Collection::NewArrivals,
        }
    }
}

#[derive(Debug, Args)]
pub(crate) struct CatalogArgs {
    /// Collection to list
    #[arg(long, value_enum, default_value_t = CollectionArg::Shop)]
    collection: CollectionArg,

    /// Category name, or "All"
    #[arg(long, default_value = "All", value_parser = parse_filter)]
    category: CategoryFilter,
}

fn parse_filter(label: &str) -> Result<CategoryFilter, String> {
    CategoryFilter::parse(label).ok_or_else(|| format!("unknown category: {label}"))
}

pub(crate) fn run(args: &CatalogArgs) -> Result<(), String> {
    let catalog = Collection::from(args.collection)
        .load()
        .map_err(|error| format!("failed to load catalog: {error}"))?;

    let filters: Vec<String> = catalog.filters().map(|filter| filter.to_string()).collect();

    if !catalog.filters().any(|filter| filter == args.category) {
        return Err(format!(
            "{} has no {} category (expected one of: {})",
            catalog.name(),
            args.category,
            filters.join(", ")
        ));
    }

    let products = catalog.filter(args.category);

    println!("{} / {} ({})", catalog.name(), args.category, items_label(products.len()));

    if products.is_empty() {
        return Ok(());
    }

    println!("{}", product_table(&products));

    Ok(())
}

fn product_table(products: &[&Product]) -> String {
    let mut builder = Builder::default();

    builder.push_record(["ID", "Name", "Category", "Price", "Was", "Off", "Rating", "Colors", ""]);

    for product in products {
        let (was, off) = if product.is_discounted() {
            (
                format_money(&product.original_price),
                format!("{}%", percent_points(product.discount())),
            )
        } else {
            (String::new(), String::new())
        };

        builder.push_record([
            product.id.to_string(),
            product.name.clone(),
            product.category.to_string(),
            format_money(&product.price),
            was,
            off,
            product.rating.to_string(),
            product.colors.join(", "),
            if product.is_new { "NEW".to_string() } else { String::new() },
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(3..7), Alignment::right());

    table.to_string()
}
