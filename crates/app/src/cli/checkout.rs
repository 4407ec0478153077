use clap::Args;
use jiff::tz::TimeZone;
use rusty_money::iso::USD;
use storefront::{
    catalog::Collection,
    checkout::{CheckoutError, ShippingField, Storefront},
    pricing::format_money,
    products::ProductId,
};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LineArg {
    id: ProductId,
    color: String,
}

fn parse_line(value: &str) -> Result<LineArg, String> {
    let (id, color) = value
        .split_once(':')
        .ok_or_else(|| format!("expected ID:COLOR, got {value}"))?;

    let id = id
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("invalid product id {id}: {error}"))?;

    Ok(LineArg {
        id: ProductId(id),
        color: color.trim().to_string(),
    })
}

#[derive(Debug, Args)]
pub(crate) struct CheckoutArgs {
    /// Product to add as ID:COLOR; repeat to add more
    #[arg(long = "add", value_name = "ID:COLOR", required = true, value_parser = parse_line)]
    lines: Vec<LineArg>,

    /// Full name
    #[arg(long, default_value = "")]
    name: String,

    /// Email
    #[arg(long, default_value = "")]
    email: String,

    /// Address
    #[arg(long, default_value = "")]
    address: String,

    /// City
    #[arg(long, default_value = "")]
    city: String,

    /// ZIP code
    #[arg(long, default_value = "")]
    zip_code: String,
}

pub(crate) fn run(args: CheckoutArgs) -> Result<(), String> {
    let catalog = Collection::Shop
        .load()
        .map_err(|error| format!("failed to load catalog: {error}"))?;

    let mut session = Storefront::new(USD);

    for line in &args.lines {
        let product = catalog
            .product(line.id)
            .ok_or_else(|| format!("no product with id {}", line.id))?;

        if !product.has_color(&line.color) {
            return Err(format!(
                "{} is not available in {} (colors: {})",
                product.name,
                line.color,
                product.colors.join(", ")
            ));
        }

        session.add_to_cart(product, &line.color);
    }

    let error = |error: CheckoutError| format!("checkout failed: {error}");

    session.open_cart().map_err(error)?;
    session.proceed_to_checkout().map_err(error)?;

    session.set_field(ShippingField::Name, args.name);
    session.set_field(ShippingField::Email, args.email);
    session.set_field(ShippingField::Address, args.address);
    session.set_field(ShippingField::City, args.city);
    session.set_field(ShippingField::ZipCode, args.zip_code);

    let order = session.place_order().map_err(error)?;

    info!(order_id = %order.id(), lines = order.items().len(), "order placed");

    let mut builder = Builder::default();

    builder.push_record(["Item", "Color", "Qty", "Price", "Total"]);

    for line in order.items() {
        let total = line
            .line_total()
            .map_err(|error| format!("failed to price {}: {error}", line.name))?;

        builder.push_record([
            line.name.clone(),
            line.selected_color.clone(),
            line.quantity.to_string(),
            format_money(&line.price),
            format_money(&total),
        ]);
    }

    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Columns::new(2..5), Alignment::right());

    println!("Order {} ({})", order.id(), order.status());
    println!("Placed {}", order.date_label(&TimeZone::system()));
    println!("{table}");
    println!("Total: {}", format_money(&order.total()));

    Ok(())
}
