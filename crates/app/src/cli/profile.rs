use clap::Args;
use jiff::tz::TimeZone;
use storefront_app::{
    api::{ApiClient, models::ProfileRecord},
    auth::LoginForm,
    config::ApiConfig,
    profile::{
        HttpProfileService, ProfileCache,
        format::{
            NO_ORDERS, format_date, format_inr, image_or_placeholder, initials,
            item_count_label, order_number, orders_badge,
        },
        view::{UNAVAILABLE_MESSAGE, UNAVAILABLE_TITLE},
    },
};
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};

use super::auth;

#[derive(Debug, Args)]
pub(crate) struct ProfileArgs {
    #[command(flatten)]
    api: ApiConfig,

    /// Sign in with this email first; the session lasts for this run only
    #[arg(long)]
    email: Option<String>,

    /// Password for --email
    #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true, default_value = "")]
    password: String,
}

pub(crate) async fn run(args: ProfileArgs) -> Result<(), String> {
    let client =
        ApiClient::new(&args.api).map_err(|error| format!("failed to build client: {error}"))?;

    if let Some(email) = args.email {
        let form = LoginForm {
            email,
            password: args.password,
        };

        auth::sign_in(client.clone(), &form).await?;
    }

    let service = HttpProfileService::new(client);
    let view = ProfileCache::new().load(&service).await;

    match view.profile() {
        Some(profile) => {
            print_profile(profile, &TimeZone::system());

            Ok(())
        }
        None => Err(format!("{UNAVAILABLE_TITLE}: {UNAVAILABLE_MESSAGE}")),
    }
}

fn print_profile(profile: &ProfileRecord, tz: &TimeZone) {
    println!(
        "[{}] {} <{}>  {}",
        initials(&profile.user.name),
        profile.user.name,
        profile.user.email,
        orders_badge(profile.orders.len())
    );

    if profile.orders.is_empty() {
        println!("{NO_ORDERS}");

        return;
    }

    for order in &profile.orders {
        println!();
        println!(
            "Order #{}  {}  {}  {}",
            order_number(&order.id),
            format_date(order.placed_at, tz),
            item_count_label(order.items.len()),
            format_inr(order.total_amount)
        );

        let mut builder = Builder::default();

        builder.push_record(["Item", "Color", "Qty", "Price", "Image"]);

        for item in &order.items {
            builder.push_record([
                item.name.clone(),
                item.color.clone().unwrap_or_default(),
                item.quantity.to_string(),
                format_inr(item.price),
                image_or_placeholder(&item.image).to_string(),
            ]);
        }

        let mut table = builder.build();

        table.with(Style::modern_rounded());
        table.modify(Columns::new(2..4), Alignment::right());

        println!("{table}");
    }
}
