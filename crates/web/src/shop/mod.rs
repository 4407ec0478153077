//! Shop pages: catalog grid with category filter, cart panel, checkout
//! modal and order confirmation.

use std::sync::Arc;

use leptos::prelude::*;
use rust_decimal::Decimal;
use storefront::{
    catalog::{Catalog, CategoryFilter, items_label},
    checkout::{CheckoutError, Storefront},
    pricing::{format_money, percent_points},
    products::Product,
};
use tracing::warn;

mod cart_panel;
mod checkout;
mod product_card;

pub use cart_panel::{CartButton, CartPanel};
pub use checkout::{CheckoutModal, OrderConfirmation};

/// Session signal shared by every shop component.
pub type Session = RwSignal<Storefront>;

/// Run a checkout step, logging a rejected transition.
fn transition(session: Session, step: fn(&mut Storefront) -> Result<(), CheckoutError>) {
    session.update(|storefront| {
        if let Err(error) = step(storefront) {
            warn!(%error, "checkout step rejected");
        }
    });
}

/// Cart total, or an empty string if it cannot be priced.
fn cart_total(session: Session) -> String {
    session.with(|storefront| {
        storefront
            .cart()
            .total_price()
            .map(|total| format_money(&total))
            .unwrap_or_default()
    })
}

/// Sale badge, e.g. `-25%`, for discounted products.
fn discount_label(product: &Product) -> Option<String> {
    product
        .is_discounted()
        .then(|| format!("-{}%", percent_points(product.discount())))
}

/// A single star followed by the average rating, e.g. `★ 4.5`.
fn rating_label(rating: Decimal) -> String {
    format!("★ {}", rating.normalize())
}

#[component]
pub fn ShopPage(catalog: Arc<Catalog>, session: Session) -> impl IntoView {
    let filter = RwSignal::new(CategoryFilter::All);
    let filters: Vec<CategoryFilter> = catalog.filters().collect();
    let title = catalog.name().to_string();

    let visible = {
        let catalog = Arc::clone(&catalog);

        move || {
            catalog
                .filter(filter.get())
                .into_iter()
                .cloned()
                .collect::<Vec<Product>>()
        }
    };

    let count = move || items_label(catalog.filter(filter.get()).len());

    view! {
        <main class="shop">
            <h1 class="shop-title">{title}</h1>
            <div class="shop-filters" role="group">
                {filters
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                type="button"
                                class="shop-filter"
                                class:active=move || filter.get() == option
                                on:click=move |_| filter.set(option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="shop-count">{count}</p>
            <div class="shop-grid">
                <For
                    each=visible
                    key=|product| product.id
                    children=move |product| {
                        view! { <product_card::ProductCard product=product session=session /> }
                    }
                />
            </div>
        </main>
    }
}
