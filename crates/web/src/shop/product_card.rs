use std::sync::Arc;

use leptos::prelude::*;
use storefront::{pricing::format_money, products::Product};
use tracing::debug;

use super::{Session, discount_label, rating_label};

#[component]
pub fn ProductCard(product: Product, session: Session) -> impl IntoView {
    let selected = RwSignal::new(product.default_color().unwrap_or_default().to_string());
    let product = Arc::new(product);

    let on_add = {
        let product = Arc::clone(&product);

        move |_| {
            let color = selected.get_untracked();

            debug!(id = %product.id, %color, "add to cart");

            session.update(|storefront| storefront.add_to_cart(&product, &color));
        }
    };

    let swatches = product
        .colors
        .iter()
        .cloned()
        .map(|color| {
            let is_selected = {
                let color = color.clone();

                move || selected.with(|current| *current == color)
            };

            let label = color.clone();

            view! {
                <button
                    type="button"
                    class="product-swatch"
                    class:selected=is_selected
                    on:click=move |_| selected.set(color.clone())
                >
                    {label}
                </button>
            }
        })
        .collect_view();

    view! {
        <article class="product-card">
            <div class="product-image">
                <img src=product.image.clone() alt=product.name.clone() />
                {product.is_new.then(|| view! { <span class="product-badge-new">"NEW"</span> })}
                {discount_label(&product)
                    .map(|label| view! { <span class="product-badge-sale">{label}</span> })}
            </div>
            <h3 class="product-name">{product.name.clone()}</h3>
            <p class="product-rating">
                {rating_label(product.rating)}
            </p>
            <div class="product-price-summary">
                {product
                    .is_discounted()
                    .then(|| {
                        view! {
                            <span class="product-shelf-price">
                                <span class="sr-only">"Was "</span>
                                <del>{format_money(&product.original_price)}</del>
                            </span>
                        }
                    })}
                <span class="product-price">{format_money(&product.price)}</span>
            </div>
            <div class="product-swatches">{swatches}</div>
            <button type="button" class="product-add" on:click=on_add>
                "Add to Cart"
            </button>
        </article>
    }
}
