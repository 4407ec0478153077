use leptos::prelude::*;
use storefront::{
    cart::CartLine,
    checkout::{CheckoutStage, Storefront},
    pricing::format_money,
};
use tracing::warn;

use super::{Session, cart_total, transition};

/// Header button showing the item count; opens the cart.
#[component]
pub fn CartButton(session: Session) -> impl IntoView {
    let count = move || session.with(|storefront| storefront.cart().total_items());

    view! {
        <button
            type="button"
            class="cart-button"
            on:click=move |_| transition(session, Storefront::open_cart)
        >
            "Cart"
            {move || (count() > 0).then(|| view! { <span class="cart-count">{count()}</span> })}
        </button>
    }
}

fn set_quantity(session: Session, line: &CartLine, quantity: i64) {
    let id = line.id;
    let color = line.selected_color.clone();

    session.update(|storefront| {
        if let Err(error) = storefront.update_quantity(id, &color, quantity) {
            warn!(%error, %id, %color, "quantity update rejected");
        }
    });
}

#[component]
fn CartLineRow(line: CartLine, session: Session) -> impl IntoView {
    let quantity = i64::from(line.quantity);
    let line_total = line
        .line_total()
        .map(|total| format_money(&total))
        .unwrap_or_default();

    let decrement = line.clone();
    let increment = line.clone();
    let remove = line.clone();

    view! {
        <li class="cart-line">
            <img class="cart-line-image" src=line.image.clone() alt=line.name.clone() />
            <div class="cart-line-details">
                <p class="cart-line-name">{line.name.clone()}</p>
                <p class="cart-line-color">{line.selected_color.clone()}</p>
                <p class="cart-line-price">{format_money(&line.price)}</p>
            </div>
            <div class="cart-line-quantity">
                <button
                    type="button"
                    aria-label="Decrease quantity"
                    on:click=move |_| set_quantity(session, &decrement, quantity - 1)
                >
                    "-"
                </button>
                <span>{line.quantity}</span>
                <button
                    type="button"
                    aria-label="Increase quantity"
                    on:click=move |_| set_quantity(session, &increment, quantity + 1)
                >
                    "+"
                </button>
            </div>
            <p class="cart-line-total">{line_total}</p>
            <button
                type="button"
                class="cart-line-remove"
                on:click=move |_| set_quantity(session, &remove, 0)
            >
                "Remove"
            </button>
        </li>
    }
}

#[component]
pub fn CartPanel(session: Session) -> impl IntoView {
    let is_open = move || session.with(|storefront| *storefront.stage() == CheckoutStage::CartOpen);

    view! {
        <Show when=is_open>
            <aside class="cart-panel" role="dialog" aria-label="Shopping Cart">
                <header class="cart-panel-header">
                    <h2>"Shopping Cart"</h2>
                    <button
                        type="button"
                        aria-label="Close cart"
                        on:click=move |_| transition(session, Storefront::close_cart)
                    >
                        "×"
                    </button>
                </header>
                {move || {
                    let lines = session.with(|storefront| storefront.cart().lines().to_vec());

                    if lines.is_empty() {
                        view! { <p class="cart-empty">"Your cart is empty"</p> }.into_any()
                    } else {
                        view! {
                            <ul class="cart-lines">
                                {lines
                                    .into_iter()
                                    .map(|line| view! { <CartLineRow line=line session=session /> })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    }
                }}
                <footer class="cart-panel-footer">
                    <p class="cart-total">
                        <span>"Total"</span>
                        <span>{move || cart_total(session)}</span>
                    </p>
                    <button
                        type="button"
                        class="cart-checkout"
                        disabled=move || session.with(|storefront| storefront.cart().is_empty())
                        on:click=move |_| transition(session, Storefront::proceed_to_checkout)
                    >
                        "Checkout"
                    </button>
                </footer>
            </aside>
        </Show>
    }
}
