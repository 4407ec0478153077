use jiff::tz::TimeZone;
use leptos::prelude::*;
use storefront::{
    catalog::items_label,
    checkout::{CheckoutStage, ShippingField, Storefront},
    pricing::format_money,
};
use tracing::{info, warn};

use super::{Session, cart_total, transition};

fn place_order(session: Session) {
    session.update(|storefront| match storefront.place_order() {
        Ok(order) => info!(order_id = %order.id(), total = %order.total(), "order placed"),
        Err(error) => warn!(%error, "order rejected"),
    });
}

#[component]
fn ShippingInput(field: ShippingField, session: Session) -> impl IntoView {
    let required = ShippingField::REQUIRED.contains(&field);
    let input_type = if field == ShippingField::Email { "email" } else { "text" };

    view! {
        <input
            type=input_type
            class="checkout-input"
            placeholder=field.placeholder()
            required=required
            prop:value=move || session.with(|storefront| storefront.customer().get(field).to_string())
            on:input=move |event| {
                let value = event_target_value(&event);

                session.update(|storefront| storefront.set_field(field, value));
            }
        />
    }
}

#[component]
pub fn CheckoutModal(session: Session) -> impl IntoView {
    let is_open =
        move || session.with(|storefront| *storefront.stage() == CheckoutStage::CheckingOut);

    let summary = move || {
        session.with(|storefront| {
            storefront
                .cart()
                .lines()
                .iter()
                .map(|line| {
                    let total = line
                        .line_total()
                        .map(|total| format_money(&total))
                        .unwrap_or_default();

                    view! {
                        <li class="checkout-summary-line">
                            <span>{format!("{} ({}) × {}", line.name, line.selected_color, line.quantity)}</span>
                            <span>{total}</span>
                        </li>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <Show when=is_open>
            <div class="modal-backdrop">
                <div class="checkout-modal" role="dialog" aria-label="Checkout">
                    <h2>"Checkout"</h2>
                    <form class="checkout-form" on:submit=move |event| event.prevent_default()>
                        {ShippingField::ALL
                            .into_iter()
                            .map(|field| view! { <ShippingInput field=field session=session /> })
                            .collect_view()}
                    </form>
                    <ul class="checkout-summary">{summary}</ul>
                    <p class="checkout-total">
                        <span>"Total"</span>
                        <span>{move || cart_total(session)}</span>
                    </p>
                    <div class="checkout-actions">
                        <button
                            type="button"
                            on:click=move |_| transition(session, Storefront::cancel_checkout)
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class="checkout-place"
                            disabled=move || !session.with(Storefront::can_place_order)
                            on:click=move |_| place_order(session)
                        >
                            "Place Order"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[component]
pub fn OrderConfirmation(session: Session) -> impl IntoView {
    let is_open =
        move || session.with(|storefront| *storefront.stage() == CheckoutStage::OrderConfirmed);

    let details = move || {
        session.with(|storefront| {
            storefront.last_order().map(|order| {
                let units: u64 = order.items().iter().map(|line| u64::from(line.quantity)).sum();

                view! {
                    <dl class="confirmation-details">
                        <dt>"Order ID"</dt>
                        <dd>{order.id().to_string()}</dd>
                        <dt>"Date"</dt>
                        <dd>{order.date_label(&TimeZone::system())}</dd>
                        <dt>"Items"</dt>
                        <dd>{items_label(usize::try_from(units).unwrap_or(usize::MAX))}</dd>
                        <dt>"Total"</dt>
                        <dd>{format_money(&order.total())}</dd>
                        <dt>"Status"</dt>
                        <dd>{order.status().to_string()}</dd>
                    </dl>
                }
            })
        })
    };

    view! {
        <Show when=is_open>
            <div class="modal-backdrop">
                <div class="confirmation-modal" role="dialog" aria-label="Order Confirmed">
                    <h2>"Order Confirmed!"</h2>
                    <p>"Thank you for your purchase."</p>
                    {details}
                    <button
                        type="button"
                        on:click=move |_| transition(session, Storefront::dismiss_confirmation)
                    >
                        "Continue Shopping"
                    </button>
                </div>
            </div>
        </Show>
    }
}
