use std::mem;

use jiff::tz::TimeZone;
use leptos::{prelude::*, task::spawn_local};
use storefront_app::{
    api::models::{OrderItemRecord, OrderRecord, ProfileRecord},
    profile::{
        HttpProfileService, ProfileCache, ProfileView,
        format::{
            NO_ORDERS, format_date, format_inr, image_or_placeholder, initials,
            item_count_label, order_number, orders_badge,
        },
        view::{LOADING_MESSAGE, UNAVAILABLE_MESSAGE, UNAVAILABLE_TITLE},
    },
};

const NO_ORDERS_HINT: &str = "When you place your first order, it will appear here.";

/// Profile page. Shows the loading state until the cache answers; a fresh
/// cached profile answers without a request.
#[component]
pub fn ProfilePage(service: HttpProfileService, cache: StoredValue<ProfileCache>) -> impl IntoView {
    let state = RwSignal::new(ProfileView::Loading);

    spawn_local(async move {
        let mut current = cache.try_update_value(mem::take).unwrap_or_default();
        let loaded = current.load(&service).await;

        cache.set_value(current);
        state.set(loaded);
    });

    view! {
        <main class="profile">
            {move || {
                state
                    .with(|current| match current {
                        ProfileView::Loading => {
                            view! { <p class="profile-loading">{LOADING_MESSAGE}</p> }.into_any()
                        }
                        ProfileView::Unavailable => {
                            view! {
                                <div class="profile-unavailable">
                                    <h3>{UNAVAILABLE_TITLE}</h3>
                                    <p>{UNAVAILABLE_MESSAGE}</p>
                                </div>
                            }
                                .into_any()
                        }
                        ProfileView::Loaded(profile) => {
                            view! { <ProfileDetails profile=profile.clone() /> }.into_any()
                        }
                    })
            }}
        </main>
    }
}

#[component]
fn ProfileDetails(profile: ProfileRecord) -> impl IntoView {
    let tz = TimeZone::system();
    let orders = if profile.orders.is_empty() {
        view! {
            <div class="profile-empty">
                <h3>{NO_ORDERS}</h3>
                <p>{NO_ORDERS_HINT}</p>
            </div>
        }
        .into_any()
    } else {
        profile
            .orders
            .iter()
            .map(|order| view! { <OrderCard order=order.clone() tz=tz.clone() /> })
            .collect_view()
            .into_any()
    };

    view! {
        <section class="profile-header">
            <span class="profile-avatar">{initials(&profile.user.name)}</span>
            <div>
                <h1>{format!("Welcome back, {}", profile.user.name)}</h1>
                <p class="profile-email">{profile.user.email.clone()}</p>
            </div>
            <span class="profile-badge">{orders_badge(profile.orders.len())}</span>
        </section>
        <section class="profile-orders">
            <h2>"Order History"</h2>
            {orders}
        </section>
    }
}

#[component]
fn OrderCard(order: OrderRecord, tz: TimeZone) -> impl IntoView {
    view! {
        <article class="order-card">
            <header class="order-card-header">
                <div>
                    <h3>{format!("Order #{}", order_number(&order.id))}</h3>
                    <p class="order-date">{format_date(order.placed_at, &tz)}</p>
                </div>
                <div class="order-card-total">
                    <strong>{format_inr(order.total_amount)}</strong>
                    <span>{item_count_label(order.items.len())}</span>
                </div>
            </header>
            <div class="order-items">
                {order
                    .items
                    .into_iter()
                    .map(|item| view! { <OrderItem item=item /> })
                    .collect_view()}
            </div>
        </article>
    }
}

#[component]
fn OrderItem(item: OrderItemRecord) -> impl IntoView {
    let image = image_or_placeholder(&item.image).to_string();

    view! {
        <div class="order-item">
            <img src=image alt=item.name.clone() />
            <div>
                <p class="order-item-name">{item.name.clone()}</p>
                <p class="order-item-meta">
                    <span>{format!("Qty: {}", item.quantity)}</span>
                    <span>{format_inr(item.price)}</span>
                </p>
                {item.color.map(|color| view! { <p class="order-item-color">{color}</p> })}
            </div>
        </div>
    }
}
