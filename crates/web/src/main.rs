//! Storefront web application

use std::sync::Arc;

use leptos::prelude::*;
use rusty_money::iso::USD;
use storefront::{
    catalog::{Catalog, Collection},
    checkout::Storefront,
};
use storefront_app::{auth::Route, profile::ProfileCache};
use tracing::level_filters::LevelFilter;

mod account;
mod landing;
mod logging;
mod shop;

/// Top-level pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Landing,
    Shop,
    NewArrivals,
    Profile,
    Login,
    Signup,
    Otp,
}

impl Page {
    /// Pages linked from the header.
    const NAV: [Page; 5] = [
        Page::Landing,
        Page::Shop,
        Page::NewArrivals,
        Page::Profile,
        Page::Login,
    ];

    fn label(self) -> &'static str {
        match self {
            Page::Landing => "HOME",
            Page::Shop => "SHOP",
            Page::NewArrivals => "NEW ARRIVALS",
            Page::Profile => "PROFILE",
            Page::Login => "LOGIN",
            Page::Signup => "SIGN UP",
            Page::Otp => "RESET PASSWORD",
        }
    }
}

impl From<Route> for Page {
    fn from(route: Route) -> Self {
        match route {
            Route::Landing | Route::Home => Page::Landing,
            // No reset form exists; a verified OTP goes back to login.
            Route::ResetPassword => Page::Login,
        }
    }
}

/// Bundled catalogs.
#[derive(Debug)]
struct Catalogs {
    shop: Arc<Catalog>,
    new_arrivals: Arc<Catalog>,
}

impl Catalogs {
    fn load() -> Result<Self, String> {
        let shop = Collection::Shop
            .load()
            .map_err(|error| format!("Failed to load shop catalog: {error}"))?;

        let new_arrivals = Collection::NewArrivals
            .load()
            .map_err(|error| format!("Failed to load new arrivals catalog: {error}"))?;

        Ok(Self {
            shop: Arc::new(shop),
            new_arrivals: Arc::new(new_arrivals),
        })
    }
}

/// Main app shell.
#[component]
fn App() -> impl IntoView {
    let loaded = Catalogs::load().and_then(|catalogs| {
        let account = account::Account::connect(&account::api_config())
            .map_err(|error| format!("Failed to set up the API client: {error}"))?;

        Ok((catalogs, account))
    });

    match loaded {
        Ok((catalogs, account)) => {
            let page = RwSignal::new(Page::Landing);
            let session = RwSignal::new(Storefront::new(USD));
            let profile_cache = StoredValue::new(ProfileCache::new());

            let navigate = Callback::new(move |target: Page| page.set(target));
            let follow = Callback::new(move |route: Route| page.set(Page::from(route)));
            let signed_in = Callback::new(move |route: Route| {
                profile_cache.update_value(ProfileCache::invalidate);
                page.set(Page::from(route));
            });

            view! {
                <header class="site-header">
                    <nav class="site-nav">
                        {Page::NAV
                            .into_iter()
                            .map(|target| {
                                view! {
                                    <button
                                        type="button"
                                        class="site-nav-link"
                                        class:active=move || page.get() == target
                                        on:click=move |_| page.set(target)
                                    >
                                        {target.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </nav>
                    <shop::CartButton session=session />
                </header>
                {move || match page.get() {
                    Page::Landing => view! { <landing::LandingPage /> }.into_any(),
                    Page::Shop => {
                        view! { <shop::ShopPage catalog=Arc::clone(&catalogs.shop) session=session /> }
                            .into_any()
                    }
                    Page::NewArrivals => {
                        view! {
                            <shop::ShopPage
                                catalog=Arc::clone(&catalogs.new_arrivals)
                                session=session
                            />
                        }
                            .into_any()
                    }
                    Page::Profile => {
                        view! {
                            <account::ProfilePage
                                service=account.profile.clone()
                                cache=profile_cache
                            />
                        }
                            .into_any()
                    }
                    Page::Login => {
                        view! {
                            <account::LoginPage
                                service=account.auth.clone()
                                on_success=signed_in
                                navigate=navigate
                            />
                        }
                            .into_any()
                    }
                    Page::Signup => {
                        view! {
                            <account::SignupPage
                                service=account.auth.clone()
                                on_success=follow
                                navigate=navigate
                            />
                        }
                            .into_any()
                    }
                    Page::Otp => {
                        view! { <account::OtpPage service=account.auth.clone() on_success=follow /> }
                            .into_any()
                    }
                }}
                <shop::CartPanel session=session />
                <shop::CheckoutModal session=session />
                <shop::OrderConfirmation session=session />
            }
            .into_any()
        }
        Err(error_message) => view! {
            <main class="min-h-screen bg-white px-4 py-6 text-black">
                <div class="mx-auto max-w-3xl rounded-lg border border-red-200 bg-red-50 p-4">
                    <p class="text-sm text-red-700">{error_message}</p>
                </div>
            </main>
        }
        .into_any(),
    }
}

fn main() {
    console_error_panic_hook::set_once();

    _ = logging::init(LevelFilter::INFO);

    leptos::mount::mount_to_body(App);
}
