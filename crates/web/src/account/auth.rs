use std::future::Future;

use leptos::{prelude::*, reactive::owner::LocalStorage, task::spawn_local};
use storefront_app::{
    api::{ApiError, models::ApiMessage},
    auth::{
        AuthController, AuthField, AuthFormError, AuthFormKind, AuthService, FormErrors,
        HttpAuthService, LoginForm, OtpForm, Route, SignupForm, SubmitState,
    },
};

use crate::Page;

/// Controller signal of one form. Local storage, as the service wraps a
/// browser fetch client.
type Controller = RwSignal<AuthController<HttpAuthService>, LocalStorage>;

fn field_label(field: AuthField) -> &'static str {
    match field {
        AuthField::Name => "Name",
        AuthField::Email => "Email",
        AuthField::Password => "Password",
        AuthField::Otp => "OTP Code",
    }
}

fn input_type(field: AuthField) -> &'static str {
    match field {
        AuthField::Email => "email",
        AuthField::Password => "password",
        AuthField::Name | AuthField::Otp => "text",
    }
}

/// Start a submission; on success the request runs in the background and
/// `on_success` receives the next route.
fn submit<R, F>(
    controller: Controller,
    kind: AuthFormKind,
    errors: RwSignal<FormErrors>,
    on_success: Callback<Route>,
    begin: impl FnOnce(&mut AuthController<HttpAuthService>) -> Result<R, AuthFormError>,
    send: impl FnOnce(HttpAuthService, R) -> F,
) where
    F: Future<Output = Result<ApiMessage, ApiError>> + 'static,
{
    let Some(begun) = controller.try_update(begin) else {
        return;
    };

    match begun {
        Ok(request) => {
            errors.set(FormErrors::default());

            let Some(service) = controller.try_with_untracked(|controller| controller.service().clone())
            else {
                return;
            };

            let response = send(service, request);

            spawn_local(async move {
                let result = response.await;

                // Page left before the answer arrived.
                let Some(outcome) =
                    controller.try_update(|controller| controller.complete(kind, result))
                else {
                    return;
                };

                if let Ok(route) = outcome {
                    on_success.run(route);
                }
            });
        }
        Err(AuthFormError::Invalid(field_errors)) => errors.set(field_errors),
        Err(AuthFormError::InFlight | AuthFormError::Rejected(_)) => {}
    }
}

#[component]
fn AuthInput(field: AuthField, value: RwSignal<String>, errors: RwSignal<FormErrors>) -> impl IntoView {
    view! {
        <div class="auth-field">
            <label class="auth-label">{field_label(field)}</label>
            <input
                type=input_type(field)
                class="auth-input"
                prop:value=move || value.get()
                on:input=move |event| value.set(event_target_value(&event))
            />
            {move || {
                errors
                    .with(|errors| errors.get(field))
                    .map(|message| view! { <p class="auth-error">{message}</p> })
            }}
        </div>
    }
}

#[component]
fn SubmitButton(kind: AuthFormKind, controller: Controller) -> impl IntoView {
    let state = move || controller.with(AuthController::state);

    view! {
        {move || {
            controller
                .with(AuthController::form_error)
                .map(|message| view! { <p class="auth-form-error" role="alert">{message}</p> })
        }}
        <button type="submit" class="auth-submit" disabled=move || state() == SubmitState::Pending>
            {move || kind.submit_label(state())}
        </button>
    }
}

#[component]
pub fn SignupPage(
    service: HttpAuthService,
    on_success: Callback<Route>,
    navigate: Callback<Page>,
) -> impl IntoView {
    let controller = RwSignal::new_local(AuthController::new(service));
    let errors = RwSignal::new(FormErrors::default());
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |event: leptos::ev::SubmitEvent| {
        event.prevent_default();

        let form = SignupForm {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        };

        submit(
            controller,
            AuthFormKind::Signup,
            errors,
            on_success,
            |controller| controller.begin_signup(&form),
            |service, request| async move { service.register(request).await },
        );
    };

    view! {
        <main class="auth">
            <div class="auth-card">
                <h2 class="auth-title">"SignUp"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <AuthInput field=AuthField::Name value=name errors=errors />
                    <AuthInput field=AuthField::Email value=email errors=errors />
                    <AuthInput field=AuthField::Password value=password errors=errors />
                    <SubmitButton kind=AuthFormKind::Signup controller=controller />
                </form>
                <p class="auth-switch">
                    "Already have an account? "
                    <button type="button" on:click=move |_| navigate.run(Page::Login)>
                        "Login"
                    </button>
                </p>
            </div>
        </main>
    }
}

#[component]
pub fn LoginPage(
    service: HttpAuthService,
    on_success: Callback<Route>,
    navigate: Callback<Page>,
) -> impl IntoView {
    let controller = RwSignal::new_local(AuthController::new(service));
    let errors = RwSignal::new(FormErrors::default());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |event: leptos::ev::SubmitEvent| {
        event.prevent_default();

        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };

        submit(
            controller,
            AuthFormKind::Login,
            errors,
            on_success,
            |controller| controller.begin_login(&form),
            |service, request| async move { service.login(request).await },
        );
    };

    view! {
        <main class="auth">
            <div class="auth-card">
                <h2 class="auth-title">"Login"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <AuthInput field=AuthField::Email value=email errors=errors />
                    <AuthInput field=AuthField::Password value=password errors=errors />
                    <button type="button" class="auth-link" on:click=move |_| navigate.run(Page::Otp)>
                        "Forgot Password?"
                    </button>
                    <SubmitButton kind=AuthFormKind::Login controller=controller />
                </form>
                <p class="auth-switch">"Don't have an account?"</p>
                <button type="button" class="auth-secondary" on:click=move |_| navigate.run(Page::Signup)>
                    "Create Account"
                </button>
            </div>
        </main>
    }
}

#[component]
pub fn OtpPage(service: HttpAuthService, on_success: Callback<Route>) -> impl IntoView {
    let controller = RwSignal::new_local(AuthController::new(service));
    let errors = RwSignal::new(FormErrors::default());
    let otp = RwSignal::new(String::new());

    let on_submit = move |event: leptos::ev::SubmitEvent| {
        event.prevent_default();

        let form = OtpForm {
            otp: otp.get_untracked(),
        };

        submit(
            controller,
            AuthFormKind::Otp,
            errors,
            on_success,
            |controller| controller.begin_otp(&form),
            |service, request| async move { service.request_otp(request).await },
        );
    };

    view! {
        <main class="auth">
            <div class="auth-card">
                <h2 class="auth-title">"Enter OTP"</h2>
                <form class="auth-form" on:submit=on_submit>
                    <AuthInput field=AuthField::Otp value=otp errors=errors />
                    <SubmitButton kind=AuthFormKind::Otp controller=controller />
                </form>
            </div>
        </main>
    }
}
