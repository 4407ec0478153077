use clap::{Args, Subcommand};
use storefront_app::{
    api::ApiClient,
    auth::{
        AuthController, AuthFormError, HttpAuthService, LoginForm, OtpForm, Route, SignupForm,
    },
    config::ApiConfig,
};

#[derive(Debug, Args)]
pub(crate) struct AuthCommand {
    #[command(flatten)]
    api: ApiConfig,

    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Debug, Subcommand)]
enum AuthSubcommand {
    /// Create an account
    Register(RegisterArgs),

    /// Sign in
    Login(LoginArgs),

    /// Submit a password-reset OTP
    Otp(OtpArgs),
}

#[derive(Debug, Args)]
struct RegisterArgs {
    /// Display name
    #[arg(long, default_value = "")]
    name: String,

    /// Email address
    #[arg(long, default_value = "")]
    email: String,

    /// Password
    #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true, default_value = "")]
    password: String,
}

#[derive(Debug, Args)]
struct LoginArgs {
    /// Email address
    #[arg(long, default_value = "")]
    email: String,

    /// Password
    #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true, default_value = "")]
    password: String,
}

#[derive(Debug, Args)]
struct OtpArgs {
    /// One-time password
    #[arg(long, default_value = "")]
    otp: String,
}

pub(crate) async fn run(command: AuthCommand) -> Result<(), String> {
    let client =
        ApiClient::new(&command.api).map_err(|error| format!("failed to build client: {error}"))?;

    let mut controller = AuthController::new(HttpAuthService::new(client));

    let result = match command.command {
        AuthSubcommand::Register(args) => {
            controller
                .signup(&SignupForm {
                    name: args.name,
                    email: args.email,
                    password: args.password,
                })
                .await
        }
        AuthSubcommand::Login(args) => {
            controller
                .login(&LoginForm {
                    email: args.email,
                    password: args.password,
                })
                .await
        }
        AuthSubcommand::Otp(args) => controller.verify_otp(&OtpForm { otp: args.otp }).await,
    };

    report(result)
}

/// Sign in on `client`, so later requests through it carry the session.
pub(super) async fn sign_in(client: ApiClient, form: &LoginForm) -> Result<(), String> {
    let mut controller = AuthController::new(HttpAuthService::new(client));

    controller.login(form).await.map(drop).map_err(describe)
}

fn report(result: Result<Route, AuthFormError>) -> Result<(), String> {
    let route = result.map_err(describe)?;

    println!("ok, continue to {route}");

    Ok(())
}

fn describe(error: AuthFormError) -> String {
    match error {
        AuthFormError::Invalid(errors) => errors
            .iter()
            .map(|error| format!("{}: {}", error.field, error.message))
            .collect::<Vec<_>>()
            .join("\n"),
        error @ (AuthFormError::InFlight | AuthFormError::Rejected(_)) => error.to_string(),
    }
}
