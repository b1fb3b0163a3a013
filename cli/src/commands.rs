//! Subcommands mapped onto the shared auth flows.
//!
//! Alerts become `CliError::Alert` so the process exits non-zero with the same
//! text the browser would show.

#[cfg(test)]
#[path = "commands_test.rs"]
mod commands_test;

use authflow::{AuthApi, AuthEvent, Credentials, Outcome, PrivateView, Session, SignupForm, TokenStore};
use clap::Subcommand;

use crate::CliError;

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Create an account.
    Signup {
        #[arg(long)]
        email: String,
        #[arg(long, env = "GATEHOUSE_PASSWORD")]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Log in and store the token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "GATEHOUSE_PASSWORD")]
        password: String,
    },
    /// Fetch the private page with the stored token.
    Private,
    /// Forget the stored token.
    Logout,
    /// Report whether a token is stored.
    Status,
}

pub(crate) async fn run<S, A>(session: &Session<S, A>, command: Command) -> Result<String, CliError>
where
    S: TokenStore,
    A: AuthApi,
{
    match command {
        Command::Signup { email, password, confirm_password } => {
            let form = SignupForm::new(email, password, confirm_password);
            match session.submit_signup(&form).await {
                Outcome::Navigate { .. } => Ok("account created; run `login` next".to_owned()),
                Outcome::Alert(message) => Err(CliError::Alert(message)),
            }
        }
        Command::Login { email, password } => {
            match session.submit_login(Credentials::new(email.clone(), password)).await {
                Outcome::Navigate { .. } => Ok(format!("logged in as {email}")),
                Outcome::Alert(message) => Err(CliError::Alert(message)),
            }
        }
        Command::Private => match session.load_private().await {
            PrivateView::Render(user) => Ok(serde_json::to_string_pretty(&user)?),
            PrivateView::Redirect { event: Some(AuthEvent::FetchFailed), .. } => {
                Err(CliError::TokenRejected)
            }
            PrivateView::Redirect { .. } => Err(CliError::NotLoggedIn),
        },
        Command::Logout => {
            session.logout();
            Ok("logged out".to_owned())
        }
        Command::Status => {
            let status = if session.observer().is_logged_in() { "logged in" } else { "logged out" };
            Ok(status.to_owned())
        }
    }
}
