//! Login page: email + password form posting to the auth API.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;

fn submit_label(pending: bool) -> &'static str {
    if pending { "Signing in..." } else { "Sign in" }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = move || auth.with(|state| state.pending);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.with_untracked(|state| state.pending) {
            return;
        }
        auth.update(|state| state.pending = true);

        #[cfg(feature = "hydrate")]
        {
            let credentials =
                authflow::Credentials::new(email.get_untracked(), password.get_untracked());
            leptos::task::spawn_local(async move {
                let outcome = crate::util::auth::client_session().submit_login(credentials).await;
                crate::util::auth::settle(auth, outcome);
            });
        }
    };

    view! {
        <div class="auth-page">
            <form class="auth-form" on:submit=on_submit>
                <h2>"Sign in"</h2>
                <label class="auth-form__field">
                    "Email"
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        required
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__field">
                    "Password"
                    <input
                        class="auth-input"
                        type="password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="auth-button" type="submit" disabled=pending>
                    {move || submit_label(pending())}
                </button>
                <A href="/signup">"No account? Sign up"</A>
            </form>
        </div>
    }
}
