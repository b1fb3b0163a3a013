//! Signup page: email, password and confirmation.
//!
//! A mismatched confirmation is caught by `authflow::Session::submit_signup`
//! before any request leaves the browser.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;

#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let pending = move || auth.with(|state| state.pending);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.with_untracked(|state| state.pending) {
            return;
        }
        auth.update(|state| state.pending = true);

        #[cfg(feature = "hydrate")]
        {
            let form = authflow::SignupForm::new(
                email.get_untracked(),
                password.get_untracked(),
                confirm_password.get_untracked(),
            );
            leptos::task::spawn_local(async move {
                let outcome = crate::util::auth::client_session().submit_signup(&form).await;
                crate::util::auth::settle(auth, outcome);
            });
        }
    };

    view! {
        <div class="auth-page auth-page--signup">
            <form class="auth-form" on:submit=on_submit>
                <h2 class="auth-form__title">"Signup"</h2>
                <input
                    class="auth-input"
                    type="email"
                    placeholder="Email here"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Password here"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <input
                    class="auth-input"
                    type="password"
                    placeholder="Confirm password"
                    required
                    prop:value=move || confirm_password.get()
                    on:input=move |ev| confirm_password.set(event_target_value(&ev))
                />
                <button class="auth-button" type="submit" disabled=pending>
                    "Create account"
                </button>
            </form>
            <A href="/login">"Login"</A>
        </div>
    }
}
