//! Top navigation bar with the conditional logout button.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navbar is mounted once inside the router, so it owns the auth effects:
//! every route change re-reads the token store and flips the logout button.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;
use crate::util::auth::{client_session, install_auth_effects, settle};

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_auth_effects(auth);

    let on_logout = move |_| {
        if auth.with_untracked(AuthState::is_logged_in) {
            settle(auth, client_session().logout());
        }
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <A href="/">
                    <span class="navbar__brand">"Home"</span>
                </A>
                <Show when=move || auth.with(AuthState::is_logged_in)>
                    <div class="navbar__actions">
                        <button class="navbar__logout" type="button" on:click=on_logout>
                            "Logout"
                        </button>
                    </div>
                </Show>
            </div>
        </nav>
    }
}
