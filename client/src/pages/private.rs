//! Token-gated private page.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount the page asks the session for the current user. No token means an
//! immediate redirect to `/login`; a failed fetch clears the token and does the
//! same. There is no cancellation. A response landing after the page is
//! disposed is not rendered (`try_set` on the dropped `user` signal), but it
//! still settles into the app-wide `AuthState`: a late failure has cleared the
//! token and queues a redirect to `/login` from the current page.

use authflow::User;
use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::util::auth::{client_session, settle};

#[component]
pub fn PrivatePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let user = RwSignal::new(None::<User>);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let view = client_session().load_private().await;
        if let Some(fetched) = auth.try_update(|state| state.follow_private(view)).flatten() {
            log::debug!("private view loaded for {}", fetched.email);
            user.try_set(Some(fetched));
        }
    });

    let on_logout = move |_| {
        user.set(None);
        settle(auth, client_session().logout());
    };

    view! {
        <section class="private-page">
            <h2>"Welcome to the private page"</h2>
            <Show
                when=move || user.with(Option::is_some)
                fallback=|| view! { <p class="private-page__loading">"Loading..."</p> }
            >
                <p class="private-page__greeting">
                    "Hello, "
                    {move || user.with(|u| u.as_ref().map(|u| u.email.clone()).unwrap_or_default())}
                </p>
                <button class="auth-button" type="button" on:click=on_logout>
                    "Log out"
                </button>
            </Show>
        </section>
    }
}
