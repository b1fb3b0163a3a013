//! Landing page linking to the auth forms.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <h1>"Gatehouse"</h1>
            <p>"Create an account or sign in to reach the private page."</p>
            <div class="home-page__links">
                <A href="/login">"Login"</A>
                <A href="/signup">"Signup"</A>
                <A href="/private">"Private"</A>
            </div>
        </section>
    }
}
