//! Static page footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p class="footer__text">"Gatehouse: signup, login and a private page."</p>
        </footer>
    }
}
