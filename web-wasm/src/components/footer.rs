use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"🌿 Genfarm - Helping plants thrive with AI technology"</p>
        </footer>
    }
}
