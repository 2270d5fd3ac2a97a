use leptos::prelude::*;

#[component]
pub fn Footer(name: String) -> impl IntoView {
    view! {
        <footer class="footer">
            <p>"© " {name} ". All rights reserved."</p>
            <p class="faint">"Built with Rust, Leptos & WebAssembly"</p>
        </footer>
    }
}
