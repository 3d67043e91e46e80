use leptos::prelude::*;
use logo_search::domain::Submission;

mod api;
mod components;
mod storage;

pub use components::autocomplete::Autocomplete;

#[component]
pub fn App() -> impl IntoView {
    // `query` stays empty until suggestions can be submitted by click
    let handle_submit = move |submission: Submission| {
        log::info!(
            "submitted {:?} (query: {:?}, {} suggestions)",
            submission.value,
            submission.query.as_ref().map(|q| &q.domain),
            submission.queries.len()
        );
    };

    view! {
        <div class="App">
            <Autocomplete
                on_submit=handle_submit
                placeholder="Enter a brand to get started..."
            />
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(App);
}
