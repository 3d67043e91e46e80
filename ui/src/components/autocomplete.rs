use leptos::prelude::*;
use logo_search::config::Settings;
use logo_search::domain::{Submission, Suggestion};
use logo_search::download::DownloadRequest;
use logo_search::lookup::{BrandLookup, LookupRequest};
use logo_search::widget::Autocomplete as Model;
use wasm_bindgen::{JsCast, JsValue};

use super::presentation::{InputRow, SelectedLogo, SuggestionPanel, Wrapper};
use crate::api::GlooLookup;
use crate::storage::snapshot_store;

/// Brand search input with suggestions, selection and logo download.
///
/// State is restored from `localStorage` on mount and written back on every change.
#[component]
pub fn Autocomplete(
    /// Called once per form submission, never on row selection
    #[prop(into)]
    on_submit: Callback<Submission>,
    /// Input placeholder, defaults to the configured one
    #[prop(into, optional)]
    placeholder: Option<String>,
    /// Lookup service and storage namespace
    #[prop(optional)]
    settings: Option<Settings>,
) -> impl IntoView {
    let settings = settings.unwrap_or_default();
    let placeholder = placeholder.unwrap_or_else(|| settings.widget.placeholder.clone());
    let namespace = StoredValue::new(settings.storage.namespace.clone());
    let lookup = GlooLookup::new(settings.lookup.base_url.clone());

    let snapshot = match snapshot_store(&namespace.get_value()).and_then(|store| store.load()) {
        Ok(snapshot) => snapshot,
        Err(e) => {
            log::warn!("Failed to restore widget state: {}", e);
            Default::default()
        }
    };
    let (model, restore) = Model::mount(snapshot);
    let widget = RwSignal::new(model);

    let run_lookup = move |request: Option<LookupRequest>| {
        let Some(request) = request else {
            return;
        };
        let lookup = lookup.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = lookup.search(&request.query).await;
            widget.maybe_update(|w| w.apply_lookup(&request, result));
        });
    };

    // Mirror every change into storage
    Effect::new(move |_| {
        let snapshot = widget.with(|w| w.snapshot());
        let saved =
            snapshot_store(&namespace.get_value()).and_then(|mut store| store.save(&snapshot));
        if let Err(e) = saved {
            log::warn!("Failed to persist widget state: {}", e);
        }
    });

    run_lookup.clone()(restore);

    let on_input = {
        let run_lookup = run_lookup.clone();
        move |text: String| run_lookup(widget.try_update(|w| w.input(text)).flatten())
    };

    let submit = move |_: ()| {
        if let Some((submission, follow_up)) = widget.try_update(|w| w.submit()) {
            on_submit.run(submission);
            run_lookup(follow_up);
        }
    };

    let reset = move |_: ()| {
        widget.update(|w| w.reset());
        let cleared = snapshot_store(&namespace.get_value()).and_then(|mut store| store.clear());
        if let Err(e) = cleared {
            log::warn!("Failed to clear widget state: {}", e);
        }
    };

    let select = move |index: usize| {
        widget.update(|w| {
            if let Err(e) = w.select(index) {
                log::warn!("{}", e);
            }
        });
    };

    let download = move |_: ()| {
        if let Some(request) = widget.with(|w| w.download()) {
            if let Err(e) = trigger_download(&request) {
                log::warn!("Download of {} failed: {:?}", request.url, e);
            }
        }
    };

    let text = Signal::derive(move || widget.with(|w| w.text().to_string()));
    let suggestions = suggestion_list(widget);
    let selected = selected_logo(widget);

    view! {
        <Wrapper>
            <InputRow
                placeholder=placeholder
                text=text
                on_input=on_input
                on_clear=reset
                on_submit=submit
            />

            <Show when=move || widget.with(|w| w.panel_visible())>
                <SuggestionPanel suggestions=suggestions on_select=select/>
            </Show>

            {move || selected.get().map(|logo| view! {
                <SelectedLogo logo=logo on_download=download/>
            })}
        </Wrapper>
    }
}

/// Current suggestions; subscribers only re-run when the list itself changes
fn suggestion_list(widget: RwSignal<Model>) -> Memo<Vec<Suggestion>> {
    Memo::new(move |_| widget.with(|w| w.suggestions().to_vec()))
}

/// Picked logo; unaffected by typing or lookups
fn selected_logo(widget: RwSignal<Model>) -> Memo<Option<Suggestion>> {
    Memo::new(move |_| widget.with(|w| w.selected().cloned()))
}

/// Click a detached `<a download>` pointing at the logo
fn trigger_download(request: &DownloadRequest) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let link = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(JsValue::from)?;
    link.set_href(&request.url);
    link.set_download(&request.file_name);
    link.click();
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    fn nike() -> Suggestion {
        Suggestion::new("Nike", "nike.com", "https://logo/nike.png")
    }

    fn typed(widget: RwSignal<Model>, text: &str, found: Vec<Suggestion>) {
        let request: Option<LookupRequest> = widget.try_update(|w| w.input(text)).flatten();
        if let Some(request) = request {
            widget.update(|w| {
                w.apply_lookup(&request, Ok(found));
            });
        }
    }

    #[test]
    fn test_selected_logo_ignores_typing() {
        let owner = Owner::new();
        owner.with(|| {
            let widget = RwSignal::new(Model::default());
            typed(widget, "nike", vec![nike()]);
            widget.update(|w| {
                w.select(0).unwrap();
            });

            let selected = selected_logo(widget);
            let renders = Rc::new(Cell::new(0));
            let rendered = Memo::new({
                let renders = renders.clone();
                move |_| {
                    renders.set(renders.get() + 1);
                    selected.get()
                }
            });

            assert_eq!(rendered.get(), Some(nike()));
            assert_eq!(renders.get(), 1);

            typed(widget, "nikes", vec![nike()]);
            assert_eq!(rendered.get(), Some(nike()));
            assert_eq!(renders.get(), 1);

            widget.update(|w| w.reset());
            assert_eq!(rendered.get(), None);
            assert_eq!(renders.get(), 2);
        });
    }

    #[test]
    fn test_suggestion_list_follows_lookups() {
        let owner = Owner::new();
        owner.with(|| {
            let widget = RwSignal::new(Model::default());
            let suggestions = suggestion_list(widget);
            assert!(suggestions.get().is_empty());

            typed(widget, "nike", vec![nike()]);
            assert_eq!(suggestions.get(), vec![nike()]);
        });
    }
}
