//! Stateless building blocks of the autocomplete widget.
//!
//! Styles reference the `--*` custom properties emitted by
//! [`logo_search::tokens::stylesheet`], injected once by [`Wrapper`].

use leptos::prelude::*;
use logo_search::domain::Suggestion;
use logo_search::tokens;

const WRAPPER_STYLE: &str = "position: relative; width: 100%; max-width: 480px; margin: var(--space-40) auto; \
    font-family: sans-serif; font-size: var(--font-size-md); color: var(--color-black200);";

const FORM_STYLE: &str = "display: flex; align-items: center; gap: var(--space-10); \
    padding: var(--space-10) var(--space-15); background: var(--color-white100); \
    border: 1px solid var(--color-white400); border-radius: var(--radius-md);";

const INPUT_STYLE: &str = "flex: 1; border: none; outline: none; background: transparent; \
    font-size: var(--font-size-md); color: var(--color-black200);";

const ICON_LABEL_STYLE: &str = "display: flex; align-items: center; color: var(--color-black500);";

const CLEAR_LABEL_STYLE: &str = "display: flex; align-items: center; color: var(--color-black500); cursor: pointer;";

const PANEL_STYLE: &str = "position: absolute; left: 0; right: 0; margin-top: var(--space-5); \
    background: var(--color-white100); border: 1px solid var(--color-white400); \
    border-radius: var(--radius-md); box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08); z-index: 10;";

const LIST_STYLE: &str = "list-style: none; margin: 0; padding: var(--space-5) 0; max-height: 320px; overflow-y: auto;";

const ROW_STYLE: &str = "display: flex; align-items: center; gap: var(--space-10); \
    padding: var(--space-10) var(--space-15); cursor: pointer;";

const ROW_IMAGE_STYLE: &str = "width: var(--space-30); height: var(--space-30); flex-shrink: 0; \
    border-radius: var(--radius-sm); overflow: hidden; background: var(--color-white300);";

const ROW_NAME_STYLE: &str = "flex: 1; font-weight: 600; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;";

const ROW_DOMAIN_STYLE: &str = "font-size: var(--font-size-sm); color: var(--color-black400);";

const NOT_FOUND_STYLE: &str = "padding: var(--space-25) var(--space-20); text-align: center; \
    font-size: var(--font-size-sm); color: var(--color-black400);";

const SELECTED_STYLE: &str = "display: flex; flex-direction: column; align-items: center; gap: var(--space-10); \
    margin-top: var(--space-45); padding: var(--space-20); background: var(--color-white200); \
    border: 1px solid var(--color-white400); border-radius: var(--radius-md);";

const BUTTON_STYLE: &str = "padding: var(--space-10) var(--space-20); border: none; border-radius: var(--radius-md); \
    background: var(--color-black200); color: var(--color-white100); font-size: var(--font-size-sm); cursor: pointer;";

#[component]
pub fn Wrapper(children: Children) -> impl IntoView {
    view! {
        <div class="logo-search" style=WRAPPER_STYLE>
            <style>{tokens::stylesheet()}</style>
            {children()}
        </div>
    }
}

/// Search icon, text input and the clear icon (only while there is text)
#[component]
pub fn InputRow(
    #[prop(into)] placeholder: String,
    #[prop(into)] text: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    #[prop(into)] on_clear: Callback<()>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    view! {
        <form
            style=FORM_STYLE
            on:submit=move |ev| {
                ev.prevent_default();
                on_submit.run(());
            }
        >
            <label style=ICON_LABEL_STYLE>
                <SearchIcon size=16/>
            </label>
            <input
                type="text"
                style=INPUT_STYLE
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=move || !text.get().is_empty()>
                <label style=CLEAR_LABEL_STYLE on:click=move |_| on_clear.run(())>
                    <svg width="16" height="16" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"/>
                    </svg>
                </label>
            </Show>
        </form>
    }
}

/// Suggestion list, or the not-found placeholder when the list is empty
#[component]
pub fn SuggestionPanel(
    #[prop(into)] suggestions: Signal<Vec<Suggestion>>,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <div style=PANEL_STYLE>
            {move || {
                let items = suggestions.get();
                if items.is_empty() {
                    view! { <NotFound/> }.into_any()
                } else {
                    view! {
                        <ul style=LIST_STYLE>
                            {items.into_iter().enumerate().map(|(index, suggestion)| view! {
                                <SuggestionRow
                                    suggestion=suggestion
                                    on_click=move |_: ()| on_select.run(index)
                                />
                            }).collect::<Vec<_>>()}
                        </ul>
                    }.into_any()
                }
            }}
        </div>
    }
}

#[component]
pub fn SuggestionRow(
    suggestion: Suggestion,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    let label = suggestion.display_name().to_string();

    view! {
        <li style=ROW_STYLE on:click=move |_| on_click.run(())>
            <span style=ROW_IMAGE_STYLE>
                <img src=suggestion.icon alt=suggestion.name width="30" height="30"/>
            </span>
            <span style=ROW_NAME_STYLE>{label}</span>
            <span style=ROW_DOMAIN_STYLE>{suggestion.domain}</span>
        </li>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div style=NOT_FOUND_STYLE>
            <div style="margin-bottom: var(--space-10);">
                <SearchIcon size=28/>
            </div>
            <p style="font-weight: 700; margin: 0;">"Nothing found..."</p>
            <br/>
            <p style="margin: 0;">"Search by entering it’s website URL for better result."</p>
        </div>
    }
}

/// The picked logo with its download action
#[component]
pub fn SelectedLogo(
    logo: Suggestion,
    #[prop(into)] on_download: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="logo-container" style=SELECTED_STYLE>
            <img src=logo.icon alt=logo.name.clone() style="max-width: 128px; max-height: 128px;"/>
            <p class="logo-name" style="margin: 0; font-weight: 600;">{logo.name}</p>
            <button class="download-button" style=BUTTON_STYLE on:click=move |_| on_download.run(())>
                "Download Logo"
            </button>
        </div>
    }
}

#[component]
fn SearchIcon(size: u32) -> impl IntoView {
    let size = size.to_string();
    view! {
        <svg width=size.clone() height=size fill="none" stroke="currentColor" viewBox="0 0 24 24">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 21l-6-6m2-5a7 7 0 11-14 0 7 7 0 0114 0z"/>
        </svg>
    }
}
