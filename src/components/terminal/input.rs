//! Terminal input component with autocompletion and history navigation.

use leptos::prelude::CollectView;
use leptos::{ev, prelude::*};
use termfolio_core::TabOutcome;
use wasm_bindgen::JsCast;

use super::hooks::{ListChange, SuggestionState};
use crate::utils::audio;

stylance::import_crate_style!(css, "src/components/terminal/input.module.css");

/// Direction of a history step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryStep {
    Previous,
    Next,
}

/// Length of `value` in UTF-16 code units, the unit of DOM selection offsets.
fn utf16_len(value: &str) -> u32 {
    value.encode_utf16().count() as u32
}

/// Terminal input field.
///
/// - Enter submits the line and closes the suggestion list
/// - ArrowUp/ArrowDown recall history
/// - Tab completes a unique match or toggles the suggestion list
/// - Escape closes the suggestion list
///
/// With `sound` on, typing keys click.
#[component]
pub fn Input(
    #[prop(into)] prompt: Signal<String>,
    #[prop(into)] sound: Signal<bool>,
    on_submit: Callback<String>,
    /// Returns the text to show for a history step from the current input.
    on_history_nav: Callback<(HistoryStep, String), String>,
    /// Returns the Tab outcome for the current input and what it does to the
    /// suggestion list.
    on_tab: Callback<String, (TabOutcome, ListChange)>,
    on_close_suggestions: Callback<()>,
) -> impl IntoView {
    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (input_value, set_input_value) = signal(String::new());
    let suggestions = SuggestionState::new();

    // Focus input on mount
    Effect::new(move || {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let move_cursor_to_end = move || {
        if let Some(input) = input_ref.get() {
            let len = utf16_len(&input.value());
            let _ = input.set_selection_range(len, len);
        }
    };

    let close_suggestions = move || {
        suggestions.hide();
        on_close_suggestions.run(());
    };

    let navigate = move |step: HistoryStep| {
        let recalled = on_history_nav.run((step, input_value.get_untracked()));
        set_input_value.set(recalled);
        move_cursor_to_end();
    };

    let handle_tab = move || {
        let (outcome, change) = on_tab.run(input_value.get_untracked());
        suggestions.apply(change);
        if outcome.should_update_input {
            set_input_value.set(outcome.completed);
            move_cursor_to_end();
        }
    };

    let handle_key = move |ev: ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            suggestions.hide();
            on_submit.run(input_value.get_untracked());
            set_input_value.set(String::new());
        }
        "ArrowUp" => {
            ev.prevent_default();
            navigate(HistoryStep::Previous);
        }
        "ArrowDown" => {
            ev.prevent_default();
            navigate(HistoryStep::Next);
        }
        "Tab" => {
            ev.prevent_default();
            handle_tab();
        }
        "Escape" => close_suggestions(),
        _ => {}
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if sound.get_untracked() && audio::is_typing_key(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
            audio::play_key_click();
        }
        handle_key(ev);
    };

    let handle_input = move |ev: ev::Event| {
        let Some(target) = ev.target() else { return };
        let input = target.unchecked_into::<web_sys::HtmlInputElement>();
        set_input_value.set(input.value());
    };

    let pick_suggestion = move |name: String| {
        set_input_value.set(name);
        close_suggestions();
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
        move_cursor_to_end();
    };

    let suggestions_view = move || {
        let items = suggestions.items.get();
        (!items.is_empty()).then(|| {
            view! {
                <div class=css::suggestions>
                    {items.into_iter().map(|name| {
                        let picked = name.clone();
                        view! {
                            <span
                                class=css::suggestion
                                on:click=move |ev: ev::MouseEvent| {
                                    ev.stop_propagation();
                                    pick_suggestion(picked.clone());
                                }
                            >
                                {name}
                            </span>
                        }
                    }).collect_view()}
                </div>
            }
        })
    };

    view! {
        <div class=css::inputWrapper>
            <div class=css::line>
                <span class=css::prompt>{prompt}</span>
                <span class=css::separator>" $ "</span>
                <input
                    node_ref=input_ref
                    type="text"
                    class=css::input
                    data-terminal-input=""
                    autocomplete="off"
                    spellcheck="false"
                    prop:value=input_value
                    on:input=handle_input
                    on:keydown=handle_keydown
                />
            </div>
            {suggestions_view}
        </div>
    }
}
