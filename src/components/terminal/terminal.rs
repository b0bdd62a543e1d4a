//! Terminal view component.
//!
//! The output log plus the command input, wired to the session in
//! [`AppContext`].

use leptos::{ev, prelude::*};
use termfolio_core::TabOutcome;

use super::hooks::{ListChange, list_change};
use super::input::HistoryStep;
use crate::app::AppContext;
use crate::components::terminal::{Input, Output, SnakeView};
use crate::config::prompt;
use crate::utils::dom::focus_terminal_input;

stylance::import_crate_style!(css, "src/components/terminal/terminal.module.css");

/// Command submitted by the global clear shortcut.
const CLEAR_COMMAND: &str = "clear";

/// Cmd+K or Ctrl+K, in either case.
fn is_clear_shortcut(key: &str, ctrl: bool, meta: bool) -> bool {
    key.eq_ignore_ascii_case("k") && (ctrl || meta)
}

// ============================================================================
// Effect Setup Functions
// ============================================================================

/// Keeps the output scrolled to the newest entry.
fn setup_autoscroll_effect(ctx: AppContext, output_ref: NodeRef<leptos::html::Div>) {
    Effect::new(move || {
        ctx.session.track();
        if let Some(el) = output_ref.get() {
            el.set_scroll_top(el.scroll_height());
        }
    });
}

/// Installs the window-level Cmd/Ctrl+K listener for the component's lifetime.
fn setup_clear_shortcut(ctx: AppContext) {
    let handle = window_event_listener(ev::keydown, move |ev| {
        if is_clear_shortcut(&ev.key(), ev.ctrl_key(), ev.meta_key()) {
            // the browser binds Ctrl+K to its search bar
            ev.prevent_default();
            ctx.run_command(CLEAR_COMMAND);
        }
    });
    on_cleanup(move || handle.remove());
}

// ============================================================================
// Terminal Component
// ============================================================================

#[component]
pub fn Terminal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let output_ref = NodeRef::<leptos::html::Div>::new();

    setup_autoscroll_effect(ctx, output_ref);
    setup_clear_shortcut(ctx);

    let on_submit = create_submit_callback(ctx);
    let on_history_nav = create_history_nav_callback(ctx);
    let on_tab = create_tab_callback(ctx);
    let on_close_suggestions = Callback::new(move |_: ()| {
        ctx.session.update(|session| session.close_suggestions());
    });

    let entries = move || ctx.session.with(|session| session.entries().to_vec());
    let game_running = move || ctx.game.with(Option::is_some);
    let sound = Signal::derive(move || {
        ctx.session
            .with(|session| session.preferences().audio_enabled())
    });

    view! {
        <div class=css::container on:click=move |_| focus_terminal_input()>
            <div node_ref=output_ref class=css::output>
                <For
                    each=entries
                    key=|entry| entry.id
                    children=|entry| view! { <Output entry=entry /> }
                />
            </div>
            <div class=css::inputArea>
                <Show
                    when=game_running
                    fallback=move || view! {
                        <Input
                            prompt=Signal::derive(prompt)
                            sound=sound
                            on_submit=on_submit
                            on_history_nav=on_history_nav
                            on_tab=on_tab
                            on_close_suggestions=on_close_suggestions
                        />
                    }
                >
                    <SnakeView />
                </Show>
            </div>
        </div>
    }
}

// ============================================================================
// Callback Factories
// ============================================================================

fn create_submit_callback(ctx: AppContext) -> Callback<String> {
    Callback::new(move |input: String| ctx.run_command(&input))
}

fn create_history_nav_callback(ctx: AppContext) -> Callback<(HistoryStep, String), String> {
    Callback::new(move |(step, current): (HistoryStep, String)| {
        ctx.session
            .try_update(|session| match step {
                HistoryStep::Previous => session.navigate_previous(&current),
                HistoryStep::Next => session.navigate_next(&current),
            })
            .unwrap_or(current)
    })
}

fn create_tab_callback(ctx: AppContext) -> Callback<String, (TabOutcome, ListChange)> {
    Callback::new(move |input: String| {
        ctx.session
            .try_update(|session| {
                let outcome = session.handle_tab(&input);
                let items = if outcome.should_open {
                    session.suggestions(&input)
                } else {
                    Vec::new()
                };
                let change = list_change(&outcome, session.suggestions_open(), items);
                (outcome, change)
            })
            .unwrap_or_else(|| {
                let outcome = TabOutcome {
                    completed: input.clone(),
                    should_open: false,
                    should_update_input: false,
                };
                (outcome, ListChange::Keep)
            })
    })
}
