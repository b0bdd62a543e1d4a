//! Root application module.
//!
//! Contains the main App component and the [`AppContext`] that carries the
//! terminal session through the component tree.

use std::sync::Arc;

use leptos::prelude::*;
use termfolio_core::{
    CommandRegistry, DeferredTask, Followup, KeyValueStore, MemoryStore, SessionConfig,
    SnakeGame, TerminalSession, Theme, builtin_registry,
};

use crate::components::terminal::Terminal;
use crate::utils::{LocalStorage, dom, fetch_weather};

stylance::import_crate_style!(css, "src/app.module.css");

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `use_context::<AppContext>()`. The session owns the output log, history,
/// autocomplete state and preferences; components only send it events.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: RwSignal<TerminalSession>,
    /// The running `snake` round, if any. The input is hidden while set.
    pub game: RwSignal<Option<ActiveGame>>,
}

/// A Snake round and the placeholder entry it resolves when the player leaves.
#[derive(Clone, Debug)]
pub struct ActiveGame {
    pub entry_id: usize,
    pub game: SnakeGame,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(new_session()),
            game: RwSignal::new(None),
        }
    }

    /// Submits one input line and carries out whatever the command asked
    /// the display to do afterwards.
    pub fn run_command(&self, raw: &str) {
        let followup = self
            .session
            .try_update(|session| session.handle_command(raw))
            .flatten();
        if let Some(followup) = followup {
            self.dispatch(followup);
        }
    }

    fn dispatch(&self, followup: Followup) {
        match followup {
            Followup::OpenUrl(url) => {
                dom::open_in_new_tab(&url);
            }
            Followup::Deferred { entry_id, task } => match task {
                DeferredTask::Weather { city } => {
                    let session = self.session;
                    wasm_bindgen_futures::spawn_local(async move {
                        let (lines, is_error) = fetch_weather(&city).await;
                        session.update(|session| {
                            session.resolve_deferred(entry_id, lines, is_error);
                        });
                    });
                }
                DeferredTask::Snake => {
                    self.game.set(Some(ActiveGame {
                        entry_id,
                        game: SnakeGame::new(),
                    }));
                }
            },
        }
    }

    /// Ends the running game and replaces its placeholder with the summary.
    pub fn finish_game(&self) {
        let Some(active) = self.game.try_update(Option::take).flatten() else {
            return;
        };
        let lines = active.game.summary_lines();
        self.session.update(|session| {
            if !session.resolve_deferred(active.entry_id, lines, false) {
                log::debug!("snake entry {} already cleared", active.entry_id);
            }
        });
    }

    pub fn theme(&self) -> Theme {
        self.session.with(|session| session.preferences().theme())
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the session over localStorage, or an in-memory store when the
/// browser refuses storage access.
fn new_session() -> TerminalSession {
    let store: Arc<dyn KeyValueStore> = if LocalStorage::is_available() {
        Arc::new(LocalStorage)
    } else {
        log::warn!("localStorage unavailable; preferences will not persist");
        Arc::new(MemoryStore::new())
    };

    let registry = builtin_registry(store.clone()).unwrap_or_else(|e| {
        log::error!("built-in command table rejected: {e}");
        CommandRegistry::new()
    });

    TerminalSession::new(Arc::new(registry), store, SessionConfig::default())
}

/// Container class for a theme.
fn theme_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => css::themeDark,
        Theme::Light => css::themeLight,
        Theme::Hacker => css::themeHacker,
    }
}

/// Root application component with error boundary.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    let container_class = move || format!("{} {}", css::app, theme_class(ctx.theme()));
    let matrix = move || {
        ctx.session
            .with(|session| session.preferences().matrix_enabled())
            .to_string()
    };

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class=css::errorPage>
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <div class=container_class data-matrix=matrix>
                <Terminal />
            </div>
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_classes_are_distinct() {
        let classes: Vec<&str> = Theme::ALL.into_iter().map(theme_class).collect();
        assert!(classes.iter().all(|class| !class.is_empty()));
        assert_ne!(classes[0], classes[1]);
        assert_ne!(classes[1], classes[2]);
        assert_ne!(classes[0], classes[2]);
    }

    #[test]
    fn test_matrix_attribute_is_styled() {
        let selector = format!(".app[data-matrix=\"{}\"]", true);
        assert!(include_str!("app.module.css").contains(&selector));
    }

    #[test]
    fn test_theme_class_tracks_name() {
        assert!(theme_class(Theme::Hacker).starts_with("themeHacker"));
        assert!(theme_class(Theme::Light).starts_with("themeLight"));
    }
}
