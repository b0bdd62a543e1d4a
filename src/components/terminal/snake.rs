//! Snake game view shown in place of the input while a round runs.

use std::time::Duration;

use leptos::{ev, prelude::*};
use termfolio_core::config::snake::{BOARD_WIDTH, TICK_MS};
use termfolio_core::{GameStatus, KeyResponse};

use super::OutputLine;
use crate::app::{ActiveGame, AppContext};

stylance::import_crate_style!(css, "src/components/terminal/snake.module.css");

/// Routes a key press to the running game, if there is one.
fn apply_key(active: &mut Option<ActiveGame>, key: &str) -> KeyResponse {
    match active {
        Some(active) => active.game.handle_key(key),
        None => KeyResponse::Ignored,
    }
}

/// Random seed for food placement.
fn food_seed() -> u64 {
    (js_sys::Math::random() * f64::from(u32::MAX)) as u64
}

fn setup_key_listener(ctx: AppContext) {
    let handle = window_event_listener(ev::keydown, move |ev| {
        let response = ctx
            .game
            .try_update(|active| apply_key(active, &ev.key()))
            .unwrap_or(KeyResponse::Ignored);
        match response {
            KeyResponse::Handled => ev.prevent_default(),
            KeyResponse::Quit => {
                ev.prevent_default();
                ctx.finish_game();
            }
            KeyResponse::Ignored => {}
        }
    });
    on_cleanup(move || handle.remove());
}

fn setup_game_loop(ctx: AppContext) {
    let tick = move || {
        let playing = ctx.game.with_untracked(|active| {
            active
                .as_ref()
                .is_some_and(|active| active.game.status() == GameStatus::Playing)
        });
        if playing {
            let seed = food_seed();
            ctx.game.update(|active| {
                if let Some(active) = active {
                    active.game.tick(seed);
                }
            });
        }
    };

    match set_interval_with_handle(tick, Duration::from_millis(u64::from(TICK_MS))) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(e) => log::error!("snake timer failed to start: {e:?}"),
    }
}

#[component]
pub fn SnakeView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    setup_key_listener(ctx);
    setup_game_loop(ctx);

    let score = move || {
        ctx.game
            .with(|active| active.as_ref().map_or(0, |active| active.game.score()))
    };
    let cells = move || {
        ctx.game
            .with(|active| active.as_ref().map(|active| active.game.board()))
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .map(|cell| view! { <span class=css::cell>{cell}</span> })
            .collect_view()
    };
    let status = move || {
        ctx.game
            .with(|active| active.as_ref().map(|active| active.game.status_lines()))
            .unwrap_or_default()
            .into_iter()
            .map(|line| view! { <OutputLine line=line /> })
            .collect_view()
    };

    view! {
        <div class=css::game>
            <div class=css::title>"🐍 SNAKE GAME 🐍"</div>
            <div class=css::score>
                "Score: " <span class=css::scoreValue>{score}</span>
            </div>
            <div class=css::board style=format!("--cols: {BOARD_WIDTH}")>
                {cells}
            </div>
            {status}
        </div>
    }
}
