use leptos::prelude::*;
use termfolio_core::{Line, LogEntry, LogEntryData};

use crate::app::AppContext;
use crate::config::prompt;

stylance::import_crate_style!(css, "src/components/terminal/output.module.css");

/// Text color class for single-string line variants.
fn tone_class(line: &Line) -> &'static str {
    match line {
        Line::Error(_) => css::textRed,
        Line::Success(_) => css::textGreen,
        Line::Info(_) => css::textYellow,
        Line::Heading(_) => css::heading,
        _ => css::textFg,
    }
}

/// Typewriter timing for one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Reveal {
    delay_ms: u32,
    duration_ms: u32,
    /// Characters revealed, one animation step each.
    steps: u32,
}

impl Reveal {
    fn style(self) -> String {
        format!(
            "--type-delay: {}ms; --type-duration: {}ms; --type-steps: {}",
            self.delay_ms, self.duration_ms, self.steps
        )
    }
}

/// Lays the lines out one after another at `chars_per_sec`.
fn typing_schedule(lines: &[Line], chars_per_sec: u32) -> Vec<Reveal> {
    let speed = chars_per_sec.max(1);
    let mut delay_ms = 0;
    lines
        .iter()
        .map(|line| {
            let chars = line.plain_text().chars().count() as u32;
            let reveal = Reveal {
                delay_ms,
                duration_ms: chars.saturating_mul(1000) / speed,
                steps: chars.max(1),
            };
            delay_ms = delay_ms.saturating_add(reveal.duration_ms);
            reveal
        })
        .collect()
}

/// Typing speed when the animation is on.
fn typing_speed() -> Option<u32> {
    let ctx = use_context::<AppContext>()?;
    ctx.session.with_untracked(|session| {
        let prefs = session.preferences();
        prefs.typing_animation().then(|| prefs.typing_speed())
    })
}

/// One record of the output log: an echoed input line or a command's output.
#[component]
pub fn Output(entry: LogEntry) -> impl IntoView {
    match entry.data {
        LogEntryData::Input(raw) => view! {
            <div class=css::command>
                <span class=format!("{} glow", css::textYellow)>{prompt()}</span>
                <span class=css::textDim>" $ "</span>
                <span class=css::textFg>{raw}</span>
            </div>
        }
        .into_any(),
        LogEntryData::Output { lines, is_error } => {
            let block_class = if is_error {
                format!("{} {}", css::block, css::blockError)
            } else {
                css::block.to_string()
            };
            let Some(speed) = typing_speed() else {
                return view! {
                    <div class=block_class>
                        {lines.into_iter().map(|line| view! { <OutputLine line=line /> }).collect_view()}
                    </div>
                }
                .into_any();
            };

            let schedule = typing_schedule(&lines, speed);
            view! {
                <div class=block_class>
                    {lines
                        .into_iter()
                        .zip(schedule)
                        .map(|(line, reveal)| view! {
                            <div class=css::typed style=reveal.style()>
                                <OutputLine line=line />
                            </div>
                        })
                        .collect_view()}
                </div>
            }
            .into_any()
        }
    }
}

#[component]
pub fn OutputLine(line: Line) -> impl IntoView {
    let tone = tone_class(&line);
    match line {
        Line::Text(text)
        | Line::Error(text)
        | Line::Success(text)
        | Line::Info(text)
        | Line::Heading(text) => view! {
            <div class=format!("{} {}", css::line, tone)>{text}</div>
        }
        .into_any(),
        Line::Ascii(text) => view! {
            <pre class=format!("{} glow", css::ascii)>{text}</pre>
        }
        .into_any(),
        Line::Empty => view! {
            <div class=css::lineEmpty></div>
        }
        .into_any(),
        Line::Field { label, value } => view! {
            <div class=css::field>
                <span class=css::textCyan>{format!("{label}:")}</span>
                <span class=css::textFg>{value}</span>
            </div>
        }
        .into_any(),
        Line::Link { label, url } => {
            let href = url.clone();
            view! {
                <div class=css::field>
                    <span class=css::textCyan>{format!("{label}:")}</span>
                    <a class=css::link href=href target="_blank" rel="noopener noreferrer">
                        {url}
                    </a>
                </div>
            }
            .into_any()
        }
        Line::Entry { name, description } => view! {
            <div class=css::listEntry>
                <span class=format!("{} {}", css::textGreen, css::fontBold)>{name}</span>
                <span class=css::textDim>{description}</span>
            </div>
        }
        .into_any(),
    }
}
