//! Key click sound effect through the Web Audio API.

use std::cell::RefCell;

use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

/// Seconds a click lasts.
const CLICK_SECONDS: f64 = 0.05;
const CLICK_GAIN: f32 = 0.1;
const CLICK_FLOOR_GAIN: f32 = 0.01;

thread_local! {
    // created on first use, since browsers only allow it after a user gesture
    static CONTEXT: RefCell<Option<AudioContext>> = const { RefCell::new(None) };
}

/// Whether a key press should make a click: printable characters plus
/// Backspace and Enter, but not shortcuts.
pub fn is_typing_key(key: &str, ctrl: bool, meta: bool) -> bool {
    if ctrl || meta {
        return false;
    }
    key.chars().count() == 1 || key == "Backspace" || key == "Enter"
}

/// Plays a short square-wave click with a little pitch jitter.
pub fn play_key_click() {
    if let Err(e) = CONTEXT.with(|cell| {
        let mut slot = cell.borrow_mut();
        if slot.is_none() {
            *slot = Some(AudioContext::new()?);
        }
        match slot.as_ref() {
            Some(ctx) => click(ctx),
            None => Ok(()),
        }
    }) {
        log::warn!("Failed to play key click: {e:?}");
    }
}

fn click(ctx: &AudioContext) -> Result<(), JsValue> {
    let oscillator = ctx.create_oscillator()?;
    let gain = ctx.create_gain()?;
    oscillator.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;

    oscillator.set_type(OscillatorType::Square);
    let pitch = 800.0 + js_sys::Math::random() * 200.0;
    oscillator.frequency().set_value(pitch as f32);

    let now = ctx.current_time();
    gain.gain().set_value_at_time(CLICK_GAIN, now)?;
    gain.gain()
        .exponential_ramp_to_value_at_time(CLICK_FLOOR_GAIN, now + CLICK_SECONDS)?;

    oscillator.start_with_when(now)?;
    oscillator.stop_with_when(now + CLICK_SECONDS)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_typing_key() {
        assert!(is_typing_key("a", false, false));
        assert!(is_typing_key(" ", false, false));
        assert!(is_typing_key("é", false, false));
        assert!(is_typing_key("Backspace", false, false));
        assert!(is_typing_key("Enter", false, false));

        assert!(!is_typing_key("k", true, false));
        assert!(!is_typing_key("c", false, true));
        assert!(!is_typing_key("Shift", false, false));
        assert!(!is_typing_key("ArrowUp", false, false));
        assert!(!is_typing_key("Tab", false, false));
    }
}
