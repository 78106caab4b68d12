use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

const TILT: &str = "perspective(1000px) rotateY(-8deg) rotateX(2deg) scale(1)";
const LARGE_SCREEN_MIN_WIDTH: f64 = 640.0;

pub fn transform_for_width(width: f64) -> &'static str {
    if width >= LARGE_SCREEN_MIN_WIDTH {
        TILT
    } else {
        ""
    }
}

fn current_transform() -> &'static str {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .map(transform_for_width)
        .unwrap_or("")
}

/// CSS transform for the hero phone mockup, tilted only on wider screens.
#[hook]
pub fn use_responsive_transform() -> String {
    let transform = use_state(String::new);

    {
        let transform = transform.clone();
        use_effect_with_deps(
            move |_| {
                transform.set(current_transform().to_string());

                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let transform = transform.clone();
                        move || transform.set(current_transform().to_string())
                    });
                    match window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref()) {
                        Ok(()) => Box::new(move || {
                            let _ = window.remove_event_listener_with_callback(
                                "resize",
                                callback.as_ref().unchecked_ref(),
                            );
                        }),
                        Err(e) => {
                            log::debug!("Could not listen for resize: {:?}", e);
                            Box::new(|| ())
                        }
                    }
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    (*transform).clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilts_only_from_small_breakpoint_up() {
        assert_eq!(transform_for_width(639.0), "");
        assert_eq!(transform_for_width(640.0), TILT);
        assert_eq!(transform_for_width(1440.0), TILT);
    }
}
