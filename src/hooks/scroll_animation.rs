use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Browsers can report a threshold crossing with a ratio a hair under the
/// threshold itself.
const RATIO_TOLERANCE: f64 = 1e-3;

/// Class on `<html>` that switches on the hidden start state of entrance
/// animations. Only present while IntersectionObserver is usable, so the page
/// stays readable without it.
pub const REVEAL_ROOT_CLASS: &str = "js-reveal";

/// One-way visibility flag: flips to `true` the first time the element is
/// seen at or above the threshold and stays there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityLatch {
    threshold: f64,
    visible: bool,
}

impl VisibilityLatch {
    pub fn new(threshold: f64) -> Self {
        let threshold = if threshold.is_nan() { DEFAULT_THRESHOLD } else { threshold.clamp(0.0, 1.0) };
        Self { threshold, visible: false }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one intersection report. Returns `true` only for the report
    /// that flips the latch.
    pub fn observe(&mut self, is_intersecting: bool, ratio: f64) -> bool {
        if self.visible || !is_intersecting || ratio + RATIO_TOLERANCE < self.threshold {
            return false;
        }
        self.visible = true;
        true
    }
}

/// Keeps the JS callback alive for as long as the observer exists and
/// disconnects it when dropped.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(target: &Element, threshold: f64, visible: UseStateSetter<bool>) -> Result<RevealObserver, JsValue> {
    let latch = Rc::new(RefCell::new(VisibilityLatch::new(threshold)));
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if latch.borrow_mut().observe(entry.is_intersecting(), entry.intersection_ratio()) {
                    visible.set(true);
                    // Nothing left to watch for once the latch is set
                    observer.disconnect();
                }
            }
        },
    );

    let mut options = IntersectionObserverInit::new();
    options.threshold(&JsValue::from_f64(latch_threshold(threshold)));
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    observer.observe(target);
    Ok(RevealObserver { observer, _callback: callback })
}

fn latch_threshold(threshold: f64) -> f64 {
    VisibilityLatch::new(threshold).threshold()
}

fn observer_supported() -> bool {
    web_sys::window()
        .map(|window| js_sys::Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

fn set_reveal_styles(enabled: bool) {
    let root = match web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    {
        Some(root) => root,
        None => return,
    };
    let classes = root.class_list();
    let result = if enabled {
        classes.add_1(REVEAL_ROOT_CLASS)
    } else {
        classes.remove_1(REVEAL_ROOT_CLASS)
    };
    if let Err(e) = result {
        log::debug!("Could not toggle {}: {:?}", REVEAL_ROOT_CLASS, e);
    }
}

/// Called once at startup. Without IntersectionObserver the root class is
/// never set and revealed content renders in its final state.
pub fn enable_reveal_styles() {
    if observer_supported() {
        set_reveal_styles(true);
    } else {
        log::debug!("IntersectionObserver missing, entrance animations disabled");
    }
}

/// Returns a ref to attach to the section and whether it has scrolled into
/// view yet. Without IntersectionObserver support the flag simply stays
/// `false` and the root class is dropped, so callers must only use it for
/// entrance animations.
#[hook]
pub fn use_scroll_animation(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let node = node.clone();
        let setter = visible.setter();
        use_effect_with_deps(
            move |threshold| {
                let observer = match node.cast::<Element>() {
                    Some(element) => match observe_once(&element, *threshold, setter) {
                        Ok(observer) => Some(observer),
                        Err(e) => {
                            log::debug!("IntersectionObserver unavailable, skipping reveal: {:?}", e);
                            set_reveal_styles(false);
                            None
                        }
                    },
                    None => None,
                };
                move || drop(observer)
            },
            threshold,
        );
    }

    (node, *visible)
}

#[hook]
pub fn use_scroll_animation_default() -> (NodeRef, bool) {
    use_scroll_animation(DEFAULT_THRESHOLD)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flips_once_when_ratio_reaches_threshold() {
        for threshold in [0.0, 0.1, 0.3, 0.5, 1.0] {
            let mut latch = VisibilityLatch::new(threshold);
            assert!(!latch.is_visible());

            if threshold > 0.0 {
                assert!(!latch.observe(true, threshold / 2.0));
                assert!(!latch.is_visible());
            }
            assert!(latch.observe(true, threshold));
            assert!(latch.is_visible());

            assert!(!latch.observe(true, 1.0));
            assert!(!latch.observe(false, 0.0));
            assert!(latch.is_visible());
        }
    }

    #[test]
    fn non_intersecting_reports_are_ignored() {
        let mut latch = VisibilityLatch::new(0.0);
        assert!(!latch.observe(false, 0.0));
        assert!(!latch.is_visible());
    }

    #[test]
    fn ratio_just_under_threshold_still_fires() {
        let mut latch = VisibilityLatch::new(0.3);
        assert!(!latch.observe(true, 0.29));
        assert!(latch.observe(true, 0.2999));
        assert!(latch.is_visible());
    }

    #[test]
    fn hidden_start_states_need_root_class() {
        let page = include_str!("../../index.html");
        for selector in [".reveal {", ".reveal.revealed {", ".hidden-until-reveal {"] {
            let gated = format!(".{} {}", REVEAL_ROOT_CLASS, selector);
            assert!(page.contains(&gated), "missing {}", gated);
        }
        // The only ungated `.reveal` rule is the transition.
        let bare = page.matches(".reveal {").count() - page.matches(&format!(".{} .reveal {{", REVEAL_ROOT_CLASS)).count();
        assert_eq!(bare, 1);
        assert_eq!(page.matches(".hidden-until-reveal {").count(), 1);
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(VisibilityLatch::new(-0.5).threshold(), 0.0);
        assert_eq!(VisibilityLatch::new(4.0).threshold(), 1.0);
        assert_eq!(VisibilityLatch::new(f64::NAN).threshold(), DEFAULT_THRESHOLD);
    }
}
