use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Default)]
struct LoopState {
    request_id: Option<i32>,
    callback: Option<Closure<dyn FnMut(f64)>>,
}

impl LoopState {
    fn schedule(&mut self) {
        let (Some(window), Some(callback)) = (web_sys::window(), self.callback.as_ref()) else {
            return;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => self.request_id = Some(id),
            Err(e) => log::debug!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

/// `requestAnimationFrame` loop owned by a component. The frame callback gets
/// the milliseconds elapsed since `start` and returns whether another frame is
/// wanted. Dropping the loop cancels any pending frame.
pub struct AnimationFrameLoop {
    state: Rc<RefCell<LoopState>>,
}

impl AnimationFrameLoop {
    pub fn start<F>(mut on_frame: F) -> Option<Self>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = web_sys::window()?;
        let mut started_at = window.performance().map(|p| p.now());

        let state = Rc::new(RefCell::new(LoopState::default()));
        let weak: Weak<RefCell<LoopState>> = Rc::downgrade(&state);
        let callback = Closure::<dyn FnMut(f64)>::new(move |timestamp: f64| {
            let Some(state) = weak.upgrade() else {
                return;
            };
            let start = *started_at.get_or_insert(timestamp);
            let keep_going = on_frame((timestamp - start).max(0.0));

            let mut state = state.borrow_mut();
            state.request_id = None;
            if keep_going {
                state.schedule();
            }
        });

        {
            let mut state = state.borrow_mut();
            state.callback = Some(callback);
            state.schedule();
        }
        Some(Self { state })
    }
}

impl Drop for AnimationFrameLoop {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        if let (Some(id), Some(window)) = (state.request_id.take(), web_sys::window()) {
            let _ = window.cancel_animation_frame(id);
        }
        state.callback = None;
    }
}
