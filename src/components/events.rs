//! Window-level listeners shared by the page components.

use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Window};

/// A passive window listener, unregistered when dropped.
///
/// The JS side only holds a reference to the wasm closure, so the two must
/// go away together.
pub struct WindowListener {
	window: Window,
	event: &'static str,
	cb: Closure<dyn FnMut()>,
}

impl WindowListener {
	/// Register `f` for `event` without blocking default handling.
	pub fn passive(event: &'static str, f: impl FnMut() + 'static) -> Option<Self> {
		let window = web_sys::window()?;
		let cb: Closure<dyn FnMut()> = Closure::new(f);
		let options = AddEventListenerOptions::new();
		options.set_passive(true);
		window
			.add_event_listener_with_callback_and_add_event_listener_options(
				event,
				cb.as_ref().unchecked_ref(),
				&options,
			)
			.ok()?;
		Some(Self { window, event, cb })
	}
}

impl Drop for WindowListener {
	fn drop(&mut self) {
		let _ = self.window.remove_event_listener_with_callback(
			self.event,
			self.cb.as_ref().unchecked_ref::<js_sys::Function>(),
		);
	}
}
