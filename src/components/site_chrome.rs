//! Header, mobile navigation and the page fade-in.

use std::time::Duration;

use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use super::events::WindowListener;

/// Scroll offset past which the header switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;
pub const FADE_IN: Duration = Duration::from_millis(500);

/// Adds `fade-in` to `<body>` and drops it again after [`FADE_IN`].
pub fn fade_in_body() {
	let Some(body) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.body())
	else {
		return;
	};
	let _ = body.class_list().add_1("fade-in");
	set_timeout(
		move || {
			let _ = body.class_list().remove_1("fade-in");
		},
		FADE_IN,
	);
}

fn is_scrolled() -> bool {
	web_sys::window()
		.and_then(|w| w.scroll_y().ok())
		.is_some_and(|y| y > SCROLLED_THRESHOLD)
}

#[component]
pub fn SiteHeader() -> impl IntoView {
	let (nav_open, set_nav_open) = signal(false);
	let (scrolled, set_scrolled) = signal(is_scrolled());
	let toggle_ref = NodeRef::<leptos::html::Button>::new();
	let links_ref = NodeRef::<leptos::html::Ul>::new();

	let scroll = StoredValue::new_local(None::<WindowListener>);
	on_cleanup(move || {
		scroll.try_update_value(|l| l.take());
	});
	Effect::new(move |_| {
		if scroll.with_value(Option::is_some) {
			return;
		}
		let listener = WindowListener::passive("scroll", move || set_scrolled.set(is_scrolled()));
		scroll.set_value(listener);
	});

	// Any click outside the toggle and the links closes the menu.
	let _ = window_event_listener(ev::click, move |ev| {
		let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok())
		else {
			return;
		};
		let inside = |el: Option<web_sys::Node>| el.is_some_and(|el| el.contains(Some(&target)));
		if !inside(toggle_ref.get_untracked().map(Into::into))
			&& !inside(links_ref.get_untracked().map(Into::into))
		{
			set_nav_open.set(false);
		}
	});

	let close = move |_: ev::MouseEvent| set_nav_open.set(false);

	view! {
		<header class="site-header" class:scrolled=move || scrolled.get()>
			<a class="site-title" href="/">"Skill Tree"</a>
			<button
				id="nav-toggle"
				class="nav-toggle"
				node_ref=toggle_ref
				aria-expanded=move || nav_open.get().to_string()
				on:click=move |_| set_nav_open.update(|open| *open = !*open)
			>
				"Menu"
			</button>
			<ul id="nav-links" class="nav-links" class:open=move || nav_open.get() node_ref=links_ref>
				<li><a href="/" on:click=close>"Home"</a></li>
				<li><a href="/talent" on:click=close>"Talent"</a></li>
			</ul>
		</header>
	}
}
