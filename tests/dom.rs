#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use skill_tree_widget::components::events::WindowListener;
use skill_tree_widget::components::skill_tree::{
	CONTAINER_ID, ClickOutcome, DomSurface, SVG_ID, SkillGraph, SkillTree, SkillTreeConfig,
	SkillTreeView, TreeSurface,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
	web_sys::window().unwrap().document().unwrap()
}

/// Removes its element from the page when dropped, even if the test panicked.
struct Mounted(Element);

impl Drop for Mounted {
	fn drop(&mut self) {
		self.0.remove();
	}
}

/// Container with a drawing surface and one element per id in `ids`.
fn mount(ids: &[&str]) -> Mounted {
	let doc = document();
	let container = doc.create_element("div").unwrap();
	let mounted = Mounted(container.clone());
	container.set_id(CONTAINER_ID);
	container
		.set_attribute("style", "position: relative; width: 440px; height: 440px;")
		.unwrap();

	let svg = doc
		.create_element_ns(Some("http://www.w3.org/2000/svg"), "svg")
		.unwrap();
	svg.set_id(SVG_ID);
	container.append_child(&svg).unwrap();

	for id in ids {
		let node = doc.create_element("div").unwrap();
		node.set_id(id);
		node.set_attribute("style", "position: absolute; width: 40px; height: 40px;")
			.unwrap();
		let title = doc.create_element("span").unwrap();
		title.set_class_name("node-title");
		title.set_text_content(Some(&format!("  {id} skill ")));
		node.append_child(&title).unwrap();
		container.append_child(&node).unwrap();
	}

	doc.body().unwrap().append_child(&container).unwrap();
	mounted
}

fn line_count() -> u32 {
	// minus the <defs> child
	document()
		.get_element_by_id(SVG_ID)
		.unwrap()
		.child_element_count()
		- 1
}

fn attached(ids: &[&str]) -> (Mounted, SkillTree<DomSurface>) {
	let mounted = mount(ids);
	let surface = DomSurface::from_document(&document()).unwrap();
	let mut tree = SkillTree::new(SkillGraph::seed(), SkillTreeConfig::default(), surface);
	tree.attach();
	(mounted, tree)
}

fn fire(event: &str) {
	let window = web_sys::window().unwrap();
	window.dispatch_event(&Event::new(event).unwrap()).unwrap();
}

/// Resolves after pending effects and microtasks have run.
async fn next_task() {
	let promise = js_sys::Promise::new(&mut |resolve, _| {
		let _ = web_sys::window()
			.unwrap()
			.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, 0);
	});
	JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn missing_surface_disables_widget() {
	let empty = Document::new().unwrap();
	assert!(DomSurface::from_document(&empty).is_none());
}

#[wasm_bindgen_test]
fn attach_positions_roots_and_hides_the_rest() {
	let (_mounted, tree) = attached(&["node1", "node2", "node3"]);
	let node2: HtmlElement = document()
		.get_element_by_id("node2")
		.unwrap()
		.dyn_into()
		.unwrap();
	assert_eq!(node2.style().get_property_value("display").unwrap(), "flex");
	assert_eq!(node2.style().get_property_value("left").unwrap(), "288px");
	assert_eq!(node2.title(), "node2 skill");

	assert!(tree.surface.node_center("node3").is_none());
	assert_eq!(line_count(), 0);
}

#[wasm_bindgen_test]
fn clicking_draws_lines_and_counts() {
	let (_mounted, mut tree) = attached(&["node1", "node2", "node3", "node4", "node5"]);

	assert_eq!(tree.click("node1"), ClickOutcome::Highlighted);
	// node1 -> 3, 4, 5 plus node2 -> 5
	assert_eq!(line_count(), 4);

	let node1 = document().get_element_by_id("node1").unwrap();
	assert!(node1.class_list().contains("highlighted"));
	assert!(node1.class_list().contains("pop"));
	let counter = node1.query_selector(".node-counter").unwrap().unwrap();
	assert_eq!(counter.text_content().as_deref(), Some("1"));

	for _ in 0..6 {
		tree.click("node1");
	}
	assert_eq!(counter.text_content().as_deref(), Some("5"));

	let center = tree.surface.node_center("node1").unwrap();
	assert_eq!((center.x, center.y), (96.0 + 20.0, 20.0));
}

#[wasm_bindgen_test]
fn dropped_window_listener_stops_firing() {
	let hits = Rc::new(Cell::new(0));
	let counter = hits.clone();
	let listener =
		WindowListener::passive("skill-tree-ping", move || counter.set(counter.get() + 1))
			.unwrap();

	fire("skill-tree-ping");
	assert_eq!(hits.get(), 1);

	drop(listener);
	fire("skill-tree-ping");
	assert_eq!(hits.get(), 1);
}

#[wasm_bindgen_test]
async fn unmounted_view_leaves_no_window_listeners() {
	let host: HtmlElement = document().create_element("div").unwrap().dyn_into().unwrap();
	let _mounted = Mounted(host.clone().into());
	document().body().unwrap().append_child(&host).unwrap();

	// A listener left behind after unmount throws, which the page reports as an error event.
	let errors = Rc::new(Cell::new(0));
	let seen = errors.clone();
	let _on_error = WindowListener::passive("error", move || seen.set(seen.get() + 1)).unwrap();

	for _ in 0..2 {
		let handle = leptos::mount::mount_to(host.clone(), || view! { <SkillTreeView /> });
		next_task().await;

		let node1 = document().get_element_by_id("node1").unwrap();
		assert!(node1.query_selector(".node-counter").unwrap().is_some());
		fire("scroll");
		fire("resize");

		drop(handle);
		next_task().await;
		assert!(document().get_element_by_id(CONTAINER_ID).is_none());

		fire("scroll");
		fire("resize");
	}

	assert_eq!(errors.get(), 0);
}
