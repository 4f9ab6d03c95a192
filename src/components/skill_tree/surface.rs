use std::time::Duration;

use leptos::prelude::set_timeout;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use super::types::{ConnectionLine, Point};

pub const CONTAINER_ID: &str = "skill-tree-container";
pub const SVG_ID: &str = "connections-svg";

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Everything the widget reads from or writes to the page.
///
/// Node ids that resolve to no element are skipped by every method.
pub trait TreeSurface {
	/// Current rendered `(width, height)` of the container.
	fn container_size(&self) -> (f64, f64);
	fn has_node(&self, id: &str) -> bool;
	fn set_node_visible(&mut self, id: &str, visible: bool);
	fn set_node_position(&mut self, id: &str, left: f64, top: f64);
	/// Rendered centre relative to the container, `None` when absent or hidden.
	fn node_center(&self, id: &str) -> Option<Point>;
	fn clear_lines(&mut self);
	fn draw_line(&mut self, line: &ConnectionLine);
	/// Add the hidden counter child.
	fn attach_counter(&mut self, id: &str);
	fn show_counter(&mut self, id: &str, count: u8);
	fn mark_highlighted(&mut self, id: &str);
	/// Copy the node's title sub-element text into its tooltip.
	fn mirror_title(&mut self, id: &str);
	/// Fire-and-forget animation class, removed after `duration_ms`.
	fn play_pop(&mut self, id: &str, duration_ms: u64);
}

/// [`TreeSurface`] over the live document.
pub struct DomSurface {
	document: Document,
	container: Element,
	svg: Element,
}

impl DomSurface {
	pub fn new(document: &Document, container: Element, svg: Element) -> Self {
		Self {
			document: document.clone(),
			container,
			svg,
		}
	}

	/// Resolve the container and drawing surface by id, `None` if either is missing.
	pub fn from_document(document: &Document) -> Option<Self> {
		let container = document.get_element_by_id(CONTAINER_ID)?;
		let svg = document.get_element_by_id(SVG_ID)?;
		Some(Self::new(document, container, svg))
	}

	fn node(&self, id: &str) -> Option<HtmlElement> {
		self.document
			.get_element_by_id(id)
			.and_then(|el| el.dyn_into::<HtmlElement>().ok())
	}

	fn counter(&self, id: &str) -> Option<HtmlElement> {
		self.node(id)?
			.query_selector(".node-counter")
			.ok()
			.flatten()
			.and_then(|el| el.dyn_into::<HtmlElement>().ok())
	}
}

impl TreeSurface for DomSurface {
	fn container_size(&self) -> (f64, f64) {
		let rect = self.container.get_bounding_client_rect();
		(rect.width(), rect.height())
	}

	fn has_node(&self, id: &str) -> bool {
		self.node(id).is_some()
	}

	fn set_node_visible(&mut self, id: &str, visible: bool) {
		if let Some(el) = self.node(id) {
			let _ = el
				.style()
				.set_property("display", if visible { "flex" } else { "none" });
		}
	}

	fn set_node_position(&mut self, id: &str, left: f64, top: f64) {
		if let Some(el) = self.node(id) {
			let style = el.style();
			let _ = style.set_property("left", &format!("{left}px"));
			let _ = style.set_property("top", &format!("{top}px"));
		}
	}

	fn node_center(&self, id: &str) -> Option<Point> {
		let el = self.node(id)?;
		if el.style().get_property_value("display").ok()? == "none" {
			return None;
		}
		let (outer, rect) = (
			self.container.get_bounding_client_rect(),
			el.get_bounding_client_rect(),
		);
		Some(Point {
			x: rect.left() - outer.left() + rect.width() / 2.0,
			y: rect.top() - outer.top() + rect.height() / 2.0,
		})
	}

	fn clear_lines(&mut self) {
		self.svg.set_inner_html("<defs></defs>");
	}

	fn draw_line(&mut self, line: &ConnectionLine) {
		let Ok(el) = self.document.create_element_ns(Some(SVG_NS), "line") else {
			return;
		};
		let _ = el.set_attribute("x1", &line.from.x.to_string());
		let _ = el.set_attribute("y1", &line.from.y.to_string());
		let _ = el.set_attribute("x2", &line.to.x.to_string());
		let _ = el.set_attribute("y2", &line.to.y.to_string());
		let class = if line.highlighted {
			"connection-arrow highlighted"
		} else {
			"connection-arrow"
		};
		let _ = el.set_attribute("class", class);
		let _ = self.svg.append_child(&el);
	}

	fn attach_counter(&mut self, id: &str) {
		let Some(el) = self.node(id) else {
			return;
		};
		let Ok(counter) = self.document.create_element("span") else {
			return;
		};
		let _ = counter.class_list().add_1("node-counter");
		if let Ok(counter) = counter.dyn_into::<HtmlElement>() {
			let _ = counter.style().set_property("display", "none");
			let _ = el.append_child(&counter);
		}
	}

	fn show_counter(&mut self, id: &str, count: u8) {
		if let Some(counter) = self.counter(id) {
			counter.set_text_content(Some(&count.to_string()));
			let _ = counter.style().set_property("display", "block");
		}
	}

	fn mark_highlighted(&mut self, id: &str) {
		if let Some(el) = self.node(id) {
			let _ = el.class_list().add_1("highlighted");
		}
	}

	fn mirror_title(&mut self, id: &str) {
		let Some(el) = self.node(id) else {
			return;
		};
		let text = el
			.query_selector(".node-title")
			.ok()
			.flatten()
			.and_then(|t| t.text_content())
			.unwrap_or_default();
		let text = text.trim();
		if !text.is_empty() {
			el.set_title(text);
		}
	}

	fn play_pop(&mut self, id: &str, duration_ms: u64) {
		let Some(el) = self.node(id) else {
			return;
		};
		let _ = el.class_list().add_1("pop");
		set_timeout(
			move || {
				let _ = el.class_list().remove_1("pop");
			},
			Duration::from_millis(duration_ms),
		);
	}
}
