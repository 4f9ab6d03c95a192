use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::warn;
use web_sys::MouseEvent;

use super::surface::{CONTAINER_ID, DomSurface, SVG_ID};
use super::types::{SkillGraph, SkillTreeConfig};
use super::widget::SkillTree;
use crate::components::events::WindowListener;

#[component]
pub fn SkillTreeView(
	#[prop(optional)] graph: Option<SkillGraph>,
	#[prop(optional)] config: Option<SkillTreeConfig>,
) -> impl IntoView {
	let graph = graph.unwrap_or_else(SkillGraph::seed);
	let config = config.unwrap_or_default();
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let svg_ref = NodeRef::<leptos::svg::Svg>::new();
	let tree: Rc<RefCell<Option<SkillTree<DomSurface>>>> = Rc::new(RefCell::new(None));
	let listeners = StoredValue::new_local(Vec::<WindowListener>::new());
	let tree_init = tree.clone();
	let graph_init = graph.clone();

	// Window listeners must not outlive the view.
	on_cleanup(move || {
		listeners.try_update_value(Vec::clear);
	});

	Effect::new(move |_| {
		let (Some(container), Some(svg)) = (container_ref.get(), svg_ref.get()) else {
			return;
		};
		if tree_init.borrow().is_some() {
			return;
		}
		let Some(document) = web_sys::window().and_then(|w| w.document()) else {
			warn!("Skill tree disabled: no document");
			return;
		};

		let surface = DomSurface::new(&document, container.into(), svg.into());
		let mut widget = SkillTree::new(graph_init.clone(), config.clone(), surface);
		widget.attach();
		*tree_init.borrow_mut() = Some(widget);

		let (tree_scroll, tree_resize) = (tree_init.clone(), tree_init.clone());
		let scroll = WindowListener::passive("scroll", move || {
			if let Some(ref mut t) = *tree_scroll.borrow_mut() {
				t.redraw();
			}
		});
		let resize = WindowListener::passive("resize", move || {
			if let Some(ref mut t) = *tree_resize.borrow_mut() {
				t.relayout();
			}
		});
		listeners.update_value(|l| l.extend(scroll.into_iter().chain(resize)));
	});

	let nodes = graph
		.nodes
		.into_iter()
		.map(|node| {
			let tree_click = tree.clone();
			let id = node.id.clone();
			let on_click = move |_: MouseEvent| {
				if let Some(ref mut t) = *tree_click.borrow_mut() {
					t.click(&id);
				}
			};
			view! {
				<div
					id=node.id.clone()
					class="skill-node"
					style="position: absolute; display: none;"
					on:click=on_click
				>
					{node
						.title
						.map(|title| view! { <span class="node-title">{title}</span> })}
				</div>
			}
		})
		.collect_view();

	view! {
		<div
			id=CONTAINER_ID
			class="skill-tree-container"
			style="position: relative;"
			node_ref=container_ref
		>
			<svg id=SVG_ID class="connections-svg" node_ref=svg_ref>
				<defs></defs>
			</svg>
			{nodes}
		</div>
	}
}
