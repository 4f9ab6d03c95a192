use log::{debug, info};

use super::state::SkillTreeState;
use super::surface::TreeSurface;
use super::types::{ClickOutcome, ConnectionLine, SkillGraph, SkillTreeConfig};

/// One skill tree bound to one surface.
pub struct SkillTree<S: TreeSurface> {
	pub state: SkillTreeState,
	pub surface: S,
}

impl<S: TreeSurface> SkillTree<S> {
	pub fn new(graph: SkillGraph, config: SkillTreeConfig, surface: S) -> Self {
		Self {
			state: SkillTreeState::new(graph, config),
			surface,
		}
	}

	/// First layout, then counters and tooltips for every node that exists.
	pub fn attach(&mut self) {
		self.relayout();
		let mut attached = 0;
		for node in &self.state.graph.nodes {
			if !self.surface.has_node(&node.id) {
				continue;
			}
			self.surface.attach_counter(&node.id);
			self.surface.mirror_title(&node.id);
			attached += 1;
		}
		info!("Skill tree attached ({attached} nodes)");
	}

	/// Recompute visibility and placement of every node, then redraw.
	pub fn relayout(&mut self) {
		let (width, height) = self.surface.container_size();
		for placement in self.state.layout(width, height) {
			if !self.surface.has_node(&placement.id) {
				continue;
			}
			self.surface
				.set_node_visible(&placement.id, placement.visible);
			self.surface
				.set_node_position(&placement.id, placement.left, placement.top);
		}
		debug!("Relayout at {width}x{height}");
		self.redraw();
	}

	/// Replace every line with one per connection whose ends are both shown.
	pub fn redraw(&mut self) {
		self.surface.clear_lines();
		for line in self.connection_lines() {
			self.surface.draw_line(&line);
		}
	}

	/// Lines between rendered centres; absent or hidden endpoints are skipped.
	pub fn connection_lines(&self) -> Vec<ConnectionLine> {
		let mut lines = Vec::new();
		for node in &self.state.graph.nodes {
			let Some(from) = self.surface.node_center(&node.id) else {
				continue;
			};
			let highlighted = self.state.is_highlighted(&node.id);
			for target in &node.connections {
				let Some(to) = self.surface.node_center(target) else {
					continue;
				};
				lines.push(ConnectionLine {
					source: node.id.clone(),
					target: target.clone(),
					from,
					to,
					highlighted,
				});
			}
		}
		lines
	}

	pub fn click(&mut self, id: &str) -> ClickOutcome {
		let outcome = self.state.click(id);
		match outcome {
			ClickOutcome::Highlighted => {
				debug!("Highlighted {id}");
				self.surface.mark_highlighted(id);
				self.surface.show_counter(id, 1);
			}
			ClickOutcome::Incremented(count) => self.surface.show_counter(id, count),
			ClickOutcome::Saturated | ClickOutcome::Ignored => {}
		}
		if outcome.needs_relayout() {
			self.relayout();
		}
		if self.surface.has_node(id) {
			let duration = self.state.config.pop_duration_ms;
			self.surface.play_pop(id, duration);
		}
		outcome
	}
}
