use std::collections::{HashMap, HashSet};

use super::types::{ClickOutcome, Placement, SkillGraph, SkillTreeConfig};

/// Mutable per-session state over a fixed graph.
///
/// Highlighting only ever grows and click counts only ever rise; nothing is
/// persisted.
pub struct SkillTreeState {
	pub graph: SkillGraph,
	pub config: SkillTreeConfig,
	highlighted: HashSet<String>,
	click_counts: HashMap<String, u8>,
}

impl SkillTreeState {
	pub fn new(graph: SkillGraph, config: SkillTreeConfig) -> Self {
		let click_counts = graph.nodes.iter().map(|n| (n.id.clone(), 0)).collect();
		Self {
			graph,
			config,
			highlighted: HashSet::new(),
			click_counts,
		}
	}

	pub fn is_highlighted(&self, id: &str) -> bool {
		self.highlighted.contains(id)
	}

	pub fn highlighted(&self) -> &HashSet<String> {
		&self.highlighted
	}

	pub fn click_count(&self, id: &str) -> u8 {
		self.click_counts.get(id).copied().unwrap_or(0)
	}

	/// Roots, highlighted nodes, and targets of highlighted nodes are shown.
	///
	/// Rescans every connection list on each call.
	pub fn is_visible(&self, id: &str) -> bool {
		if self.graph.is_root(id) || self.highlighted.contains(id) {
			return true;
		}
		self.graph
			.nodes
			.iter()
			.filter(|n| self.highlighted.contains(&n.id))
			.any(|n| n.connections.iter().any(|c| c == id))
	}

	/// Visibility and top-left pixel placement for every node.
	///
	/// Each axis maps `pct / 100 * (container - node size)`, so a node at 100%
	/// sits flush against the far edge.
	pub fn layout(&self, width: f64, height: f64) -> Vec<Placement> {
		let (free_w, free_h) = (
			width - self.config.node_width,
			height - self.config.node_height,
		);
		self.graph
			.nodes
			.iter()
			.map(|n| Placement {
				id: n.id.clone(),
				visible: self.is_visible(&n.id),
				left: n.x / 100.0 * free_w,
				top: n.y / 100.0 * free_h,
			})
			.collect()
	}

	/// Apply one click.
	///
	/// The first click on a shown node highlights it with a count of 1, later
	/// clicks count up to `max_clicks` and stop there.
	pub fn click(&mut self, id: &str) -> ClickOutcome {
		if !self.graph.contains(id) || !self.is_visible(id) {
			return ClickOutcome::Ignored;
		}

		if self.highlighted.insert(id.to_string()) {
			self.click_counts.insert(id.to_string(), 1);
			return ClickOutcome::Highlighted;
		}

		let count = self.click_counts.entry(id.to_string()).or_insert(1);
		if *count >= self.config.max_clicks {
			ClickOutcome::Saturated
		} else {
			*count += 1;
			ClickOutcome::Incremented(*count)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn seeded() -> SkillTreeState {
		SkillTreeState::new(SkillGraph::seed(), SkillTreeConfig::default())
	}

	fn visible_ids(state: &SkillTreeState) -> Vec<String> {
		state
			.layout(1000.0, 1000.0)
			.into_iter()
			.filter(|p| p.visible)
			.map(|p| p.id)
			.collect()
	}

	#[test]
	fn only_roots_visible_initially() {
		let state = seeded();
		assert_eq!(visible_ids(&state), vec!["node1", "node2"]);
	}

	#[test]
	fn highlighting_reveals_targets() {
		let mut state = seeded();
		assert_eq!(state.click("node1"), ClickOutcome::Highlighted);
		assert_eq!(
			visible_ids(&state),
			vec!["node1", "node2", "node3", "node4", "node5"]
		);
	}

	#[test]
	fn visibility_matches_rule_for_every_node() {
		let mut state = seeded();
		for id in ["node2", "node6", "node11", "node16", "node27"] {
			state.click(id);
		}
		for node in &state.graph.nodes {
			let expected = state.graph.is_root(&node.id)
				|| state.is_highlighted(&node.id)
				|| state.graph.nodes.iter().any(|src| {
					state.is_highlighted(&src.id) && src.connections.contains(&node.id)
				});
			assert_eq!(state.is_visible(&node.id), expected, "{}", node.id);
		}
	}

	#[test]
	fn counter_saturates_at_five() {
		let mut state = seeded();
		state.click("node1");
		assert_eq!(state.click("node5"), ClickOutcome::Highlighted);
		assert_eq!(state.click_count("node5"), 1);
		assert_eq!(state.click("node5"), ClickOutcome::Incremented(2));
		state.click("node5");
		state.click("node5");
		assert_eq!(state.click("node5"), ClickOutcome::Incremented(5));
		assert_eq!(state.click("node5"), ClickOutcome::Saturated);
		assert_eq!(state.click_count("node5"), 5);
	}

	#[test]
	fn highlighting_is_monotonic() {
		let mut state = seeded();
		state.click("node1");
		for _ in 0..10 {
			state.click("node1");
			state.click("node3");
		}
		assert!(state.is_highlighted("node1"));
		assert!(state.is_highlighted("node3"));
		assert_eq!(state.highlighted().len(), 2);
	}

	#[test]
	fn hidden_and_unknown_nodes_ignore_clicks() {
		let mut state = seeded();
		assert_eq!(state.click("node9"), ClickOutcome::Ignored);
		assert_eq!(state.click("node"), ClickOutcome::Ignored);
		assert_eq!(state.click_count("node9"), 0);
		assert!(state.highlighted().is_empty());
	}

	#[test]
	fn layout_scales_with_container_but_keeps_visibility() {
		let mut state = seeded();
		state.click("node2");

		let small = state.layout(440.0, 240.0);
		let large = state.layout(840.0, 440.0);

		let node7_small = small.iter().find(|p| p.id == "node7").unwrap();
		assert_eq!(node7_small.left, 0.84 * 400.0);
		assert_eq!(node7_small.top, 0.11 * 200.0);

		let node7_large = large.iter().find(|p| p.id == "node7").unwrap();
		assert_eq!(node7_large.left, 0.84 * 800.0);
		assert_eq!(node7_large.top, 0.11 * 400.0);

		for (a, b) in small.iter().zip(&large) {
			assert_eq!(a.visible, b.visible);
		}
	}
}
