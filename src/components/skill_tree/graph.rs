use super::types::{SkillGraph, SkillNode};

/// Rows of the built-in tree: `(id, x%, y%, targets)`.
///
/// Several rows point at the bare id `node`, which matches no element and so
/// never produces a line.
const SEED: &[(&str, f64, f64, &[&str])] = &[
	("node1", 24.0, 0.0, &["node3", "node4", "node5"]),
	("node2", 72.0, 0.0, &["node5", "node6", "node7"]),
	// row 2
	("node3", 12.0, 11.0, &["node8", "node9"]),
	("node4", 24.0, 11.0, &["node9"]),
	("node5", 48.0, 11.0, &["node9", "node10", "node11"]),
	("node6", 72.0, 11.0, &["node11"]),
	("node7", 84.0, 11.0, &["node11", "node12"]),
	// row 3
	("node8", 12.0, 21.5, &["node13"]),
	("node9", 24.0, 21.5, &["node13", "node14"]),
	("node10", 48.0, 21.5, &["node14", "node15", "node16"]),
	("node11", 72.0, 21.5, &["node16", "node17", "node"]),
	("node12", 84.0, 21.5, &["node17", "node", "node"]),
	// row 4
	("node13", 12.0, 32.0, &["node18", "node19", "node20"]),
	("node14", 36.0, 32.0, &["node20", "node26", "node"]),
	("node15", 48.0, 32.0, &["node21", "node", "node"]),
	("node16", 60.0, 32.0, &["node27", "node22", "node", "node"]),
	("node17", 84.0, 32.0, &["node22", "node23", "node24"]),
	// row 5
	("node18", 0.0, 42.5, &["node25", "node", "node"]),
	("node19", 12.0, 42.5, &["node25", "node", "node"]),
	("node20", 24.0, 42.5, &["node25", "node29"]),
	("node21", 48.0, 42.5, &["node31", "node", "node"]),
	("node22", 72.0, 42.5, &["node33", "node28", "node"]),
	("node23", 84.0, 42.5, &["node28", "node", "node"]),
	("node24", 96.0, 42.5, &["node28", "node", "node"]),
	// row 6
	("node25", 12.0, 53.0, &["node34", "node29", "node"]),
	("node26", 36.0, 53.0, &["node29", "node30", "node31"]),
	("node27", 60.0, 53.0, &["node31", "node32", "node33"]),
	("node28", 84.0, 53.0, &["node33", "node38", "node"]),
	// row 7
	("node29", 24.0, 63.5, &["node34", "node35"]),
	("node30", 36.0, 63.5, &["node35", "node"]),
	("node31", 48.0, 63.5, &["node35", "node36", "node37"]),
	("node32", 60.0, 63.5, &["node37"]),
	("node33", 72.0, 63.5, &["node37", "node38"]),
	// row 8
	("node34", 12.0, 74.0, &["node39"]),
	("node35", 36.0, 74.0, &["node40"]),
	("node36", 48.0, 74.0, &["node", "node"]),
	("node37", 60.0, 74.0, &["node41"]),
	("node38", 84.0, 74.0, &["node42"]),
	// row 9
	("node39", 12.0, 84.5, &["node43"]),
	("node40", 36.0, 84.5, &["node44", "node45", "node"]),
	("node41", 60.0, 84.5, &["node46", "node47", "node"]),
	("node42", 84.0, 84.5, &["node48", "node49"]),
	// row 10
	("node43", 12.0, 95.0, &["node"]),
	("node44", 30.0, 95.0, &["node"]),
	("node45", 42.0, 95.0, &["node"]),
	("node46", 54.0, 95.0, &["node", "node"]),
	("node47", 66.0, 95.0, &["node"]),
	("node48", 78.0, 95.0, &["node"]),
	("node49", 90.0, 95.0, &["node"]),
];

const ROOTS: &[&str] = &["node1", "node2"];

impl SkillGraph {
	/// The built-in 49 node talent tree.
	pub fn seed() -> Self {
		let nodes = SEED
			.iter()
			.map(|&(id, x, y, targets)| SkillNode {
				id: id.into(),
				x,
				y,
				connections: targets.iter().map(|t| (*t).into()).collect(),
				title: None,
			})
			.collect();

		Self {
			nodes,
			roots: ROOTS.iter().map(|r| (*r).into()).collect(),
		}
	}

	pub fn node(&self, id: &str) -> Option<&SkillNode> {
		self.nodes.iter().find(|n| n.id == id)
	}

	pub fn contains(&self, id: &str) -> bool {
		self.node(id).is_some()
	}

	pub fn is_root(&self, id: &str) -> bool {
		self.roots.iter().any(|r| r == id)
	}
}
