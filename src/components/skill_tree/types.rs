/// A single skill in the tree.
///
/// `x` and `y` are percentages (0 to 100) of the container's free space.
/// `connections` lists target ids; a target that names no node in the graph
/// is ignored wherever connections are resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillNode {
	pub id: String,
	pub x: f64,
	pub y: f64,
	pub connections: Vec<String>,
	pub title: Option<String>,
}

/// Fixed node set plus the ids that are always visible.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkillGraph {
	pub nodes: Vec<SkillNode>,
	pub roots: Vec<String>,
}

/// Tunables for a widget instance.
#[derive(Clone, Debug, PartialEq)]
pub struct SkillTreeConfig {
	pub node_width: f64,
	pub node_height: f64,
	pub max_clicks: u8,
	pub pop_duration_ms: u64,
}

impl Default for SkillTreeConfig {
	fn default() -> Self {
		Self {
			node_width: 40.0,
			node_height: 40.0,
			max_clicks: 5,
			pop_duration_ms: 300,
		}
	}
}

/// A point in container-relative pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

/// Where and whether a node is shown after a layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Placement {
	pub id: String,
	pub visible: bool,
	pub left: f64,
	pub top: f64,
}

/// One straight connection line between two node centres.
#[derive(Clone, Debug, PartialEq)]
pub struct ConnectionLine {
	pub source: String,
	pub target: String,
	pub from: Point,
	pub to: Point,
	pub highlighted: bool,
}

/// What a click did to the clicked node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
	/// First click: the node joined the highlighted set with a count of 1.
	Highlighted,
	/// A later click raised the count to the contained value.
	Incremented(u8),
	/// The count is already at the ceiling.
	Saturated,
	/// Unknown id or a node that is not currently shown.
	Ignored,
}

impl ClickOutcome {
	/// Only a new highlight can change which nodes are visible.
	pub fn needs_relayout(self) -> bool {
		matches!(self, ClickOutcome::Highlighted)
	}
}
