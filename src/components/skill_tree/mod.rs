mod component;
mod graph;
mod state;
mod surface;
mod types;
mod widget;

pub use component::SkillTreeView;
pub use state::SkillTreeState;
pub use surface::{CONTAINER_ID, DomSurface, SVG_ID, TreeSurface};
pub use types::{
	ClickOutcome, ConnectionLine, Placement, Point, SkillGraph, SkillNode, SkillTreeConfig,
};
pub use widget::SkillTree;
