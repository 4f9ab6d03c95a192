pub mod events;
pub mod site_chrome;
pub mod skill_tree;
