use leptos::prelude::*;
use skill_tree_widget::{App, init_logging};

fn main() {
	init_logging();
	mount_to_body(|| {
		view! { <App /> }
	})
}
