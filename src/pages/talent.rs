use leptos::prelude::*;

use crate::components::skill_tree::SkillTreeView;

/// Talent page hosting the skill tree.
#[component]
pub fn Talent() -> impl IntoView {
	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<main class="page talent">
				<h1>"Talents"</h1>
				<p class="subtitle">"Click a skill to unlock it. Each skill ranks up to 5."</p>
				<SkillTreeView />
			</main>
		</ErrorBoundary>
	}
}
