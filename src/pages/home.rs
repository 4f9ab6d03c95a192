use leptos::prelude::*;

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	view! {
		<main class="page home">
			<h1>"Skill Tree"</h1>
			<p class="subtitle">
				"Open the talent page and click a skill to unlock the ones it leads to."
			</p>
			<a class="button" href="/talent">"View talents"</a>
		</main>
	}
}
