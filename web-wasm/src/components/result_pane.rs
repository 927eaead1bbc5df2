//! ステータス行とJSON表示欄

use costchecker_common::ConsoleState;
use leptos::prelude::*;

#[component]
pub fn ResultPane(state: RwSignal<ConsoleState>) -> impl IntoView {
    view! {
        <div id="status" class="status">
            {move || state.with(|s| s.status.clone())}
        </div>
        <pre id="json" class="json">
            {move || state.with(|s| s.json.clone())}
        </pre>
    }
}
