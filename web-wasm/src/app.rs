//! メインアプリケーションコンポーネント

use costchecker_common::{ConsoleState, OptionId};
use leptos::html::Img;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::backend;
use crate::components::{
    confirm_panel::ConfirmPanel,
    header::Header,
    query_bar::QueryBar,
    result_pane::ResultPane,
    screenshot_view::ScreenshotView,
};
use crate::dom::image_metrics;

/// 同じ画像を再表示した場合は load が発火しないので、読込済みならその場で配置する
pub fn relayout_if_cached(state: RwSignal<ConsoleState>, shot_ref: NodeRef<Img>, previous: Option<String>) {
    let current = state.with_untracked(|s| s.screenshot_src().map(str::to_string));
    if current.is_none() || current != previous {
        return;
    }
    if let Some(img) = shot_ref.get_untracked() {
        if img.complete() {
            state.update(|s| s.image_loaded(image_metrics(&img)));
        }
    }
}

fn current_src(state: RwSignal<ConsoleState>) -> Option<String> {
    state.with_untracked(|s| s.screenshot_src().map(str::to_string))
}

/// 画面全体。状態は `ConsoleState` ひとつにまとめる
#[component]
pub fn App() -> impl IntoView {
    let state = RwSignal::new(ConsoleState::new());
    let (query, set_query) = signal(String::new());
    let shot_ref = NodeRef::<Img>::new();

    // 実行ボタン / Enter
    let on_run = move |_: ()| {
        let text = query.get_untracked().trim().to_string();
        state.update(ConsoleState::begin_query);
        gloo::console::log!(format!("query: {}", text));

        spawn_local(async move {
            let result = backend::query(&text).await;
            if let Err(e) = &result {
                gloo::console::error!(format!("query failed: {}", e));
            }
            let previous = current_src(state);
            state.update(|s| s.apply_query(result));
            relayout_if_cached(state, shot_ref, previous);
        });
    };

    // 候補クリック
    let on_select = move |option_id: OptionId| {
        let Some(request) = state.with_untracked(|s| s.selection(&option_id)) else {
            return;
        };

        spawn_local(async move {
            let result = backend::confirm(&request).await;
            if let Err(e) = &result {
                gloo::console::error!(format!("confirm failed: {}", e));
            }
            let previous = current_src(state);
            state.update(|s| s.apply_confirm(result));
            relayout_if_cached(state, shot_ref, previous);
        });
    };

    // 画像読込完了
    let on_loaded = move |_: ()| {
        if let Some(img) = shot_ref.get_untracked() {
            state.update(|s| s.image_loaded(image_metrics(&img)));
        }
    };

    view! {
        <div class="container">
            <Header />
            <QueryBar query=query set_query=set_query on_run=on_run />
            <ResultPane state=state />
            <ConfirmPanel state=state on_select=on_select />
            <ScreenshotView state=state shot_ref=shot_ref on_loaded=on_loaded />
        </div>
    }
}
