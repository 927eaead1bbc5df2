//! スクリーンショットと強調オーバーレイ

use costchecker_common::ConsoleState;
use leptos::html::Img;
use leptos::prelude::*;

#[component]
pub fn ScreenshotView<F>(
    state: RwSignal<ConsoleState>,
    shot_ref: NodeRef<Img>,
    on_loaded: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let src = move || state.with(|s| s.screenshot_src().map(str::to_string));
    let container_style = move || {
        state.with(|s| {
            s.overlays
                .as_ref()
                .map(|o| o.container_style())
                .unwrap_or_default()
        })
    };
    let boxes = move || {
        state
            .with(|s| s.overlays.as_ref().map(|o| o.boxes.clone()).unwrap_or_default())
            .into_iter()
            .map(|b| view! { <div class=b.class_name() style=b.style() /> })
            .collect_view()
    };

    view! {
        <div id="shotWrap" class="shot-wrap">
            <img
                id="shot"
                alt=""
                node_ref=shot_ref
                src=src
                on:load={
                    let on_loaded = on_loaded.clone();
                    move |_| on_loaded(())
                }
            />
            <div id="overlays" class="overlays" style=container_style>
                {boxes}
            </div>
        </div>
    }
}
