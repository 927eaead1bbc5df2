//! 入力欄と実行ボタン

use leptos::prelude::*;

/// `#q` でEnterを押すと `#run` のクリックと同じ動作
#[component]
pub fn QueryBar<F>(
    query: ReadSignal<String>,
    set_query: WriteSignal<String>,
    on_run: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="query-bar">
            <input
                type="text"
                id="q"
                placeholder="例: A1 价格"
                prop:value=move || query.get()
                on:input=move |ev| {
                    set_query.set(event_target_value(&ev));
                }
                on:keydown={
                    let on_run = on_run.clone();
                    move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            on_run(());
                        }
                    }
                }
            />
            <button
                id="run"
                class="btn btn-primary"
                on:click={
                    let on_run = on_run.clone();
                    move |_| on_run(())
                }
            >
                "查询"
            </button>
        </div>
    }
}
