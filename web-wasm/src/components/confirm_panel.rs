//! 確認候補パネル

use costchecker_common::format::CONFIRM_HEADING;
use costchecker_common::{option_label, ConsoleState, OptionId};
use leptos::prelude::*;

/// 確認待ちのときだけ見出しと候補行を描画する。新しい問い合わせで空になる
#[component]
pub fn ConfirmPanel<F>(state: RwSignal<ConsoleState>, on_select: F) -> impl IntoView
where
    F: Fn(OptionId) + 'static + Clone + Send + Sync,
{
    view! {
        <div id="confirm" class="confirm-panel">
            {move || {
                let on_select = on_select.clone();
                state
                    .with(|s| s.confirmation.as_ref().map(|c| c.options.clone()))
                    .map(|options| {
                        view! {
                            <h3>{CONFIRM_HEADING}</h3>
                            {options
                                .into_iter()
                                .map(|option| {
                                    let on_select = on_select.clone();
                                    let label = option_label(&option);
                                    let id = option.id.clone();
                                    view! {
                                        <div class="option" on:click=move |_| on_select(id.clone())>
                                            {label}
                                        </div>
                                    }
                                })
                                .collect_view()}
                        }
                    })
            }}
        </div>
    }
}
