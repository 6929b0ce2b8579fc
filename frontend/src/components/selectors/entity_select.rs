use super::options::{visible_options, SelectOption};
use crate::{
    api::ApiError,
    components::{error::InlineErrorMessage, layout::LoadingSpinner},
};
use leptos::{ev, *};

/// Combo-box: a text box narrowing the options of a `<select>`.
///
/// `options` is `None` until the first load finishes.
#[component]
pub fn EntitySelect(
    #[prop(into)] options: Signal<Option<Result<Vec<SelectOption>, ApiError>>>,
    #[prop(into)] loading: Signal<bool>,
    on_retry: Callback<()>,
    #[prop(into)] value: Signal<String>,
    on_select: Callback<String>,
    #[prop(into)] noun: String,
    #[prop(optional_no_strip)] label: Option<String>,
    #[prop(into, default = MaybeSignal::Static(false))] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let query = create_rw_signal(String::new());
    let fetch_error = Signal::derive(move || options.get().and_then(|result| result.err()));

    let has_label = label.as_ref().map(|l| !l.is_empty()).unwrap_or(false);
    let label_value = label.unwrap_or_default();
    let placeholder = format!("{}を選択", noun);
    let filter_placeholder = format!("{}を絞り込み", noun);

    let on_change = move |ev: ev::Event| on_select.call(event_target_value(&ev));

    let options_view = {
        let noun = noun.clone();
        move || {
            if loading.get() {
                return view! { <option value="" disabled>{format!("{}を読み込み中...", noun)}</option> }
                    .into_view();
            }
            match options.get() {
                None => view! { <option value="" disabled>{format!("{}を読み込み中...", noun)}</option> }
                    .into_view(),
                Some(Err(_)) => {
                    view! { <option value="" disabled>{format!("{}の取得に失敗しました", noun)}</option> }
                        .into_view()
                }
                Some(Ok(list)) if list.is_empty() => {
                    view! { <option value="" disabled>{format!("{}が0件です", noun)}</option> }
                        .into_view()
                }
                Some(Ok(list)) => {
                    let visible = visible_options(&list, &query.get(), &value.get_untracked());
                    if visible.is_empty() {
                        return view! { <option value="" disabled>{format!("該当する{}がありません", noun)}</option> }
                            .into_view();
                    }
                    visible
                        .into_iter()
                        .map(|option| view! { <option value=option.value>{option.label}</option> })
                        .collect_view()
                }
            }
        }
    };

    view! {
        <div class="space-y-1">
            <Show when=move || has_label>
                <label class="block text-sm font-medium text-fg">{label_value.clone()}</label>
            </Show>
            <input
                type="search"
                class="w-full border rounded px-2 py-1 text-sm bg-surface-elevated text-fg"
                placeholder=filter_placeholder
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
                disabled=move || disabled.get()
            />
            <select
                class="w-full border rounded px-2 py-1 bg-surface-elevated text-fg disabled:opacity-50"
                on:change=on_change
                prop:value=move || value.get()
                disabled=move || disabled.get()
            >
                <option value="">{placeholder}</option>
                {options_view}
            </select>
            <Show when=move || fetch_error.get().is_some()>
                <div class="flex items-center gap-2">
                    <InlineErrorMessage error=fetch_error />
                    <button
                        type="button"
                        class="text-sm text-action-primary-bg hover:underline disabled:opacity-50"
                        on:click=move |_| {
                            query.set(String::new());
                            on_retry.call(());
                        }
                        disabled=move || loading.get()
                    >
                        {"再試行"}
                    </button>
                    <Show when=move || loading.get()>
                        <LoadingSpinner />
                    </Show>
                </div>
            </Show>
        </div>
    }
}
