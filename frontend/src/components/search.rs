use leptos::{ev, *};

/// Search box that separates typing from committing.
///
/// `on_change` fires on every keystroke, `on_submit` on Enter or the search
/// button, `on_clear` from the clear button (shown once there is input).
#[component]
pub fn SearchBar(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    on_submit: Callback<()>,
    on_clear: Callback<()>,
    #[prop(default = "検索".to_string(), into)] placeholder: String,
) -> impl IntoView {
    let has_input = Signal::derive(move || !value.get().is_empty());

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <form class="flex items-center gap-2" role="search" on:submit=submit>
            <input
                type="search"
                class="flex-1 rounded-md border border-border px-2 py-1 text-sm bg-surface-elevated text-fg"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.call(event_target_value(&ev))
            />
            <button
                type="submit"
                class="inline-flex items-center rounded-md px-3 py-1 text-sm font-semibold bg-action-primary-bg text-action-primary-text"
            >
                "検索"
            </button>
            <Show when=move || has_input.get()>
                <button
                    type="button"
                    class="text-sm text-fg-muted hover:text-fg"
                    on:click=move |_| on_clear.call(())
                >
                    "クリア"
                </button>
            </Show>
        </form>
    }
}
