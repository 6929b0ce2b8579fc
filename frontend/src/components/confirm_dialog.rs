use super::common::{Button, ButtonVariant};
use leptos::ev::KeyboardEvent;
use leptos::*;

fn label_or(label: MaybeSignal<String>, fallback: &'static str) -> Signal<String> {
    Signal::derive(move || {
        let text = label.get();
        if text.trim().is_empty() {
            fallback.to_string()
        } else {
            text
        }
    })
}

/// Modal yes/no prompt. Escape, the backdrop and the close button all cancel.
///
/// `children` is rendered between the message and the buttons.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] cancel_label: MaybeSignal<String>,
    #[prop(optional, into)] confirm_disabled: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    let confirm_variant = if destructive {
        ButtonVariant::Danger
    } else {
        ButtonVariant::Primary
    };
    let confirm_text = label_or(confirm_label, "はい");
    let cancel_text = label_or(cancel_label, "いいえ");
    let title = Signal::derive(move || title.get());
    let message = Signal::derive(move || message.get());
    let confirm_disabled = Signal::derive(move || confirm_disabled.get());
    let cancel = move || on_cancel.call(());

    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="閉じる"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| cancel()
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            cancel();
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                        <button
                            type="button"
                            aria-label="閉じる"
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| cancel()
                        >
                            {"✕"}
                        </button>
                    </div>
                    <p class="text-sm text-fg-muted">{move || message.get()}</p>
                    {children.as_ref().map(|body| body())}
                    <div class="flex justify-end gap-2">
                        <Button variant=ButtonVariant::Secondary on:click=move |_| cancel()>
                            {move || cancel_text.get()}
                        </Button>
                        <Button
                            variant=confirm_variant
                            disabled=confirm_disabled
                            on:click=move |_| on_confirm.call(())
                        >
                            {move || confirm_text.get()}
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
