use leptos::*;

pub const NAV_LINKS: [(&str, &str); 2] = [
    ("/admin/users", "ユーザー管理"),
    ("/admin/audit-logs", "監査ログ"),
];

#[component]
pub fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let toggle_menu = move |_| set_menu_open.update(|open| *open = !*open);

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"Admin Console"</h1>
                    <nav class="hidden lg:flex space-x-4">
                        {NAV_LINKS
                            .iter()
                            .map(|(href, label)| view! {
                                <a href=*href class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                                    {*label}
                                </a>
                            })
                            .collect_view()}
                    </nav>
                    <button
                        type="button"
                        class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                        on:click=toggle_menu
                        aria-expanded=move || menu_open.get()
                        aria-controls="mobile-nav"
                    >
                        <span class="sr-only">
                            {move || if menu_open.get() { "メニューを閉じる" } else { "メニューを開く" }}
                        </span>
                        <i class="fas fa-bars"></i>
                    </button>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 space-y-2">
                            {NAV_LINKS
                                .iter()
                                .map(|(href, label)| view! {
                                    <a
                                        href=*href
                                        class="block text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {*label}
                                    </a>
                                })
                                .collect_view()}
                        </nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn SuccessMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-status-success-bg border border-status-success-border text-status-success-text px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-check-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}
