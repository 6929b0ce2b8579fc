use leptos::*;

#[component]
pub fn AdminUsersFrame(children: Children) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-2xl font-bold text-fg">{"ユーザー管理"}</h1>
                <p class="mt-1 text-sm text-fg-muted">
                    {"ユーザーの作成・検索と、不要になったアカウントの無効化を行います。"}
                </p>
            </div>
            {children()}
        </div>
    }
}
