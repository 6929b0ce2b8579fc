use crate::{
    api::{ApiError, UserResponse},
    components::{confirm_dialog::ConfirmDialog, error::InlineErrorMessage},
};
use leptos::*;

/// What a deactivate action run means to the dialog.
#[derive(Clone, Debug, PartialEq)]
pub enum DeactivateOutcome {
    /// No new completion since `seen`.
    Unchanged,
    Deactivated(UserResponse),
    Failed(ApiError),
}

/// `seen` is the action version already handled, `None` on the first run.
pub fn deactivate_completion(
    seen: Option<usize>,
    version: usize,
    value: Option<Result<UserResponse, ApiError>>,
) -> DeactivateOutcome {
    if !seen.is_some_and(|seen| seen != version) {
        return DeactivateOutcome::Unchanged;
    }
    match value {
        Some(Ok(updated)) => DeactivateOutcome::Deactivated(updated),
        Some(Err(err)) => DeactivateOutcome::Failed(err),
        None => DeactivateOutcome::Unchanged,
    }
}

/// Success reports the user and then closes; failure keeps the dialog open
/// and shows the error.
pub fn apply_deactivate_outcome(
    outcome: DeactivateOutcome,
    error: RwSignal<Option<ApiError>>,
    on_deactivated: Callback<UserResponse>,
    on_close: Callback<()>,
) {
    match outcome {
        DeactivateOutcome::Deactivated(updated) => {
            error.set(None);
            on_deactivated.call(updated);
            on_close.call(());
        }
        DeactivateOutcome::Failed(err) => {
            log::warn!("Failed to deactivate user: {}", err);
            error.set(Some(err));
        }
        DeactivateOutcome::Unchanged => {}
    }
}

/// Confirmation for deactivating `user`; open while `user` is `Some`.
#[component]
pub fn DeactivateUserDialog(
    #[prop(into)] user: Signal<Option<UserResponse>>,
    deactivate_action: Action<String, Result<UserResponse, ApiError>>,
    on_deactivated: Callback<UserResponse>,
    on_close: Callback<()>,
) -> impl IntoView {
    let pending = deactivate_action.pending();
    let error = create_rw_signal(None::<ApiError>);

    // Each completed dispatch bumps the version exactly once.
    create_effect(move |seen: Option<usize>| {
        let version = deactivate_action.version().get();
        let outcome = deactivate_completion(seen, version, deactivate_action.value().get_untracked());
        apply_deactivate_outcome(outcome, error, on_deactivated, on_close);
        version
    });

    create_effect(move |_| {
        user.with(|_| ());
        error.set(None);
    });

    let message = Signal::derive(move || {
        user.get()
            .map(|u| format!("{} ({}) を無効化します。無効化したユーザーはログインできなくなります。", u.full_name, u.username))
            .unwrap_or_default()
    });

    let confirm = Callback::new(move |_| {
        if pending.get_untracked() {
            return;
        }
        if let Some(target) = user.get_untracked() {
            error.set(None);
            deactivate_action.dispatch(target.id);
        }
    });
    let cancel = Callback::new(move |_| {
        if !pending.get_untracked() {
            on_close.call(());
        }
    });

    view! {
        <ConfirmDialog
            is_open=Signal::derive(move || user.get().is_some())
            title="ユーザーを無効化"
            message=message
            on_confirm=confirm
            on_cancel=cancel
            confirm_label=Signal::derive(move || {
                if pending.get() { "無効化中...".to_string() } else { "無効化する".to_string() }
            })
            cancel_label="キャンセル"
            confirm_disabled=Signal::derive(move || pending.get())
            destructive=true
        >
            <InlineErrorMessage error=error />
        </ConfirmDialog>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{
        api::{test_support::mock::*, ApiClient},
        test_support::{
            helpers::{inactive_user, sample_user},
            ssr::{render_to_string, wait_until, with_local_runtime_async, with_runtime},
        },
    };
    use serde_json::json;
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn open_dialog_names_the_user() {
        let html = render_to_string(move || {
            let action = create_action(|_: &String| async {
                Err::<UserResponse, _>(ApiError::unknown("unused"))
            });
            view! {
                <DeactivateUserDialog
                    user=Signal::derive(|| Some(sample_user("u1", "alice", "Alice Example")))
                    deactivate_action=action
                    on_deactivated=Callback::new(|_| {})
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Alice Example (alice) を無効化します。"));
        assert!(html.contains("無効化する"));
        assert!(html.contains("キャンセル"));
    }

    #[test]
    fn closed_dialog_renders_nothing() {
        let html = render_to_string(move || {
            let action = create_action(|_: &String| async {
                Err::<UserResponse, _>(ApiError::unknown("unused"))
            });
            view! {
                <DeactivateUserDialog
                    user=Signal::derive(|| None)
                    deactivate_action=action
                    on_deactivated=Callback::new(|_| {})
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("ユーザーを無効化"));
    }

    #[test]
    fn completion_fires_once_per_version() {
        let user = sample_user("u1", "alice", "Alice Example");
        assert_eq!(
            deactivate_completion(None, 0, Some(Ok(user.clone()))),
            DeactivateOutcome::Unchanged
        );
        assert_eq!(
            deactivate_completion(Some(0), 1, Some(Ok(user.clone()))),
            DeactivateOutcome::Deactivated(user.clone())
        );
        assert_eq!(
            deactivate_completion(Some(1), 1, Some(Ok(user))),
            DeactivateOutcome::Unchanged
        );
        assert_eq!(
            deactivate_completion(Some(1), 2, Some(Err(ApiError::unknown("boom")))),
            DeactivateOutcome::Failed(ApiError::unknown("boom"))
        );
    }

    fn recorded_callbacks() -> (
        Rc<RefCell<Vec<String>>>,
        Callback<UserResponse>,
        Callback<()>,
    ) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let deactivated_calls = calls.clone();
        let close_calls = calls.clone();
        let on_deactivated = Callback::new(move |user: UserResponse| {
            deactivated_calls.borrow_mut().push(format!("deactivated:{}", user.id));
        });
        let on_close = Callback::new(move |_| close_calls.borrow_mut().push("close".to_string()));
        (calls, on_deactivated, on_close)
    }

    #[test]
    fn success_reports_then_closes_exactly_once() {
        with_runtime(|| {
            let error = create_rw_signal(Some(ApiError::unknown("stale")));
            let (calls, on_deactivated, on_close) = recorded_callbacks();
            let updated = inactive_user("u1", "alice");

            let first = deactivate_completion(Some(0), 1, Some(Ok(updated.clone())));
            apply_deactivate_outcome(first, error, on_deactivated, on_close);
            let repeat = deactivate_completion(Some(1), 1, Some(Ok(updated)));
            apply_deactivate_outcome(repeat, error, on_deactivated, on_close);

            assert_eq!(*calls.borrow(), vec!["deactivated:u1".to_string(), "close".to_string()]);
            assert_eq!(error.get_untracked(), None);
        });
    }

    #[test]
    fn failure_keeps_dialog_open_with_error() {
        with_runtime(|| {
            let error = create_rw_signal(None);
            let (calls, on_deactivated, on_close) = recorded_callbacks();

            let outcome = deactivate_completion(Some(0), 1, Some(Err(ApiError::unknown("locked"))));
            apply_deactivate_outcome(outcome, error, on_deactivated, on_close);

            assert!(calls.borrow().is_empty());
            assert_eq!(error.get_untracked().map(|err| err.error), Some("locked".to_string()));
        });
    }

    #[test]
    fn deactivate_action_failure_surfaces_service_error() {
        with_local_runtime_async(|| async {
            let runtime = leptos::create_runtime();
            let server = MockServer::start();
            server.mock(|when, then| {
                when.method(POST).path("/api/admin/users/u1/deactivate");
                then.status(409)
                    .json_body(json!({ "error": "last admin", "code": "CONFLICT" }));
            });
            let api = ApiClient::new_with_base_url(server.url("/api"));
            let action = create_action(move |user_id: &String| {
                let api = api.clone();
                let user_id = user_id.clone();
                async move { api.deactivate_user(&user_id).await }
            });
            let seen = action.version().get_untracked();

            action.dispatch("u1".to_string());
            assert!(wait_until(|| action.version().get_untracked() != seen).await);

            let outcome = deactivate_completion(
                Some(seen),
                action.version().get_untracked(),
                action.value().get_untracked(),
            );
            match outcome {
                DeactivateOutcome::Failed(err) => assert_eq!(err.code, "CONFLICT"),
                other => panic!("unexpected outcome {other:?}"),
            }
            runtime.dispose();
        });
    }
}
