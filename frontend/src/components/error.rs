use crate::api::ApiError;
use leptos::*;

/// Human-readable lines carried in the `details` of a validation error.
///
/// Accepts either `{"errors": ["..."]}` or a `{"field": "message"}` map.
pub fn validation_messages(error: &ApiError) -> Vec<String> {
    if error.code != "VALIDATION_ERROR" {
        return Vec::new();
    }
    let Some(details) = error.details.as_ref() else {
        return Vec::new();
    };
    if let Some(errors) = details.get("errors").and_then(|v| v.as_array()) {
        return errors
            .iter()
            .filter_map(|err| err.as_str().map(str::to_string))
            .collect();
    }
    details
        .as_object()
        .map(|fields| {
            fields
                .iter()
                .filter_map(|(field, message)| message.as_str().map(|m| format!("{}: {}", field, m)))
                .collect()
        })
        .unwrap_or_default()
}

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div role="alert" class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let messages = validation_messages(&e);
                    if !messages.is_empty() {
                        return view! {
                            <ul class="list-disc list-inside text-sm">
                                {messages.into_iter().map(|message| view! { <li>{message}</li> }).collect_view()}
                            </ul>
                        }.into_view();
                    }
                    if e.code != "UNKNOWN" && !e.code.is_empty() {
                        view! { <div class="text-xs opacity-75">{"Code: "}{e.code}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validation_messages_read_list_and_field_map() {
        let listed = ApiError {
            error: "Validation failed".into(),
            code: "VALIDATION_ERROR".into(),
            details: Some(json!({ "errors": ["Name is required", 3] })),
        };
        assert_eq!(validation_messages(&listed), vec!["Name is required"]);

        let by_field = ApiError {
            error: "Validation failed".into(),
            code: "VALIDATION_ERROR".into(),
            details: Some(json!({ "email": "is invalid" })),
        };
        assert_eq!(validation_messages(&by_field), vec!["email: is invalid"]);
    }

    #[test]
    fn validation_messages_ignore_other_codes() {
        let error = ApiError {
            error: "Request failed".into(),
            code: "REQUEST_FAILED".into(),
            details: Some(json!({ "errors": ["x"] })),
        };
        assert!(validation_messages(&error).is_empty());
    }
}
