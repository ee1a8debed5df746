//! Request shapes shared by the feature controllers: confirmed row actions,
//! envelope-checked writes and listing reads.

use serde::de::DeserializeOwned;

use super::api::ApiResponse;
use super::env::ConsoleEnv;
use super::transport::{ApiRequest, TransportError};

/// Result of a write that the user triggered from a row or a form.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    /// The user answered "no"; nothing was sent.
    Cancelled,
    /// The backend accepted the write and the page is reloading.
    Done,
    /// `success: false`; carries the server message.
    Rejected(String),
    /// Transport-level failure, already notified.
    Failed(TransportError),
}

/// Messages a write shows once the backend answered.
pub struct WriteNotices<F: FnOnce(&str) -> String> {
    pub done: String,
    pub rejected: F,
}

/// Sends a write and interprets the envelope: success notifies and reloads,
/// `success: false` shows the server message.
pub async fn post_and_reload<F>(
    env: &ConsoleEnv,
    request: &ApiRequest,
    notices: WriteNotices<F>,
) -> ActionOutcome
where
    F: FnOnce(&str) -> String,
{
    let body = match env.request(request).await {
        Ok(body) => body,
        Err(err) => return ActionOutcome::Failed(err),
    };

    let response: ApiResponse = ApiResponse::from_value(body);
    if response.success {
        env.alert(&notices.done).await;
        env.navigator.reload();
        ActionOutcome::Done
    } else {
        let message = response.message_or_default();
        tracing::info!(endpoint = %request.endpoint, %message, "write rejected by backend");
        env.alert(&(notices.rejected)(&message)).await;
        ActionOutcome::Rejected(message)
    }
}

/// Asks `prompt` first; only a "yes" sends the write.
pub async fn confirm_and_post<F>(
    env: &ConsoleEnv,
    prompt: &str,
    request: &ApiRequest,
    notices: WriteNotices<F>,
) -> ActionOutcome
where
    F: FnOnce(&str) -> String,
{
    if !env.confirm(prompt).await {
        return ActionOutcome::Cancelled;
    }
    post_and_reload(env, request, notices).await
}

/// Reads a `{success, data: [...]}` listing. Failures come back as text for
/// an inline message; no dialog is raised.
pub async fn fetch_list<T: DeserializeOwned>(
    env: &ConsoleEnv,
    request: &ApiRequest,
) -> Result<Vec<T>, String> {
    let body = env.fetch(request).await.map_err(|err| err.to_string())?;
    let response: ApiResponse<Vec<T>> = ApiResponse::from_value(body);
    if response.success {
        Ok(response.data.unwrap_or_default())
    } else {
        Err(response.message_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::Harness;
    use futures::executor::block_on;
    use serde_json::json;

    fn notices() -> WriteNotices<impl FnOnce(&str) -> String> {
        WriteNotices {
            done: "done".to_string(),
            rejected: |message: &str| format!("rejected: {message}"),
        }
    }

    #[test]
    fn declined_confirmation_sends_nothing() {
        let h = Harness::declining();
        let outcome = block_on(confirm_and_post(
            &h.env,
            "sure?",
            &ApiRequest::post("/x"),
            notices(),
        ));

        assert_eq!(outcome, ActionOutcome::Cancelled);
        assert!(h.http.requests().is_empty());
        assert_eq!(h.dialogs.confirms(), vec!["sure?".to_string()]);
    }

    #[test]
    fn rejected_write_shows_server_message_without_reload() {
        let h = Harness::new();
        h.http
            .respond_json(200, json!({ "success": false, "message": "in use" }));

        let outcome = block_on(post_and_reload(&h.env, &ApiRequest::post("/x"), notices()));

        assert_eq!(outcome, ActionOutcome::Rejected("in use".into()));
        assert_eq!(h.dialogs.alerts(), vec!["rejected: in use".to_string()]);
        assert_eq!(h.navigator.reloads(), 0);
    }

    #[test]
    fn transport_failure_is_not_reported_twice() {
        let h = Harness::new();
        h.http.respond(404, "Not Found", "");

        let outcome = block_on(post_and_reload(&h.env, &ApiRequest::post("/x"), notices()));

        assert!(matches!(outcome, ActionOutcome::Failed(TransportError::Status { code: 404, .. })));
        assert_eq!(h.dialogs.alerts().len(), 1);
        assert_eq!(h.navigator.reloads(), 0);
    }

    #[test]
    fn listing_returns_rows_or_server_message() {
        let h = Harness::new();
        h.http.respond_json(200, json!({ "success": true, "data": [1, 2, 3] }));
        h.http
            .respond_json(200, json!({ "success": false, "message": "db down" }));

        let rows: Result<Vec<u32>, String> = block_on(fetch_list(&h.env, &ApiRequest::get("/l")));
        assert_eq!(rows, Ok(vec![1, 2, 3]));

        let rows: Result<Vec<u32>, String> = block_on(fetch_list(&h.env, &ApiRequest::get("/l")));
        assert_eq!(rows, Err("db down".to_string()));
        assert!(h.dialogs.alerts().is_empty());
    }

    #[test]
    fn missing_listing_endpoint_stays_inline() {
        let h = Harness::new();
        h.http.respond(404, "Not Found", "");
        h.http.fail("offline");

        let rows: Result<Vec<u32>, String> = block_on(fetch_list(&h.env, &ApiRequest::get("/l")));
        assert_eq!(rows, Err("request failed (status 404)".to_string()));

        let rows: Result<Vec<u32>, String> = block_on(fetch_list(&h.env, &ApiRequest::get("/l")));
        assert!(rows.unwrap_err().starts_with("network error"));

        assert!(h.dialogs.alerts().is_empty());
    }
}
