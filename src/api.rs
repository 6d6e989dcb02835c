//! Enquiry submission over the browser fetch API.

use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::form::{Lead, SubmitOutcome};

pub const SUBMIT_ENDPOINT: &str = "/api/submit";

/// Expected shape of a non-ok response body. `error` must be a string;
/// anything else falls back to a status-line message.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// POST the lead as JSON and classify the result. Exactly one request per
/// call; no retries, no timeout beyond the transport's own.
pub async fn submit_lead(lead: &Lead) -> SubmitOutcome {
    let body = match serde_json::to_string(lead) {
        Ok(body) => body,
        Err(_) => return SubmitOutcome::TransportFailed,
    };
    match post_json(SUBMIT_ENDPOINT, &body).await {
        Ok(reply) if reply.ok => SubmitOutcome::Accepted,
        Ok(reply) => SubmitOutcome::Rejected(rejection_message(reply.status, &reply.body)),
        Err(err) => {
            web_sys::console::warn_1(&err);
            SubmitOutcome::TransportFailed
        }
    }
}

struct Reply {
    ok: bool,
    status: u16,
    body: String,
}

async fn post_json(url: &str, body: &str) -> Result<Reply, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(&JsValue::from_str(body));

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    let ok = response.ok();
    let status = response.status();
    let body = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .unwrap_or_default();
    Ok(Reply { ok, status, body })
}

fn rejection_message(status: u16, body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => format!("Request failed with status {status}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_field_is_used_verbatim() {
        let body = r#"{"error": "Duplicate mobile number"}"#;
        assert_eq!(rejection_message(409, body), "Duplicate mobile number");
    }

    #[test]
    fn malformed_payload_falls_back_to_status_line() {
        for body in ["", "<html>502</html>", r#"{"error": 42}"#, r#"{"detail": "x"}"#] {
            assert_eq!(
                rejection_message(502, body),
                "Request failed with status 502",
                "{body:?}"
            );
        }
    }
}
