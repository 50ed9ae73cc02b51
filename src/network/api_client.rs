use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use crate::debug_log;
use crate::error::PanelError;
use crate::models::{ActionResponse, SessionAction, SessionKey, SessionStatus};

/// The two backend routes the panel consumes.
///
/// Implemented over `fetch` by `FetchSessionApi`; tests substitute a stub.
#[allow(async_fn_in_trait)]
pub trait SessionApi {
    /// `GET /session/{key}`
    async fn get_status(&self, key: &SessionKey) -> Result<SessionStatus, PanelError>;

    /// `POST /session/{key}/{action}`
    async fn post_action(
        &self,
        key: &SessionKey,
        action: SessionAction,
    ) -> Result<ActionResponse, PanelError>;
}

// REST client for the session endpoints
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchSessionApi;

impl SessionApi for FetchSessionApi {
    async fn get_status(&self, key: &SessionKey) -> Result<SessionStatus, PanelError> {
        let url = super::api_config().session_url(&encode_key(key));
        Self::fetch_json(&url, "GET").await
    }

    async fn post_action(
        &self,
        key: &SessionKey,
        action: SessionAction,
    ) -> Result<ActionResponse, PanelError> {
        let url = super::api_config().session_action_url(&encode_key(key), action.as_str());
        Self::fetch_json(&url, "POST").await
    }
}

impl FetchSessionApi {
    // Helper function to make fetch requests and decode the JSON body
    async fn fetch_json<T: DeserializeOwned>(url: &str, method: &str) -> Result<T, PanelError> {
        use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

        debug_log!("{} {}", method, url);

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        let headers = Headers::new()?;
        headers.append("Accept", "application/json")?;
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window = web_sys::window().ok_or_else(|| PanelError::Dom("no global window".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        let text = JsFuture::from(resp.text()?).await?;
        let body = text.as_string().unwrap_or_default();

        decode_body(resp.ok(), resp.status(), &resp.status_text(), &body)
    }
}

/// Decode a response body.  The backend reports application errors in the
/// JSON `error` field, often with a non-2xx status, so the body is decoded
/// first and the HTTP status only matters when that fails.
pub(crate) fn decode_body<T: DeserializeOwned>(
    ok: bool,
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<T, PanelError> {
    match serde_json::from_str::<T>(body) {
        Ok(value) => Ok(value),
        Err(_) if !ok => Err(PanelError::Http {
            status,
            status_text: status_text.to_string(),
        }),
        Err(e) => Err(e.into()),
    }
}

fn encode_key(key: &SessionKey) -> String {
    String::from(js_sys::encode_uri_component(key.as_str()))
}

#[cfg(all(test, target_arch = "wasm32"))]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;

    /// Canned responses plus a record of every call.  Unset responses fail
    /// with a transport error.
    #[derive(Default)]
    pub struct StubApi {
        pub status: RefCell<Option<Result<SessionStatus, PanelError>>>,
        pub action: RefCell<Option<Result<ActionResponse, PanelError>>>,
        pub status_calls: RefCell<Vec<String>>,
        pub action_calls: RefCell<Vec<(String, SessionAction)>>,
    }

    impl SessionApi for StubApi {
        async fn get_status(&self, key: &SessionKey) -> Result<SessionStatus, PanelError> {
            self.status_calls.borrow_mut().push(key.to_string());
            self.status
                .borrow()
                .clone()
                .unwrap_or_else(|| Err(PanelError::Transport("no stub".into())))
        }

        async fn post_action(
            &self,
            key: &SessionKey,
            action: SessionAction,
        ) -> Result<ActionResponse, PanelError> {
            self.action_calls.borrow_mut().push((key.to_string(), action));
            self.action
                .borrow()
                .clone()
                .unwrap_or_else(|| Err(PanelError::Transport("no stub".into())))
        }
    }
}
