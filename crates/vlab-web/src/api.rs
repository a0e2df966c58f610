use vlab::{ApiRequest, ApiResponse, AuthError};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

/// Moves [`ApiRequest`]s over `fetch`. Any status comes back as an
/// [`ApiResponse`]; only transport failures are errors.
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn send(&self, req: &ApiRequest) -> Result<ApiResponse, AuthError> {
        let url = req.url(&self.base_url);
        let request = self.build(req, &url).map_err(network)?;
        let resp = self.do_fetch(request).await?;
        let status = resp.status();
        let body = self.text(resp).await?;
        Ok(ApiResponse::new(status, body))
    }

    fn build(&self, req: &ApiRequest, url: &str) -> Result<Request, JsValue> {
        let headers = Headers::new()?;
        for (name, value) in req.headers() {
            headers.set(name, &value)?;
        }
        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }
        Request::new_with_str_and_init(url, &opts)
    }

    async fn do_fetch(&self, request: Request) -> Result<Response, AuthError> {
        let window = crate::dom::window();
        let resp_val = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network)?;
        resp_val
            .dyn_into()
            .map_err(|_| AuthError::Network("not a Response".to_string()))
    }

    async fn text(&self, resp: Response) -> Result<String, AuthError> {
        let text = JsFuture::from(resp.text().map_err(network)?)
            .await
            .map_err(network)?;
        text.as_string()
            .ok_or_else(|| AuthError::Network("body is not a string".to_string()))
    }
}

fn network(e: JsValue) -> AuthError {
    let detail = format!("{e:?}");
    web_sys::console::warn_1(&format!("api: fetch failed: {detail}").into());
    AuthError::Network(detail)
}
