//! 解析サービス呼び出し（fetch API）

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use genfarm_common::{
    AnalysisResult, AnalyzeRequest, Analyzer, Error, Result, ServiceConfig, interpret_response,
};

pub struct FetchAnalyzer {
    service: ServiceConfig,
}

impl FetchAnalyzer {
    pub fn new(service: ServiceConfig) -> Self {
        Self { service }
    }
}

fn js_error(value: JsValue) -> Error {
    Error::NetworkOrParse(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

impl Analyzer for FetchAnalyzer {
    async fn analyze(&self, image_data: &str) -> Result<AnalysisResult> {
        let body = serde_json::to_string(&AnalyzeRequest { image_data })?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(&self.service.endpoint(), &opts)
            .map_err(js_error)?;
        let headers = request.headers();
        headers.set("Content-Type", "application/json").map_err(js_error)?;
        headers
            .set("Authorization", &self.service.authorization())
            .map_err(js_error)?;

        let window = web_sys::window()
            .ok_or_else(|| Error::NetworkOrParse("window is not available".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?;
        let resp: Response = resp_value.dyn_into().map_err(js_error)?;

        let text = JsFuture::from(resp.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;

        interpret_response(resp.status(), &text.as_string().unwrap_or_default())
    }
}
