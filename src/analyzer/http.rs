//! 解析サービスへのHTTPクライアント（reqwest）

use genfarm_common::{AnalysisResult, AnalyzeRequest, Analyzer, Error, ServiceConfig, interpret_response};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct HttpAnalyzer {
    client: reqwest::Client,
    service: ServiceConfig,
}

impl HttpAnalyzer {
    pub fn new(service: ServiceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            service,
        }
    }
}

impl Analyzer for HttpAnalyzer {
    async fn analyze(&self, image_data: &str) -> genfarm_common::Result<AnalysisResult> {
        let url = self.service.endpoint();
        let body = serde_json::to_string(&AnalyzeRequest { image_data })?;
        debug!(%url, bytes = body.len(), "POST analyze-plant");

        let response = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, self.service.authorization())
            .body(body)
            .send()
            .await
            .map_err(|e| Error::NetworkOrParse(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| Error::NetworkOrParse(e.to_string()))?;
        debug!(status, "analyze-plant responded");

        interpret_response(status, &text)
    }
}
