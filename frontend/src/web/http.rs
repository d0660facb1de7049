//! 浏览器 HTTP 客户端
//!
//! 使用 `gloo-net` 的 fetch 封装实现核心库的 [`HttpClient`] 接口。

use gloo_net::http::{Request, RequestBuilder};
use printstrokes::{ClientError, ClientResult, HttpClient, HttpMethod, HttpRequest, HttpResponse};

#[derive(Clone, Copy, Debug, Default)]
pub struct FetchHttpClient;

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        let mut builder: RequestBuilder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
        };
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let sent = match req.body {
            Some(body) => builder
                .body(body)
                .map_err(|e| ClientError::Transport(format!("请求构建失败: {}", e)))?
                .send()
                .await,
            None => builder.send().await,
        };
        let response = sent.map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(HttpResponse { status, body })
    }
}
