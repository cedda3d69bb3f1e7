//! AtCoder 客户端
//!
//! AtCoder 官方没有统计接口，走 kenkoooo 的第三方聚合服务，
//! ac_rank 接口直接返回预先算好的 AC 数

use crate::config::Config;
use crate::error::PlatformError;
use serde_json::Value;
use tracing::{debug, warn};

/// AtCoder 统计服务客户端
pub struct AtCoderClient {
    http: reqwest::Client,
    base_url: String,
}

impl AtCoderClient {
    /// 创建新的 AtCoder 客户端
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.atcoder_api_url.clone(),
        }
    }

    /// 获取用户 AC 题数
    ///
    /// 任何失败都折算为 0，绝不向调用方抛错
    pub async fn fetch_count(&self, handle: &str) -> u64 {
        match self.try_fetch(handle).await {
            Ok(count) => {
                debug!("AtCoder {} -> {}", handle, count);
                count
            }
            Err(e) => {
                warn!("❌ AtCoder 获取失败 ({}): {}", handle, e);
                0
            }
        }
    }

    async fn try_fetch(&self, handle: &str) -> Result<u64, PlatformError> {
        let url = format!("{}/user/ac_rank", self.base_url);

        let resp = self
            .http
            .get(&url)
            .query(&[("user", handle)])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(PlatformError::HttpStatus(resp.status()));
        }

        let body: Value = resp.json().await?;

        parse_ac_count(&body)
    }
}

fn parse_ac_count(body: &Value) -> Result<u64, PlatformError> {
    body.get("count")
        .and_then(Value::as_u64)
        .ok_or(PlatformError::UnexpectedShape("缺少 count 字段"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_ac_count() {
        let body = json!({ "count": 142, "rank": 3077 });
        assert_eq!(parse_ac_count(&body).unwrap(), 142);
    }

    #[test]
    fn test_parse_missing_count_is_error() {
        let body = json!({ "message": "user not found" });
        assert!(matches!(
            parse_ac_count(&body),
            Err(PlatformError::UnexpectedShape(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_count_returns_zero_on_network_error() {
        let config = Config {
            atcoder_api_url: "http://127.0.0.1:9/atcoder-api/v3".to_string(),
            ..Config::default()
        };
        let client = AtCoderClient::new(&config, crate::clients::build_http_client(1).unwrap());

        assert_eq!(client.fetch_count("whoever").await, 0);
    }
}
