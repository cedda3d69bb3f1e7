//! LeetCode 客户端
//!
//! 通过 GraphQL 接口一次性取回用户在所有难度上的累计 AC 数

use crate::config::Config;
use crate::error::PlatformError;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// LeetCode API 客户端
pub struct LeetCodeClient {
    http: reqwest::Client,
    base_url: String,
}

impl LeetCodeClient {
    /// 创建新的 LeetCode 客户端
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.leetcode_api_url.clone(),
        }
    }

    /// 获取用户累计 AC 题数
    ///
    /// 任何失败都折算为 0，绝不向调用方抛错
    pub async fn fetch_count(&self, handle: &str) -> u64 {
        match self.try_fetch(handle).await {
            Ok(count) => {
                debug!("LeetCode {} -> {}", handle, count);
                count
            }
            Err(e) => {
                warn!("❌ LeetCode 获取失败 ({}): {}", handle, e);
                0
            }
        }
    }

    async fn try_fetch(&self, handle: &str) -> Result<u64, PlatformError> {
        let query = format!(
            r#"query {{ matchedUser(username: "{}") {{ submitStatsGlobal {{ acSubmissionNum {{ difficulty count }} }} }} }}"#,
            handle
        );

        let resp = self
            .http
            .post(&self.base_url)
            .json(&json!({ "query": query }))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(PlatformError::HttpStatus(resp.status()));
        }

        let body: Value = resp.json().await?;

        parse_total_accepted(&body)
    }
}

/// 从 GraphQL 响应中取出 difficulty == "All" 的 AC 数
fn parse_total_accepted(body: &Value) -> Result<u64, PlatformError> {
    body.pointer("/data/matchedUser/submitStatsGlobal/acSubmissionNum")
        .and_then(Value::as_array)
        .and_then(|entries| {
            entries
                .iter()
                .find(|e| e.get("difficulty").and_then(Value::as_str) == Some("All"))
        })
        .and_then(|e| e.get("count").and_then(Value::as_u64))
        .ok_or(PlatformError::UnexpectedShape(
            "缺少 acSubmissionNum 中 All 档的 count 字段",
        ))
}
