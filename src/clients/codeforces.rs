//! Codeforces 客户端
//!
//! user.status 返回的是提交记录而不是题目，同一道题可能被提交多次，
//! 所以必须按题目名去重后再计数

use crate::config::Config;
use crate::error::PlatformError;
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

/// Codeforces API 客户端
pub struct CodeforcesClient {
    http: reqwest::Client,
    base_url: String,
}

impl CodeforcesClient {
    /// 创建新的 Codeforces 客户端
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.codeforces_api_url.clone(),
        }
    }

    /// 获取用户 AC 的不同题目数
    ///
    /// 任何失败都折算为 0，绝不向调用方抛错
    pub async fn fetch_count(&self, handle: &str) -> u64 {
        match self.try_fetch(handle).await {
            Ok(count) => {
                debug!("Codeforces {} -> {}", handle, count);
                count
            }
            Err(e) => {
                warn!("❌ Codeforces 获取失败 ({}): {}", handle, e);
                0
            }
        }
    }

    async fn try_fetch(&self, handle: &str) -> Result<u64, PlatformError> {
        let url = format!("{}/user.status", self.base_url);

        let resp = self
            .http
            .get(&url)
            .query(&[("handle", handle)])
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(PlatformError::HttpStatus(resp.status()));
        }

        let body: Value = resp.json().await?;

        count_accepted_problems(&body)
    }
}

/// 统计 verdict == "OK" 的提交中不同题目名的数量
fn count_accepted_problems(body: &Value) -> Result<u64, PlatformError> {
    let submissions = body
        .get("result")
        .and_then(Value::as_array)
        .ok_or(PlatformError::UnexpectedShape("缺少 result 数组"))?;

    let solved: HashSet<&str> = submissions
        .iter()
        .filter(|s| s.get("verdict").and_then(Value::as_str) == Some("OK"))
        .filter_map(|s| s.pointer("/problem/name").and_then(Value::as_str))
        .collect();

    Ok(solved.len() as u64)
}
