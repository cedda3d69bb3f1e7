//! HackerRank 客户端
//!
//! 走较为公开的 recent_challenges 接口，单页最多取 1000 条完成记录。
//! 同一个挑战可能出现多条记录，按 ch_id 去重后计数

use crate::config::Config;
use crate::error::PlatformError;
use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, warn};

/// 单页拉取的完成记录上限
const RECENT_CHALLENGES_LIMIT: &str = "1000";

/// HackerRank API 客户端
pub struct HackerRankClient {
    http: reqwest::Client,
    base_url: String,
}

impl HackerRankClient {
    /// 创建新的 HackerRank 客户端
    pub fn new(config: &Config, http: reqwest::Client) -> Self {
        Self {
            http,
            base_url: config.hackerrank_api_url.clone(),
        }
    }

    /// 获取用户完成的不同挑战数
    ///
    /// 任何失败都折算为 0，绝不向调用方抛错；
    /// 警告日志带上 HTTP 状态码（拿得到的话）或错误信息
    pub async fn fetch_count(&self, handle: &str) -> u64 {
        match self.try_fetch(handle).await {
            Ok(count) => {
                debug!("HackerRank {} -> {}", handle, count);
                count
            }
            Err(e) => {
                warn!("❌ HackerRank 获取失败 ({}): {}", handle, e);
                0
            }
        }
    }

    async fn try_fetch(&self, handle: &str) -> Result<u64, PlatformError> {
        let url = format!("{}/hackers/{}/recent_challenges", self.base_url, handle);

        let resp = self
            .http
            .get(&url)
            .query(&[("limit", RECENT_CHALLENGES_LIMIT)])
            .header("Accept", "application/json")
            .header("Referer", format!("https://www.hackerrank.com/{}", handle))
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(PlatformError::HttpStatus(resp.status()));
        }

        let body: Value = resp.json().await?;

        count_unique_challenges(&body)
    }
}

/// 统计 models 中不同 ch_id 的数量
fn count_unique_challenges(body: &Value) -> Result<u64, PlatformError> {
    let models = body
        .get("models")
        .and_then(Value::as_array)
        .ok_or(PlatformError::UnexpectedShape("缺少 models 数组"))?;

    let unique: HashSet<u64> = models
        .iter()
        .filter_map(|m| m.get("ch_id").and_then(Value::as_u64))
        .collect();

    Ok(unique.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_count_dedups_by_challenge_id() {
        // 同一挑战的多条提交记录只计一次
        let body = json!({ "models": [
            { "ch_id": 5, "name": "Solve Me First" },
            { "ch_id": 5, "name": "Solve Me First" },
            { "ch_id": 7, "name": "Simple Array Sum" }
        ] });

        assert_eq!(count_unique_challenges(&body).unwrap(), 2);
    }

    #[test]
    fn test_count_empty_models_is_zero() {
        let body = json!({ "models": [] });
        assert_eq!(count_unique_challenges(&body).unwrap(), 0);
    }

    #[test]
    fn test_missing_models_is_error() {
        let body = json!({ "error": "not found" });
        assert!(matches!(
            count_unique_challenges(&body),
            Err(PlatformError::UnexpectedShape(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_count_returns_zero_on_network_error() {
        let config = Config {
            hackerrank_api_url: "http://127.0.0.1:9/rest".to_string(),
            ..Config::default()
        };
        let client = HackerRankClient::new(&config, crate::clients::build_http_client(1).unwrap());

        assert_eq!(client.fetch_count("whoever").await, 0);
    }
}
