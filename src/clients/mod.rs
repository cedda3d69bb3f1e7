//! 各平台 API 客户端
//!
//! 每个客户端只负责"handle -> 解题数"一件事，在内部吸收所有
//! 网络和解析错误，对外永远返回一个非负计数（失败时为 0）

pub mod atcoder;
pub mod codeforces;
pub mod hackerrank;
pub mod leetcode;

pub use atcoder::AtCoderClient;
pub use codeforces::CodeforcesClient;
pub use hackerrank::HackerRankClient;
pub use leetcode::LeetCodeClient;

use anyhow::Result;
use std::time::Duration;

/// HackerRank 等平台会拒绝非浏览器 UA，统一伪装成 Chrome
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36";

/// 构建共享的 HTTP 客户端
///
/// 超时作用于单次请求整体，超时的请求与网络错误同等对待（计 0）
pub fn build_http_client(timeout_secs: u64) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(BROWSER_USER_AGENT)
        .build()?;

    Ok(client)
}
