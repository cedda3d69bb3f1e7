//! 学生成绩聚合服务 - 业务能力层
//!
//! 只负责"一名学生 -> 一条结果"能力，不关心批次和顺序

use crate::clients::{
    build_http_client, AtCoderClient, CodeforcesClient, HackerRankClient, LeetCodeClient,
};
use crate::config::Config;
use crate::models::{PlatformCounts, Student, StudentResult};
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

/// 聚合能力
///
/// 抽出 trait 是为了让调度层可以不接网络地被驱动
#[async_trait]
pub trait Aggregate: Send + Sync {
    /// 并发查询四个平台并合并为一条学生结果，永不失败
    async fn aggregate(&self, student: &Student) -> StudentResult;
}

/// 四平台成绩聚合器
///
/// 职责：
/// - 对一名学生的四个 handle 并发发起四次查询
/// - 等四个结果全部就绪后才合并返回，不暴露任何中间状态
/// - 不出现 Vec<Student>，不关心批次
pub struct ScoreAggregator {
    leetcode: LeetCodeClient,
    codeforces: CodeforcesClient,
    atcoder: AtCoderClient,
    hackerrank: HackerRankClient,
}

impl ScoreAggregator {
    /// 创建新的聚合器，四个客户端共享同一个 HTTP 连接池
    pub fn new(config: &Config) -> Result<Self> {
        let http = build_http_client(config.request_timeout_secs)?;

        Ok(Self {
            leetcode: LeetCodeClient::new(config, http.clone()),
            codeforces: CodeforcesClient::new(config, http.clone()),
            atcoder: AtCoderClient::new(config, http.clone()),
            hackerrank: HackerRankClient::new(config, http),
        })
    }
}

#[async_trait]
impl Aggregate for ScoreAggregator {
    async fn aggregate(&self, student: &Student) -> StudentResult {
        debug!("正在聚合学生: {}", student.name);

        let handles = &student.handles;

        // 四个平台并发查询，单个平台失败已在客户端内折算为 0
        let (leetcode, codeforces, atcoder, hackerrank) = tokio::join!(
            self.leetcode.fetch_count(&handles.leetcode),
            self.codeforces.fetch_count(&handles.codeforces),
            self.atcoder.fetch_count(&handles.atcoder),
            self.hackerrank.fetch_count(&handles.hackerrank),
        );

        StudentResult::new(
            student.name.clone(),
            handles.clone(),
            PlatformCounts::new(leetcode, codeforces, atcoder, hackerrank),
        )
    }
}
