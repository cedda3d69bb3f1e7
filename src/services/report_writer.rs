//! 排行榜写入服务 - 业务能力层
//!
//! 只负责"写排行榜文件"能力，不关心流程

use crate::config::Config;
use crate::error::ReportError;
use crate::models::StudentResult;
use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

/// 检查点持久化能力
#[async_trait]
pub trait Persister: Send + Sync {
    /// 用当前完整结果整体覆盖目标文件
    ///
    /// 写入失败必须向上传播：长时间抓取后丢检查点是严重损失
    async fn persist(&self, results: &[StudentResult]) -> Result<(), ReportError>;
}

/// 排行榜写入服务
///
/// 职责：
/// - 每个批次结束后把完整结果写入排行榜文件
/// - 整体覆盖而不是追加，文件永远反映最近完成的批次
pub struct ReportWriter {
    report_file_path: String,
}

impl ReportWriter {
    /// 创建新的排行榜写入服务
    pub fn new(config: &Config) -> Self {
        Self {
            report_file_path: config.report_file.clone(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            report_file_path: path.into(),
        }
    }
}

#[async_trait]
impl Persister for ReportWriter {
    async fn persist(&self, results: &[StudentResult]) -> Result<(), ReportError> {
        let json = serde_json::to_string_pretty(results).map_err(ReportError::Serialize)?;

        fs::write(&self.report_file_path, json)
            .await
            .map_err(|e| ReportError::Write {
                path: self.report_file_path.clone(),
                source: e,
            })?;

        debug!(
            "💾 检查点已写入: {} ({} 条结果)",
            self.report_file_path,
            results.len()
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlatformCounts, PlatformHandles, StudentResult};

    fn sample_result(name: &str) -> StudentResult {
        StudentResult::new(
            name.to_string(),
            PlatformHandles {
                leetcode: "h".to_string(),
                codeforces: "h".to_string(),
                atcoder: "h".to_string(),
                hackerrank: "h".to_string(),
            },
            PlatformCounts::new(1, 2, 3, 4),
        )
    }

    #[tokio::test]
    async fn test_persist_overwrites_previous_checkpoint() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("leaderboard.json");
        let writer = ReportWriter::with_path(path.to_string_lossy().to_string());

        writer.persist(&[sample_result("A")]).await.unwrap();
        writer
            .persist(&[sample_result("A"), sample_result("B")])
            .await
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Vec<StudentResult> = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].name, "B");
        assert_eq!(parsed[1].counts.total, 10);
    }

    #[tokio::test]
    async fn test_persist_to_bad_path_fails_loudly() {
        let writer = ReportWriter::with_path("/no/such/dir/leaderboard.json");
        let result = writer.persist(&[sample_result("A")]).await;
        assert!(matches!(result, Err(ReportError::Write { .. })));
    }
}
