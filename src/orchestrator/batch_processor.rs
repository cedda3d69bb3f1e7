//! 批量抓取调度器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责花名册的分批抓取和进度管理。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：创建聚合器和排行榜写入服务
//! 2. **花名册加载**：启动时一次性加载所有学生（`Vec<Student>`）
//! 3. **分批处理**：按 batch_size 切批，批内并发，批间串行
//! 4. **节流控制**：批与批之间等待 batch_delay_ms，规避平台限流
//! 5. **增量持久化**：每个批次结束后整体覆写排行榜文件
//! 6. **最终展示**：全部完成后输出控制台排行榜
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个学生的细节，向下委托 aggregator
//! - **结果归属**：结果序列只由调度器持有和追加，持久化只借用
//! - **严格顺序**：下一批永远在上一批落盘之后才开始，这正是限流手段本身

use crate::config::Config;
use crate::models::{load_roster, Student, StudentResult};
use crate::services::{Aggregate, Persister, ReportWriter, ScoreAggregator};
use crate::utils::logging::{
    log_batch_complete, log_batch_start, log_roster_loaded, log_startup, print_final_stats,
};
use crate::utils::table::print_leaderboard;
use anyhow::Result;
use futures::future::join_all;
use std::path::Path;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// 应用主结构
pub struct App {
    config: Config,
    aggregator: ScoreAggregator,
    report_writer: ReportWriter,
}

impl App {
    /// 初始化应用
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let aggregator = ScoreAggregator::new(&config)?;
        let report_writer = ReportWriter::new(&config);

        Ok(Self {
            config,
            aggregator,
            report_writer,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<Vec<StudentResult>> {
        // 加载花名册，失败时在发起任何网络请求之前终止
        let students = load_roster(Path::new(&self.config.roster_file)).await?;

        if students.is_empty() {
            warn!("⚠️ 花名册为空，程序结束");
            return Ok(Vec::new());
        }

        log_roster_loaded(students.len(), self.config.batch_size);

        // 分批抓取
        let results = run_batches(
            &students,
            self.config.batch_size,
            self.config.batch_delay_ms,
            &self.aggregator,
            &self.report_writer,
        )
        .await?;

        // 输出最终排行榜和统计
        print_leaderboard(&results);
        print_final_stats(results.len(), &self.config.report_file);

        Ok(results)
    }
}

/// 分批驱动聚合器并在每批结束后落盘
///
/// - 批内按花名册顺序并发，结果顺序跟随输入顺序而不是完成顺序
/// - 每个批次（含最后一批）结束后用完整结果覆写检查点
/// - 除最后一批外，批与批之间等待 `batch_delay_ms`
/// - 落盘失败向上传播，单个学生的抓取失败不存在（聚合器永不失败）
pub async fn run_batches<A: Aggregate, P: Persister>(
    students: &[Student],
    batch_size: usize,
    batch_delay_ms: u64,
    aggregator: &A,
    persister: &P,
) -> Result<Vec<StudentResult>> {
    // batch_size 为 0 没有意义，按 1 处理
    let batch_size = batch_size.max(1);
    let total = students.len();
    let total_batches = (total + batch_size - 1) / batch_size;

    let mut results: Vec<StudentResult> = Vec::with_capacity(total);

    for (batch_idx, batch) in students.chunks(batch_size).enumerate() {
        let batch_start = batch_idx * batch_size;
        log_batch_start(
            batch_idx + 1,
            total_batches,
            batch_start + 1,
            batch_start + batch.len(),
            total,
        );

        // 批内并发，join_all 保证结果顺序与输入顺序一致
        let batch_results =
            join_all(batch.iter().map(|student| aggregator.aggregate(student))).await;
        results.extend(batch_results);

        // 每批结束立即落盘，中断时文件里永远是最近完成的批次
        persister.persist(&results).await?;

        log_batch_complete(batch_idx + 1, results.len(), total);

        if batch_start + batch.len() < total {
            sleep(Duration::from_millis(batch_delay_ms)).await;
        }
    }

    Ok(results)
}
