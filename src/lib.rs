//! # Solve Leaderboard
//!
//! 一个汇总学生在四个刷题平台解题数并生成排行榜的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - 每个平台一个客户端，handle -> 解题数
//! - 在自己内部吸收所有网络/解析错误，失败一律折算为 0
//! - LeetCode 走 GraphQL 聚合 AC 数；Codeforces 按题目名去重；
//!   AtCoder 走 kenkoooo 统计服务；HackerRank 按 ch_id 去重
//!
//! ### ② 业务能力层（Services）
//! - `ScoreAggregator` - 一名学生四平台并发聚合，永不失败
//! - `ReportWriter` - 每批结束后整体覆写排行榜检查点，失败必须上抛
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 分批调度、批间节流、增量落盘
//!
//! ## 并发模型
//!
//! 批内对每名学生并发聚合，每名学生内部对四个平台并发查询；
//! 批与批严格串行，下一批在上一批落盘之后才开始，并以固定间隔
//! 等待来规避平台限流。结果顺序永远跟随花名册顺序。

pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use config::Config;
pub use error::{PlatformError, ReportError, RosterError};
pub use models::{load_roster, PlatformCounts, PlatformHandles, Student, StudentResult};
pub use orchestrator::{run_batches, App};
pub use services::{Aggregate, Persister, ReportWriter, ScoreAggregator};
