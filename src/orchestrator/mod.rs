//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责分批调度和进度管理，是整个系统的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<Student>，分批 + 节流 + 落盘)
//!     ↓
//! services::ScoreAggregator (处理单个 Student，四平台并发)
//!     ↓
//! clients (单平台：handle -> 计数，吸收一切错误)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：batch_processor 管批量，aggregator 管单个学生
//! 2. **向下依赖**：编排层 → services → clients
//! 3. **无业务逻辑**：只做调度、落盘和统计，不碰平台细节

pub mod batch_processor;

pub use batch_processor::{run_batches, App};
