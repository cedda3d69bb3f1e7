//! 错误类型定义
//!
//! 错误分为两类：
//! - 致命错误（花名册加载、排行榜写入）：向上传播，终止整个运行
//! - 平台抓取错误：在适配器边界被吸收，归一化为 0，绝不向上传播

use thiserror::Error;

/// 花名册加载错误（致命）
#[derive(Debug, Error)]
pub enum RosterError {
    /// 无法读取花名册文件
    #[error("无法读取花名册文件 {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 花名册 JSON 解析失败
    #[error("无法解析花名册文件 {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// 排行榜写入错误（致命）
///
/// 长时间抓取后丢失检查点是严重损失，所以写入失败绝不吞掉
#[derive(Debug, Error)]
pub enum ReportError {
    /// 结果序列化失败
    #[error("排行榜序列化失败: {0}")]
    Serialize(#[source] serde_json::Error),
    /// 文件写入失败
    #[error("无法写入排行榜文件 {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 平台抓取错误（瞬时）
///
/// 只在适配器内部流转，对外统一折算成计数 0
#[derive(Debug, Error)]
pub enum PlatformError {
    /// 网络请求失败（含超时）
    #[error("请求失败: {0}")]
    Request(#[from] reqwest::Error),
    /// HTTP 状态码异常
    #[error("HTTP 状态码 {0}")]
    HttpStatus(reqwest::StatusCode),
    /// 响应结构不符合预期
    #[error("响应结构异常: {0}")]
    UnexpectedShape(&'static str),
}
