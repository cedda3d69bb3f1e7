/// 日志工具模块
///
/// 提供启动、批次和收尾阶段的日志辅助函数
use crate::config::Config;
use tracing::info;

/// 记录程序启动信息
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 竞赛解题数排行榜抓取");
    info!("📊 每批学生数: {}", config.batch_size);
    info!("⏱️ 批间等待: {} 毫秒", config.batch_delay_ms);
    info!(
        "开始时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
}

/// 记录花名册加载信息
pub fn log_roster_loaded(total: usize, batch_size: usize) {
    info!("✓ 找到 {} 名待抓取的学生", total);
    info!("📋 将以每批 {} 名的方式处理", batch_size);
    info!("💡 每批完成并落盘后再开始下一批\n");
}

/// 记录批次开始信息
pub fn log_batch_start(batch_num: usize, total_batches: usize, start: usize, end: usize, total: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始处理第 {}/{} 批", batch_num, total_batches);
    info!("🧑‍🎓 本批学生: {}-{} / 共 {} 名", start, end, total);
    info!("{}", "=".repeat(60));
}

/// 记录批次完成信息
pub fn log_batch_complete(batch_num: usize, done: usize, total: usize) {
    info!("\n{}", "─".repeat(60));
    info!("✓ 第 {} 批完成: 已落盘 {}/{} 名", batch_num, done, total);
    info!("{}", "─".repeat(60));
}

/// 打印最终统计信息
pub fn print_final_stats(total: usize, report_file: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部抓取完成");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 共 {} 名学生", total);
    info!("排行榜已保存至: {}", report_file);
    info!("{}", "=".repeat(60));
}
