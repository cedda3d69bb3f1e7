//! 控制台排行榜表格 - 展示层
//!
//! 只做最终结果的人类可读展示，列取名字、两个代表性平台和总数

use crate::models::StudentResult;
use tracing::info;

/// 渲染排行榜为对齐的文本表格
pub fn render_leaderboard(results: &[StudentResult]) -> String {
    let name_width = results
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Name".len());

    let mut table = String::new();
    table.push_str(&format!(
        "{:<w$}  {:>8}  {:>10}  {:>7}\n",
        "Name",
        "LeetCode",
        "HackerRank",
        "Total",
        w = name_width
    ));
    table.push_str(&format!("{}\n", "-".repeat(name_width + 31)));

    for r in results {
        table.push_str(&format!(
            "{:<w$}  {:>8}  {:>10}  {:>7}\n",
            r.name,
            r.counts.leetcode,
            r.counts.hackerrank,
            r.counts.total,
            w = name_width
        ));
    }

    table
}

/// 逐行输出排行榜到日志
pub fn print_leaderboard(results: &[StudentResult]) {
    info!("\n🏆 最终排行榜:");
    for line in render_leaderboard(results).lines() {
        info!("{}", line);
    }
}
