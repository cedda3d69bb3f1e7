use crate::models::student::PlatformHandles;
use serde::{Deserialize, Serialize};

/// 一名学生在四个平台的解题数统计
///
/// `total` 只能通过 [`PlatformCounts::new`] 计算得出，
/// 保证 total == leetcode + codeforces + atcoder + hackerrank 恒成立
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformCounts {
    pub leetcode: u64,
    pub codeforces: u64,
    pub atcoder: u64,
    pub hackerrank: u64,
    pub total: u64,
}

impl PlatformCounts {
    pub fn new(leetcode: u64, codeforces: u64, atcoder: u64, hackerrank: u64) -> Self {
        Self {
            leetcode,
            codeforces,
            atcoder,
            hackerrank,
            total: leetcode + codeforces + atcoder + hackerrank,
        }
    }
}

/// 单个学生的抓取结果
///
/// 每次运行中每名学生只创建一次，创建后不再修改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentResult {
    pub name: String,
    pub handles: PlatformHandles,
    pub counts: PlatformCounts,
}

impl StudentResult {
    pub fn new(name: String, handles: PlatformHandles, counts: PlatformCounts) -> Self {
        Self {
            name,
            handles,
            counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_is_sum_of_platforms() {
        let counts = PlatformCounts::new(3, 2, 1, 4);
        assert_eq!(counts.total, 10);
        assert_eq!(
            counts.total,
            counts.leetcode + counts.codeforces + counts.atcoder + counts.hackerrank
        );
    }

    #[test]
    fn test_total_all_zero() {
        let counts = PlatformCounts::new(0, 0, 0, 0);
        assert_eq!(counts.total, 0);
    }
}
