use serde::{Deserialize, Serialize};

/// 学生在各平台的用户名
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformHandles {
    pub leetcode: String,
    pub codeforces: String,
    pub atcoder: String,
    pub hackerrank: String,
}

/// 花名册中的一名学生
///
/// 只读输入，程序启动时一次性加载，之后不再修改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub name: String,
    pub handles: PlatformHandles,
}
