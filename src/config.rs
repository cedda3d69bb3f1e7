/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 每批并发抓取的学生数量
    pub batch_size: usize,
    /// 批次之间的等待时间（毫秒），用于规避平台限流
    pub batch_delay_ms: u64,
    /// 单次请求超时（秒）
    pub request_timeout_secs: u64,
    /// 花名册文件路径
    pub roster_file: String,
    /// 排行榜输出文件路径
    pub report_file: String,
    // --- 各平台 API 配置 ---
    pub leetcode_api_url: String,
    pub codeforces_api_url: String,
    pub atcoder_api_url: String,
    pub hackerrank_api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            batch_size: 1,
            batch_delay_ms: 3000,
            request_timeout_secs: 10,
            roster_file: "students.json".to_string(),
            report_file: "final_leaderboard.json".to_string(),
            leetcode_api_url: "https://leetcode.com/graphql".to_string(),
            codeforces_api_url: "https://codeforces.com/api".to_string(),
            atcoder_api_url: "https://kenkoooo.com/atcoder/atcoder-api/v3".to_string(),
            hackerrank_api_url: "https://www.hackerrank.com/rest".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            batch_size: std::env::var("BATCH_SIZE").ok().and_then(|v| v.parse().ok()).filter(|&v| v > 0).unwrap_or(default.batch_size),
            batch_delay_ms: std::env::var("BATCH_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.batch_delay_ms),
            request_timeout_secs: std::env::var("REQUEST_TIMEOUT_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.request_timeout_secs),
            roster_file: std::env::var("ROSTER_FILE").unwrap_or(default.roster_file),
            report_file: std::env::var("REPORT_FILE").unwrap_or(default.report_file),
            leetcode_api_url: std::env::var("LEETCODE_API_URL").unwrap_or(default.leetcode_api_url),
            codeforces_api_url: std::env::var("CODEFORCES_API_URL").unwrap_or(default.codeforces_api_url),
            atcoder_api_url: std::env::var("ATCODER_API_URL").unwrap_or(default.atcoder_api_url),
            hackerrank_api_url: std::env::var("HACKERRANK_API_URL").unwrap_or(default.hackerrank_api_url),
        }
    }
}
