use crate::error::RosterError;
use crate::models::student::Student;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// 从 JSON 文件加载学生花名册
///
/// 加载失败是致命错误：在发起任何网络请求之前就终止整个运行
pub async fn load_roster(roster_path: &Path) -> Result<Vec<Student>, RosterError> {
    info!("📁 正在加载花名册: {}", roster_path.display());

    let content = fs::read_to_string(roster_path)
        .await
        .map_err(|e| RosterError::Read {
            path: roster_path.display().to_string(),
            source: e,
        })?;

    let students: Vec<Student> =
        serde_json::from_str(&content).map_err(|e| RosterError::Parse {
            path: roster_path.display().to_string(),
            source: e,
        })?;

    info!("✓ 成功加载 {} 名学生", students.len());

    Ok(students)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_valid_roster() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"name": "张三", "handles": {{"leetcode": "zs", "codeforces": "zs_cf", "atcoder": "zs_ac", "hackerrank": "zs_hr"}}}},
                {{"name": "李四", "handles": {{"leetcode": "ls", "codeforces": "ls_cf", "atcoder": "ls_ac", "hackerrank": "ls_hr"}}}}
            ]"#
        )
        .unwrap();

        let students = load_roster(file.path()).await.unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].name, "张三");
        assert_eq!(students[1].handles.codeforces, "ls_cf");
    }

    #[tokio::test]
    async fn test_load_missing_file_fails() {
        let result = load_roster(Path::new("no_such_roster.json")).await;
        assert!(matches!(result, Err(RosterError::Read { .. })));
    }

    #[tokio::test]
    async fn test_load_malformed_roster_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not a roster").unwrap();

        let result = load_roster(file.path()).await;
        assert!(matches!(result, Err(RosterError::Parse { .. })));
    }
}
