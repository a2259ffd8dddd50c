/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Case-insensitive comparison of party ids and table labels.
///
/// Surrounding whitespace is ignored; Unicode lowercase mapping is used so
/// `"MÜLLER"` matches `"müller"`.
pub fn names_match(a: &str, b: &str) -> bool {
    a.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .eq(b.trim().chars().flat_map(char::to_lowercase))
}
