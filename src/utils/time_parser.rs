//! 过期时间解析
//!
//! 绝对过期时间字段接受的格式：
//! - RFC3339：`2026-10-01T12:00:00Z`
//! - 本地日期时间：`2026-10-01T12:00`、`2026-10-01 12:00`（可带秒）
//! - 纯日期：`2026-10-01`（当天零点）

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// 解析过期时间字符串，本地格式按本地时区理解
pub fn parse_expiry(input: &str) -> Result<DateTime<Utc>, String> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| format!("unrecognized date format: '{}'", input))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| format!("'{}' does not exist in the local timezone", input))
}
