//! 日期显示模块
//!
//! 服务端以 ISO 8601 字符串传输日期（`2025-06-15` 或
//! `2025-06-15T09:30:00`），此模块负责解析并格式化为界面显示文本。

use chrono::{NaiveDate, NaiveDateTime};

/// 缺失日期时的占位符
pub const MISSING: &str = "—";

/// 解析日期或日期时间字符串，只保留日期部分
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|dt| dt.date())
        })
}

/// 格式化为 `15 Jun 2025`，无法解析时原样返回
pub fn display_date(s: &str) -> String {
    match parse_date(s) {
        Some(date) => date.format("%-d %b %Y").to_string(),
        None => s.to_string(),
    }
}

/// 可选日期的显示文本
pub fn display_optional(s: Option<&str>) -> String {
    match s {
        Some(s) if !s.trim().is_empty() => display_date(s),
        _ => MISSING.to_string(),
    }
}

/// 日历列标题，例如 `Mon 19 May`
pub fn display_day_heading(s: &str) -> String {
    match parse_date(s) {
        Some(date) => date.format("%a %-d %b").to_string(),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_plain_dates() {
        assert_eq!(display_date("2025-06-15"), "15 Jun 2025");
        assert_eq!(display_date("2025-07-01"), "1 Jul 2025");
    }

    #[test]
    fn formats_datetimes_by_date() {
        assert_eq!(display_date("2025-05-19T08:00:00"), "19 May 2025");
        assert_eq!(display_date("2025-05-19T08:00:00.123456"), "19 May 2025");
    }

    #[test]
    fn unparseable_text_is_kept() {
        assert_eq!(display_date("next week"), "next week");
    }

    #[test]
    fn optional_dates() {
        assert_eq!(display_optional(None), MISSING);
        assert_eq!(display_optional(Some("")), MISSING);
        assert_eq!(display_optional(Some("2025-06-01")), "1 Jun 2025");
    }

    #[test]
    fn day_heading() {
        assert_eq!(display_day_heading("2025-05-19"), "Mon 19 May");
    }
}
