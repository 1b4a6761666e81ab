//! 日期与金额工具
//!
//! 行合计与月份区间的计算为纯函数，便于单元测试。

use chrono::{Datelike, Days, Local, Months, NaiveDate};

/// 当前本地日期
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// 给定日期所在月份的首日与末日
pub fn month_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = day.with_day0(0).unwrap_or(day);
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.checked_sub_days(Days::new(1)))
        .unwrap_or(day);
    (start, end)
}

/// 闭区间内的每一天，`from > to` 时为空
pub fn each_date(from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut cursor = from;
    while cursor <= to {
        out.push(cursor);
        match cursor.checked_add_days(Days::new(1)) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    out
}

/// 行合计：数量 × 单价，两位小数
///
/// 表单输入是自由文本，无法解析的值按 0 处理，绝不 panic。
pub fn line_total(quantity: &str, rate: &str) -> String {
    let quantity = parse_or_zero(quantity);
    let rate = parse_or_zero(rate);
    format_amount(quantity * rate)
}

/// 金额显示：两位小数
pub fn format_amount(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.2}")
    } else {
        "0.00".to_string()
    }
}

fn parse_or_zero(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

// =========================================================
// 单元测试 (Unit Tests)
// =========================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_bounds_covers_whole_month() {
        let (start, end) = month_bounds(date(2026, 8, 7));
        assert_eq!(start, date(2026, 8, 1));
        assert_eq!(end, date(2026, 8, 31));
    }

    #[test]
    fn month_bounds_handles_february() {
        let (start, end) = month_bounds(date(2024, 2, 15));
        assert_eq!(start, date(2024, 2, 1));
        assert_eq!(end, date(2024, 2, 29));
    }

    #[test]
    fn each_date_is_inclusive() {
        let days = each_date(date(2026, 8, 30), date(2026, 9, 2));
        assert_eq!(days.len(), 4);
        assert_eq!(days[0], date(2026, 8, 30));
        assert_eq!(days[3], date(2026, 9, 2));
    }

    #[test]
    fn each_date_empty_when_reversed() {
        assert!(each_date(date(2026, 8, 2), date(2026, 8, 1)).is_empty());
    }

    #[test]
    fn line_total_multiplies_and_formats() {
        assert_eq!(line_total("3", "2.5"), "7.50");
        assert_eq!(line_total("0.5", "10"), "5.00");
    }

    #[test]
    fn line_total_degrades_to_zero_on_garbage() {
        assert_eq!(line_total("abc", "2.5"), "0.00");
        assert_eq!(line_total("", ""), "0.00");
        assert_eq!(line_total("3", "x"), "0.00");
    }
}
