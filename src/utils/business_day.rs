//! 工作日计算

use chrono::{Datelike, NaiveDate, Weekday};

/// 返回 `date` 当天或之后的第一个工作日（跳过周末与节假日）
pub fn next_business_day(date: NaiveDate, holidays: &[NaiveDate]) -> NaiveDate {
    let mut current = date;
    while matches!(current.weekday(), Weekday::Sat | Weekday::Sun) || holidays.contains(&current)
    {
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
    }
    current
}

/// 解析日历接口的 `dd/mm/yyyy` 日期
pub fn parse_holiday_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%d/%m/%Y").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekday_without_holiday_is_kept() {
        // 2025-03-10 是周一
        assert_eq!(next_business_day(date(2025, 3, 10), &[]), date(2025, 3, 10));
    }

    #[test]
    fn test_weekend_moves_to_monday() {
        // 2025-05-10 是周六
        assert_eq!(next_business_day(date(2025, 5, 10), &[]), date(2025, 5, 12));
    }

    #[test]
    fn test_holiday_then_weekend_is_skipped() {
        // 2025-10-10 周五为节假日，跳到 10-13 周一
        let holidays = vec![date(2025, 10, 10)];
        assert_eq!(
            next_business_day(date(2025, 10, 10), &holidays),
            date(2025, 10, 13)
        );
    }

    #[test]
    fn test_parse_holiday_date() {
        assert_eq!(parse_holiday_date("25/12/2025"), Some(date(2025, 12, 25)));
        assert_eq!(parse_holiday_date("2025-12-25"), None);
    }
}
