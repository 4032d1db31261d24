use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::HolidaysConfig;
use crate::errors::{Result, SchoolError};
use crate::utils::business_day::parse_holiday_date;

/// 日历接口返回的节假日
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Holiday {
    /// `dd/mm/yyyy`
    pub date: String,
    pub name: String,
    pub link: String,
    #[serde(rename = "type")]
    pub holiday_type: String,
    pub description: String,
    pub type_code: String,
}

impl Holiday {
    pub fn day(&self) -> Option<NaiveDate> {
        parse_holiday_date(&self.date)
    }
}

/// 把节假日列表转换为日期，无法解析的条目被忽略
pub fn holiday_dates(holidays: &[Holiday]) -> Vec<NaiveDate> {
    holidays.iter().filter_map(Holiday::day).collect()
}

#[async_trait]
pub trait HolidayCalendar: Send + Sync {
    async fn holidays(&self, year: i32) -> Result<Vec<Holiday>>;
}

/// 基于 calendario.com.br 接口的节假日日历
pub struct CalendarApiHolidays {
    client: Client,
    base_url: String,
    token: String,
    state: String,
    city: String,
}

impl CalendarApiHolidays {
    pub fn new(config: &HolidaysConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| SchoolError::provider(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
            state: config.state.clone(),
            city: config.city.clone(),
        })
    }
}

#[async_trait]
impl HolidayCalendar for CalendarApiHolidays {
    async fn holidays(&self, year: i32) -> Result<Vec<Holiday>> {
        let year = year.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("json", "true"),
                ("ano", year.as_str()),
                ("estado", self.state.as_str()),
                ("cidade", self.city.as_str()),
                ("token", self.token.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SchoolError::provider(format!("Holiday request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SchoolError::provider(format!(
                "Holiday API responded with {status}"
            )));
        }

        response
            .json::<Vec<Holiday>>()
            .await
            .map_err(|e| SchoolError::provider(format!("Invalid holiday payload: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_parsing() {
        let raw = r#"[
            {"date":"21/04/2025","name":"Tiradentes","link":"","type":"Feriado Nacional","description":"","type_code":"1"},
            {"date":"data inválida","name":"?"}
        ]"#;
        let holidays: Vec<Holiday> = serde_json::from_str(raw).unwrap();
        assert_eq!(holidays.len(), 2);
        assert_eq!(holidays[0].holiday_type, "Feriado Nacional");
        assert_eq!(
            holiday_dates(&holidays),
            vec![NaiveDate::from_ymd_opt(2025, 4, 21).unwrap()]
        );
    }
}
