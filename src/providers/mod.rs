//! 副作用提供者
//!
//! 邮件、回执生成、文件存储与节假日日历。服务层只依赖这里的 trait，
//! 具体实现由启动流程根据配置装配，并以 `web::Data<Providers>` 注入。

pub mod file_storage;
pub mod holidays;
pub mod mail;
pub mod receipt;

#[cfg(test)]
pub mod fakes;

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::warn;

use crate::config::AppConfig;
use crate::errors::Result;

pub use file_storage::{DiskStorageProvider, FileStorageProvider};
pub use holidays::{CalendarApiHolidays, Holiday, HolidayCalendar, holiday_dates};
pub use mail::{LogMailProvider, MailMessage, MailProvider};
pub use receipt::{ReceiptClient, ReceiptData, ReceiptItem, ReceiptProvider, TextReceiptProvider};

/// 提供者集合
#[derive(Clone)]
pub struct Providers {
    pub mail: Arc<dyn MailProvider>,
    pub receipts: Arc<dyn ReceiptProvider>,
    pub files: Arc<dyn FileStorageProvider>,
    pub holidays: Arc<dyn HolidayCalendar>,
}

impl Providers {
    /// 按配置装配
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            mail: mail::from_config(config)?,
            receipts: Arc::new(TextReceiptProvider::new(
                &config.upload.tmp_dir,
                &config.app.system_name,
            )),
            files: Arc::new(DiskStorageProvider::new(
                &config.upload.tmp_dir,
                &config.upload.dir,
            )),
            holidays: Arc::new(CalendarApiHolidays::new(&config.holidays)?),
        })
    }

    /// 指定年份的节假日，日历不可用时按无节假日处理
    pub async fn holidays_or_empty(&self, year: i32) -> Vec<NaiveDate> {
        match self.holidays.holidays(year).await {
            Ok(holidays) => holiday_dates(&holidays),
            Err(e) => {
                warn!("Holidays for {} unavailable: {}", year, e);
                Vec::new()
            }
        }
    }
}
