//! 测试用的记录型提供者

use async_trait::async_trait;
use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use super::{
    FileStorageProvider, Holiday, HolidayCalendar, MailMessage, MailProvider, Providers,
    ReceiptData, ReceiptProvider,
};
use crate::errors::{Result, SchoolError};

#[derive(Default)]
pub struct FakeMailProvider {
    pub sent: Mutex<Vec<MailMessage>>,
}

impl FakeMailProvider {
    pub fn sent(&self) -> Vec<MailMessage> {
        self.sent.lock().map(|m| m.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl MailProvider for FakeMailProvider {
    async fn send_mail(&self, message: MailMessage) -> Result<()> {
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeReceiptProvider {
    pub generated: Mutex<Vec<ReceiptData>>,
}

impl FakeReceiptProvider {
    pub fn generated(&self) -> Vec<ReceiptData> {
        self.generated.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReceiptProvider for FakeReceiptProvider {
    async fn generate(&self, data: ReceiptData) -> Result<String> {
        let mut generated = self.generated.lock().unwrap();
        generated.push(data);
        Ok(format!("receipt-{}.txt", generated.len()))
    }
}

#[derive(Default)]
pub struct FakeStorageProvider {
    pub saved: Mutex<Vec<String>>,
    pub deleted: Mutex<Vec<String>>,
}

impl FakeStorageProvider {
    pub fn saved(&self) -> Vec<String> {
        self.saved.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl FileStorageProvider for FakeStorageProvider {
    async fn save_file(&self, filename: &str) -> Result<String> {
        self.saved.lock().unwrap().push(filename.to_string());
        Ok(filename.to_string())
    }

    async fn delete_file(&self, filename: &str) -> Result<()> {
        self.deleted.lock().unwrap().push(filename.to_string());
        Ok(())
    }

    fn path_of(&self, filename: &str) -> PathBuf {
        std::env::temp_dir().join(filename)
    }
}

/// 固定节假日；`failing` 为真时模拟接口不可用
#[derive(Default)]
pub struct FakeHolidayCalendar {
    pub days: Vec<NaiveDate>,
    pub failing: bool,
}

#[async_trait]
impl HolidayCalendar for FakeHolidayCalendar {
    async fn holidays(&self, _year: i32) -> Result<Vec<Holiday>> {
        if self.failing {
            return Err(SchoolError::provider("calendar offline"));
        }
        Ok(self
            .days
            .iter()
            .map(|day| Holiday {
                date: day.format("%d/%m/%Y").to_string(),
                name: "Feriado".to_string(),
                ..Default::default()
            })
            .collect())
    }
}

/// 记录型提供者集合，保留具体类型以便断言
pub struct FakeProviders {
    pub mail: Arc<FakeMailProvider>,
    pub receipts: Arc<FakeReceiptProvider>,
    pub files: Arc<FakeStorageProvider>,
    pub holidays: Arc<FakeHolidayCalendar>,
}

impl FakeProviders {
    pub fn new() -> Self {
        Self::with_holidays(FakeHolidayCalendar::default())
    }

    pub fn with_holidays(holidays: FakeHolidayCalendar) -> Self {
        Self {
            mail: Arc::new(FakeMailProvider::default()),
            receipts: Arc::new(FakeReceiptProvider::default()),
            files: Arc::new(FakeStorageProvider::default()),
            holidays: Arc::new(holidays),
        }
    }

    pub fn providers(&self) -> Providers {
        Providers {
            mail: self.mail.clone(),
            receipts: self.receipts.clone(),
            files: self.files.clone(),
            holidays: self.holidays.clone(),
        }
    }
}
