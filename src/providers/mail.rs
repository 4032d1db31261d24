use async_trait::async_trait;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::{Result, SchoolError};

/// 待发送的邮件
#[derive(Debug, Clone, PartialEq)]
pub struct MailMessage {
    pub to_name: String,
    pub to_email: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait MailProvider: Send + Sync {
    async fn send_mail(&self, message: MailMessage) -> Result<()>;
}

/// 把邮件写入日志
///
/// 正文可能含有新账号的明文密码，只有开启 `log_body` 时才以 debug 级别输出。
pub struct LogMailProvider {
    from_name: String,
    from_address: String,
    log_body: bool,
}

impl LogMailProvider {
    pub fn new(from_name: &str, from_address: &str, log_body: bool) -> Self {
        Self {
            from_name: from_name.to_string(),
            from_address: from_address.to_string(),
            log_body,
        }
    }
}

#[async_trait]
impl MailProvider for LogMailProvider {
    async fn send_mail(&self, message: MailMessage) -> Result<()> {
        tracing::info!(
            from = %format!("{} <{}>", self.from_name, self.from_address),
            to = %format!("{} <{}>", message.to_name, message.to_email),
            subject = %message.subject,
            "Mail dispatched"
        );
        if self.log_body {
            tracing::debug!(to = %message.to_email, "Mail body:\n{}", message.body);
        }
        Ok(())
    }
}

pub(super) fn from_config(config: &AppConfig) -> Result<Arc<dyn MailProvider>> {
    match config.mail.driver.as_str() {
        "log" => Ok(Arc::new(LogMailProvider::new(
            &config.mail.from_name,
            &config.mail.from_address,
            config.is_development(),
        ))),
        other => Err(SchoolError::provider(format!(
            "Unsupported mail driver: {other}"
        ))),
    }
}
