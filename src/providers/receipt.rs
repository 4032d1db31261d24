use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::models::payments::entities::PaymentMethod;
use crate::utils::format::format_brl;

#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptClient {
    pub name: String,
    pub cpf: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptItem {
    pub description: String,
    pub base_value: f64,
    pub true_value: f64,
    pub quantity: u32,
    pub variation: f64,
}

/// 回执内容
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptData {
    pub client: ReceiptClient,
    /// 经办人用户名
    pub operative: String,
    pub items: Vec<ReceiptItem>,
    pub method: PaymentMethod,
}

impl ReceiptData {
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.true_value * f64::from(item.quantity))
            .sum()
    }
}

#[async_trait]
pub trait ReceiptProvider: Send + Sync {
    /// 生成回执到临时目录，返回文件名
    async fn generate(&self, data: ReceiptData) -> Result<String>;
}

/// 纯文本回执
pub struct TextReceiptProvider {
    tmp_dir: PathBuf,
    system_name: String,
}

impl TextReceiptProvider {
    pub fn new(tmp_dir: impl AsRef<Path>, system_name: &str) -> Self {
        Self {
            tmp_dir: tmp_dir.as_ref().to_path_buf(),
            system_name: system_name.to_string(),
        }
    }

    fn render(&self, data: &ReceiptData) -> String {
        let mut lines = vec![
            format!("{} - Recibo", self.system_name),
            format!("Data: {}", chrono::Local::now().format("%d/%m/%Y %H:%M")),
            format!("Cliente: {} (CPF {})", data.client.name, data.client.cpf),
            format!("Operador: {}", data.operative),
            String::new(),
        ];

        for item in &data.items {
            lines.push(format!(
                "{} x{}  base {}  variação {}  valor {}",
                item.description,
                item.quantity,
                format_brl(item.base_value),
                format_brl(item.variation),
                format_brl(item.true_value)
            ));
        }

        lines.push(String::new());
        lines.push(format!("Total: {}", format_brl(data.total())));
        lines.push(format!("Forma de pagamento: {}", data.method.label()));
        lines.join("\n")
    }
}

#[async_trait]
impl ReceiptProvider for TextReceiptProvider {
    async fn generate(&self, data: ReceiptData) -> Result<String> {
        tokio::fs::create_dir_all(&self.tmp_dir).await?;
        let filename = format!("{}-recibo.txt", uuid::Uuid::new_v4().simple());
        tokio::fs::write(self.tmp_dir.join(&filename), self.render(&data)).await?;
        tracing::debug!("Receipt generated: {}", filename);
        Ok(filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReceiptData {
        ReceiptData {
            client: ReceiptClient {
                name: "Maria Souza".to_string(),
                cpf: "123.456.789-00".to_string(),
            },
            operative: "secretaria".to_string(),
            items: vec![ReceiptItem {
                description: "Matrícula".to_string(),
                base_value: 1250.5,
                true_value: 1250.5,
                quantity: 1,
                variation: 0.0,
            }],
            method: PaymentMethod::Cash,
        }
    }

    #[test]
    fn test_render_contains_totals() {
        let provider = TextReceiptProvider::new("tmp", "Santiago");
        let text = provider.render(&sample());
        assert!(text.contains("Maria Souza"));
        assert!(text.contains("Total: R$ 1.250,50"));
        assert!(text.contains("Dinheiro"));
    }

    #[actix_web::test]
    async fn test_generate_writes_file() {
        let dir = std::env::temp_dir().join(format!("santiago-receipt-{}", uuid::Uuid::new_v4()));
        let provider = TextReceiptProvider::new(&dir, "Santiago");
        let filename = provider.generate(sample()).await.unwrap();
        assert!(filename.ends_with("-recibo.txt"));
        assert!(dir.join(&filename).exists());
        tokio::fs::remove_dir_all(&dir).await.unwrap();
    }
}
