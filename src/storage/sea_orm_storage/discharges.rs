//! 结清记录存储操作

use super::SeaOrmStorage;
use crate::entity::discharges::ActiveModel;
use crate::errors::{Result, SchoolError};
use crate::models::discharges::entities::Discharge;
use sea_orm::{ActiveModelTrait, Set};

impl SeaOrmStorage {
    /// 创建结清记录
    pub async fn create_discharge_impl(
        &self,
        payment_id: i64,
        user_id: i64,
        receipt: &str,
    ) -> Result<Discharge> {
        let model = ActiveModel {
            payment_id: Set(payment_id),
            user_id: Set(user_id),
            receipt: Set(receipt.to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("创建结清记录失败: {e}")))?;

        Ok(result.into_discharge())
    }
}
