//! 协议存储操作

use super::SeaOrmStorage;
use crate::entity::agreements::ActiveModel;
use crate::errors::{Result, SchoolError};
use crate::models::agreements::entities::{Agreement, ResponsibleType};
use sea_orm::{ActiveModelTrait, Set};

impl SeaOrmStorage {
    /// 创建协议
    pub async fn create_agreement_impl(
        &self,
        contract_id: i64,
        person_id: i64,
        responsible_type: ResponsibleType,
    ) -> Result<Agreement> {
        let model = ActiveModel {
            contract_id: Set(contract_id),
            person_id: Set(person_id),
            responsible_type: Set(responsible_type.to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("创建协议失败: {e}")))?;

        Ok(result.into_agreement())
    }
}
