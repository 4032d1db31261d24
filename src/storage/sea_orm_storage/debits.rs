//! 账单存储操作

use super::SeaOrmStorage;
use crate::entity::debits::{ActiveModel, Column, Entity as Debits};
use crate::errors::{Result, SchoolError};
use crate::models::debits::{
    entities::Debit,
    requests::{NewDebit, UpdateExtraDebitRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, sea_query::Expr,
};

impl SeaOrmStorage {
    /// 创建账单
    pub async fn create_debit_impl(&self, debit: NewDebit) -> Result<Debit> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            contract_id: Set(debit.contract_id),
            description: Set(debit.description),
            value: Set(debit.value),
            discount: Set(debit.discount),
            paid: Set(false),
            payday: Set(None),
            payment_limit_date: Set(debit.payment_limit_date),
            debit_type: Set(debit.debit_type.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("创建账单失败: {e}")))?;

        Ok(result.into_debit())
    }

    /// 通过 ID 获取账单
    pub async fn get_debit_by_id_impl(&self, id: i64) -> Result<Option<Debit>> {
        let result = Debits::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询账单失败: {e}")))?;

        Ok(result.map(|m| m.into_debit()))
    }

    /// 列出合同的全部账单，按到期日排序
    pub async fn list_debits_by_contract_impl(&self, contract_id: i64) -> Result<Vec<Debit>> {
        let debits = Debits::find()
            .filter(Column::ContractId.eq(contract_id))
            .order_by_asc(Column::PaymentLimitDate)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询账单列表失败: {e}")))?;

        Ok(debits.into_iter().map(|m| m.into_debit()).collect())
    }

    /// 更新账单
    pub async fn update_debit_impl(
        &self,
        id: i64,
        update: UpdateExtraDebitRequest,
    ) -> Result<Option<Debit>> {
        if self.get_debit_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            description: Set(update.description),
            value: Set(update.value),
            discount: Set(update.discount),
            payment_limit_date: Set(update.payment_limit_date),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更新账单失败: {e}")))?;

        Ok(Some(result.into_debit()))
    }

    /// 标记账单已支付
    pub async fn mark_debit_paid_impl(&self, id: i64, payday: chrono::NaiveDate) -> Result<bool> {
        let result = Debits::update_many()
            .col_expr(Column::Paid, Expr::value(true))
            .col_expr(Column::Payday, Expr::value(payday))
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp()))
            .filter(Column::Id.eq(id))
            .filter(Column::Paid.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更新账单支付状态失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 撤销支付标记
    pub async fn release_debit_impl(&self, id: i64) -> Result<()> {
        Debits::update_many()
            .col_expr(Column::Paid, Expr::value(false))
            .col_expr(Column::Payday, Expr::value(Option::<chrono::NaiveDate>::None))
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("撤销账单支付状态失败: {e}")))?;
        Ok(())
    }

    /// 删除账单
    pub async fn delete_debit_impl(&self, id: i64) -> Result<bool> {
        let result = Debits::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("删除账单失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
