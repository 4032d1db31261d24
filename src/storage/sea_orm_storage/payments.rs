//! 付款存储操作

use super::SeaOrmStorage;
use crate::entity::debits::Column as DebitColumn;
use crate::entity::payments::{ActiveModel, Column, Entity as Payments};
use crate::errors::{Result, SchoolError};
use crate::models::payments::{entities::Payment, requests::NewPayment};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Set, sea_query::Expr,
};

impl SeaOrmStorage {
    /// 创建付款
    pub async fn create_payment_impl(&self, payment: NewPayment) -> Result<Payment> {
        let model = ActiveModel {
            debit_id: Set(payment.debit_id),
            user_id: Set(payment.user_id),
            method: Set(payment.method.to_string()),
            amount: Set(payment.amount),
            receipt: Set(Some(payment.receipt)),
            discharged: Set(false),
            discharge_day: Set(None),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("创建付款失败: {e}")))?;

        Ok(result.into_payment())
    }

    /// 通过 ID 获取付款
    pub async fn get_payment_by_id_impl(&self, id: i64) -> Result<Option<Payment>> {
        let result = Payments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询付款失败: {e}")))?;

        Ok(result.map(|m| m.into_payment()))
    }

    /// 列出合同下的全部付款
    pub async fn list_payments_by_contract_impl(&self, contract_id: i64) -> Result<Vec<Payment>> {
        let payments = Payments::find()
            .join(
                JoinType::InnerJoin,
                crate::entity::payments::Relation::Debit.def(),
            )
            .filter(DebitColumn::ContractId.eq(contract_id))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询付款列表失败: {e}")))?;

        Ok(payments.into_iter().map(|m| m.into_payment()).collect())
    }

    /// 标记付款已结清
    pub async fn mark_payment_discharged_impl(
        &self,
        id: i64,
        day: chrono::NaiveDate,
    ) -> Result<bool> {
        let result = Payments::update_many()
            .col_expr(Column::Discharged, Expr::value(true))
            .col_expr(Column::DischargeDay, Expr::value(day))
            .filter(Column::Id.eq(id))
            .filter(Column::Discharged.eq(false))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更新付款结清状态失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    pub async fn release_payment_discharge_impl(&self, id: i64) -> Result<()> {
        Payments::update_many()
            .col_expr(Column::Discharged, Expr::value(false))
            .col_expr(Column::DischargeDay, Expr::value(Option::<chrono::NaiveDate>::None))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("撤销付款结清状态失败: {e}")))?;
        Ok(())
    }
}
