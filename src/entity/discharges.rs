//! 结清记录实体

use sea_orm::entity::prelude::*;

use crate::config::AppConfig;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "discharges")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub payment_id: i64,
    pub user_id: i64,
    pub receipt: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::payments::Entity",
        from = "Column::PaymentId",
        to = "super::payments::Column::Id"
    )]
    Payment,
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_discharge(self) -> crate::models::discharges::entities::Discharge {
        crate::models::discharges::entities::Discharge {
            id: self.id,
            payment_id: self.payment_id,
            user_id: self.user_id,
            receipt_url: AppConfig::get().file_url(&self.receipt),
            receipt: self.receipt,
            created_at: super::to_datetime(self.created_at),
        }
    }
}
