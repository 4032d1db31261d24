//! 账单实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "debits")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub contract_id: i64,
    pub description: String,
    pub value: f64,
    pub discount: f64,
    pub paid: bool,
    pub payday: Option<chrono::NaiveDate>,
    pub payment_limit_date: chrono::NaiveDate,
    pub debit_type: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::contracts::Entity",
        from = "Column::ContractId",
        to = "super::contracts::Column::Id"
    )]
    Contract,
    #[sea_orm(has_many = "super::payments::Entity")]
    Payments,
}

impl Related<super::contracts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contract.def()
    }
}

impl Related<super::payments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_debit(self) -> crate::models::debits::entities::Debit {
        use crate::models::debits::entities::{Debit, DebitType};

        Debit {
            id: self.id,
            contract_id: self.contract_id,
            description: self.description,
            value: self.value,
            discount: self.discount,
            paid: self.paid,
            payday: self.payday,
            payment_limit_date: self.payment_limit_date,
            debit_type: self
                .debit_type
                .parse::<DebitType>()
                .unwrap_or(DebitType::Extra),
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
