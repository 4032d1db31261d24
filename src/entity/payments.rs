//! 付款实体

use sea_orm::entity::prelude::*;

use crate::config::AppConfig;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub debit_id: i64,
    pub user_id: i64,
    pub method: String,
    pub amount: f64,
    pub receipt: Option<String>,
    pub discharged: bool,
    pub discharge_day: Option<chrono::NaiveDate>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::debits::Entity",
        from = "Column::DebitId",
        to = "super::debits::Column::Id"
    )]
    Debit,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
}

impl Related<super::debits::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Debit.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_payment(self) -> crate::models::payments::entities::Payment {
        use crate::models::payments::entities::{Payment, PaymentMethod};

        Payment {
            id: self.id,
            debit_id: self.debit_id,
            user_id: self.user_id,
            method: self
                .method
                .parse::<PaymentMethod>()
                .unwrap_or(PaymentMethod::Cash),
            amount: self.amount,
            receipt_url: self
                .receipt
                .as_deref()
                .map(|f| AppConfig::get().file_url(f)),
            receipt: self.receipt,
            discharged: self.discharged,
            discharge_day: self.discharge_day,
            created_at: super::to_datetime(self.created_at),
        }
    }
}
