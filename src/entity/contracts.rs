//! 合同实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "contracts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub student_id: i64,
    pub grade_id: i64,
    pub status: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub comment: Option<String>,
    pub discount: f64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::students::Entity",
        from = "Column::StudentId",
        to = "super::students::Column::Id"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::grades::Entity",
        from = "Column::GradeId",
        to = "super::grades::Column::Id"
    )]
    Grade,
    #[sea_orm(has_many = "super::agreements::Entity")]
    Agreements,
    #[sea_orm(has_many = "super::debits::Entity")]
    Debits,
}

impl Related<super::students::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::grades::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Grade.def()
    }
}

impl Related<super::agreements::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agreements.def()
    }
}

impl Related<super::debits::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Debits.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_contract(self) -> crate::models::contracts::entities::Contract {
        use crate::models::contracts::entities::{Contract, ContractStatus};

        Contract {
            id: self.id,
            student_id: self.student_id,
            grade_id: self.grade_id,
            status: self
                .status
                .parse::<ContractStatus>()
                .unwrap_or(ContractStatus::UnderAnalysis),
            comment: self.comment,
            discount: self.discount,
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
