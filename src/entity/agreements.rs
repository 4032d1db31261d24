//! 协议实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "agreements")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub contract_id: i64,
    pub person_id: i64,
    pub responsible_type: String,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::contracts::Entity",
        from = "Column::ContractId",
        to = "super::contracts::Column::Id"
    )]
    Contract,
    #[sea_orm(
        belongs_to = "super::persons::Entity",
        from = "Column::PersonId",
        to = "super::persons::Column::Id"
    )]
    Person,
}

impl Related<super::contracts::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Contract.def()
    }
}

impl Related<super::persons::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Person.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_agreement(self) -> crate::models::agreements::entities::Agreement {
        use crate::models::agreements::entities::{Agreement, ResponsibleType};

        Agreement {
            id: self.id,
            contract_id: self.contract_id,
            person_id: self.person_id,
            responsible_type: self
                .responsible_type
                .parse::<ResponsibleType>()
                .unwrap_or(ResponsibleType::Financial),
            created_at: super::to_datetime(self.created_at),
        }
    }
}
