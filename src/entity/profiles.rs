//! 权限配置实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "profiles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    pub create_new_enrollments_permiss: bool,
    pub validate_enrollments_permiss: bool,
    pub create_extra_debits_permiss: bool,
    pub pay_debits_permiss: bool,
    pub discharge_payments_permiss: bool,
    pub crud_profiles_permiss: bool,
    pub crud_users_permiss: bool,
    pub crud_grades_permiss: bool,
    pub crud_extra_debits_permiss: bool,
    pub generate_documents_permiss: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::users::Entity")]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_profile(self) -> crate::models::profiles::entities::Profile {
        use crate::models::profiles::entities::{Permissions, Profile};

        Profile {
            id: self.id,
            name: self.name,
            permissions: Permissions {
                create_new_enrollments_permiss: self.create_new_enrollments_permiss,
                validate_enrollments_permiss: self.validate_enrollments_permiss,
                create_extra_debits_permiss: self.create_extra_debits_permiss,
                pay_debits_permiss: self.pay_debits_permiss,
                discharge_payments_permiss: self.discharge_payments_permiss,
                crud_profiles_permiss: self.crud_profiles_permiss,
                crud_users_permiss: self.crud_users_permiss,
                crud_grades_permiss: self.crud_grades_permiss,
                crud_extra_debits_permiss: self.crud_extra_debits_permiss,
                generate_documents_permiss: self.generate_documents_permiss,
            },
            created_at: super::to_datetime(self.created_at),
            updated_at: super::to_datetime(self.updated_at),
        }
    }
}
