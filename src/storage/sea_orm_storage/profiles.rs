//! 权限配置存储操作

use super::SeaOrmStorage;
use crate::entity::profiles::{ActiveModel, Column, Entity as Profiles};
use crate::errors::{Result, SchoolError};
use crate::models::profiles::{
    entities::{Permissions, Profile},
    requests::ProfileRequest,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

// 将权限标记写入 ActiveModel
fn apply_permissions(model: &mut ActiveModel, p: Permissions) {
    model.create_new_enrollments_permiss = Set(p.create_new_enrollments_permiss);
    model.validate_enrollments_permiss = Set(p.validate_enrollments_permiss);
    model.create_extra_debits_permiss = Set(p.create_extra_debits_permiss);
    model.pay_debits_permiss = Set(p.pay_debits_permiss);
    model.discharge_payments_permiss = Set(p.discharge_payments_permiss);
    model.crud_profiles_permiss = Set(p.crud_profiles_permiss);
    model.crud_users_permiss = Set(p.crud_users_permiss);
    model.crud_grades_permiss = Set(p.crud_grades_permiss);
    model.crud_extra_debits_permiss = Set(p.crud_extra_debits_permiss);
    model.generate_documents_permiss = Set(p.generate_documents_permiss);
}

impl SeaOrmStorage {
    /// 创建权限配置
    pub async fn create_profile_impl(&self, req: ProfileRequest) -> Result<Profile> {
        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            name: Set(req.name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        apply_permissions(&mut model, req.permissions);

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("创建权限配置失败: {e}")))?;

        Ok(result.into_profile())
    }

    /// 通过 ID 获取权限配置
    pub async fn get_profile_by_id_impl(&self, id: i64) -> Result<Option<Profile>> {
        let result = Profiles::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询权限配置失败: {e}")))?;

        Ok(result.map(|m| m.into_profile()))
    }

    /// 通过名称获取权限配置
    pub async fn get_profile_by_name_impl(&self, name: &str) -> Result<Option<Profile>> {
        let result = Profiles::find()
            .filter(Column::Name.eq(name))
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询权限配置失败: {e}")))?;

        Ok(result.map(|m| m.into_profile()))
    }

    /// 列出全部权限配置
    pub async fn list_profiles_impl(&self) -> Result<Vec<Profile>> {
        let profiles = Profiles::find()
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询权限配置列表失败: {e}")))?;

        Ok(profiles.into_iter().map(|m| m.into_profile()).collect())
    }

    /// 更新权限配置
    pub async fn update_profile_impl(
        &self,
        id: i64,
        update: ProfileRequest,
    ) -> Result<Option<Profile>> {
        if self.get_profile_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            name: Set(update.name),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };
        apply_permissions(&mut model, update.permissions);

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更新权限配置失败: {e}")))?;

        Ok(Some(result.into_profile()))
    }
}
