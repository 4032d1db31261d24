//! 年级存储操作

use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::errors::{Result, SchoolError};
use crate::models::grades::{entities::Grade, requests::GradeRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建年级
    pub async fn create_grade_impl(&self, req: GradeRequest) -> Result<Grade> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            year: Set(req.year),
            value: Set(req.value),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("创建年级失败: {e}")))?;

        Ok(result.into_grade())
    }

    /// 通过 ID 获取年级
    pub async fn get_grade_by_id_impl(&self, grade_id: i64) -> Result<Option<Grade>> {
        let result = Grades::find_by_id(grade_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询年级失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 通过名称与学年获取年级
    pub async fn get_grade_by_name_and_year_impl(
        &self,
        name: &str,
        year: &str,
    ) -> Result<Option<Grade>> {
        let result = Grades::find()
            .filter(Column::Name.eq(name))
            .filter(Column::Year.eq(year))
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询年级失败: {e}")))?;

        Ok(result.map(|m| m.into_grade()))
    }

    /// 列出全部年级，新学年在前
    pub async fn list_grades_impl(&self) -> Result<Vec<Grade>> {
        let grades = Grades::find()
            .order_by_desc(Column::Year)
            .order_by_asc(Column::Name)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询年级列表失败: {e}")))?;

        Ok(grades.into_iter().map(|m| m.into_grade()).collect())
    }

    /// 更新年级
    pub async fn update_grade_impl(
        &self,
        grade_id: i64,
        update: GradeRequest,
    ) -> Result<Option<Grade>> {
        if self.get_grade_by_id_impl(grade_id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(grade_id),
            name: Set(update.name),
            year: Set(update.year),
            value: Set(update.value),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更新年级失败: {e}")))?;

        Ok(Some(result.into_grade()))
    }
}
