//! 学生与亲属关系存储操作

use super::SeaOrmStorage;
use crate::entity::relationships::ActiveModel as RelationshipActiveModel;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, SchoolError};
use crate::models::students::{
    entities::{Relationship, Student, StudentPhoto},
    requests::StudentRequest,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, sea_query::Expr};

fn apply_student(model: &mut ActiveModel, req: StudentRequest) {
    model.name = Set(req.name);
    model.father_name = Set(req.father_name);
    model.mother_name = Set(req.mother_name);
    model.birth_date = Set(req.birth_date);
    model.nacionality = Set(req.nacionality);
    model.birth_city = Set(req.birth_city);
    model.birth_state = Set(req.birth_state);
    model.gender = Set(req.gender.to_string());
    model.race = Set(req.race.to_string());
    model.ease_relating = Set(req.ease_relating);
    model.origin_school = Set(req.origin_school);
    model.health_plan = Set(req.health_plan);
    model.food_alergy = Set(req.food_alergy);
    model.medication_alergy = Set(req.medication_alergy);
    model.health_problem = Set(req.health_problem);
    model.special_necessities = Set(req.special_necessities);
}

fn photo_column(photo: StudentPhoto) -> Column {
    match photo {
        StudentPhoto::BirthCertificate => Column::BirthCertificatePhoto,
        StudentPhoto::VaccineCard => Column::VaccineCardPhoto,
        StudentPhoto::HealthPlan => Column::HealthPlanPhoto,
        StudentPhoto::TransferDeclaration => Column::TransferDeclarationPhoto,
        StudentPhoto::MonthlyDeclaration => Column::MonthlyDeclarationPhoto,
        StudentPhoto::SchoolRecords => Column::SchoolRecordsPhoto,
    }
}

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(&self, req: StudentRequest) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        apply_student(&mut model, req);

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 更新学生资料
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: StudentRequest,
    ) -> Result<Option<Student>> {
        if self.get_student_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };
        apply_student(&mut model, update);

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更新学生失败: {e}")))?;

        Ok(Some(result.into_student()))
    }

    /// 更新单个证件照片
    pub async fn update_student_photo_impl(
        &self,
        id: i64,
        photo: StudentPhoto,
        filename: &str,
    ) -> Result<Option<Student>> {
        let result = Students::update_many()
            .col_expr(photo_column(photo), Expr::value(filename))
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更新证件照片失败: {e}")))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_student_by_id_impl(id).await
    }

    /// 关联系统用户
    pub async fn set_student_user_impl(&self, id: i64, user_id: i64) -> Result<bool> {
        let result = Students::update_many()
            .col_expr(Column::UserId, Expr::value(user_id))
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("关联学生用户失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建亲属关系
    pub async fn create_relationship_impl(
        &self,
        student_id: i64,
        person_id: i64,
        kinship: &str,
    ) -> Result<Relationship> {
        let model = RelationshipActiveModel {
            student_id: Set(student_id),
            person_id: Set(person_id),
            kinship: Set(kinship.to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("创建亲属关系失败: {e}")))?;

        Ok(result.into_relationship())
    }
}
