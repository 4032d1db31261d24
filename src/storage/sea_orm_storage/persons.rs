//! 责任人存储操作

use super::SeaOrmStorage;
use crate::entity::persons::{ActiveModel, Column, Entity as Persons};
use crate::errors::{Result, SchoolError};
use crate::models::persons::{
    entities::{Person, PersonPhoto},
    requests::PersonRequest,
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, sea_query::Expr};

// 将资料字段写入 ActiveModel
fn apply_person(model: &mut ActiveModel, req: PersonRequest) {
    model.name = Set(req.name);
    model.birth_date = Set(req.birth_date);
    model.nacionality = Set(req.nacionality);
    model.civil_state = Set(req.civil_state.to_string());
    model.profission = Set(req.profission);
    model.cpf = Set(req.cpf);
    model.rg = Set(req.rg);
    model.address_street = Set(req.address_street);
    model.address_number = Set(req.address_number);
    model.address_complement = Set(req.address_complement);
    model.address_neighborhood = Set(req.address_neighborhood);
    model.address_city = Set(req.address_city);
    model.address_cep = Set(req.address_cep);
    model.residencial_phone = Set(req.residencial_phone);
    model.commercial_phone = Set(req.commercial_phone);
    model.personal_phone = Set(req.personal_phone);
    model.education_level = Set(req.education_level.to_string());
    model.workplace = Set(req.workplace);
    model.monthly_income = Set(req.monthly_income.to_string());
    model.income_tax = Set(req.income_tax);
    model.email = Set(req.email);
}

fn photo_column(photo: PersonPhoto) -> Column {
    match photo {
        PersonPhoto::Cpf => Column::CpfPhoto,
        PersonPhoto::Rg => Column::RgPhoto,
        PersonPhoto::ResidencialProof => Column::ResidencialProofPhoto,
    }
}

impl SeaOrmStorage {
    /// 创建责任人
    pub async fn create_person_impl(&self, req: PersonRequest) -> Result<Person> {
        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        apply_person(&mut model, req);

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("创建责任人失败: {e}")))?;

        Ok(result.into_person())
    }

    /// 通过 ID 获取责任人
    pub async fn get_person_by_id_impl(&self, id: i64) -> Result<Option<Person>> {
        let result = Persons::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询责任人失败: {e}")))?;

        Ok(result.map(|m| m.into_person()))
    }

    /// 通过 CPF 获取责任人
    pub async fn get_person_by_cpf_impl(&self, cpf: &str) -> Result<Option<Person>> {
        let result = Persons::find()
            .filter(Column::Cpf.eq(cpf))
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询责任人失败: {e}")))?;

        Ok(result.map(|m| m.into_person()))
    }

    /// 更新责任人资料
    pub async fn update_person_impl(
        &self,
        id: i64,
        update: PersonRequest,
    ) -> Result<Option<Person>> {
        if self.get_person_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };
        apply_person(&mut model, update);

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更新责任人失败: {e}")))?;

        Ok(Some(result.into_person()))
    }

    /// 更新单个证件照片
    pub async fn update_person_photo_impl(
        &self,
        id: i64,
        photo: PersonPhoto,
        filename: &str,
    ) -> Result<Option<Person>> {
        let result = Persons::update_many()
            .col_expr(photo_column(photo), Expr::value(filename))
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp()))
            .filter(Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更新证件照片失败: {e}")))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        self.get_person_by_id_impl(id).await
    }

    /// 关联系统用户，已关联的责任人保持不变
    pub async fn set_person_user_impl(&self, id: i64, user_id: i64) -> Result<bool> {
        let result = Persons::update_many()
            .col_expr(Column::UserId, Expr::value(user_id))
            .col_expr(Column::UpdatedAt, Expr::value(chrono::Utc::now().timestamp()))
            .filter(Column::Id.eq(id))
            .filter(Column::UserId.is_null())
            .exec(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("关联责任人用户失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
