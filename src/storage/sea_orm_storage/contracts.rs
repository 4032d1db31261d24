//! 合同存储操作

use super::SeaOrmStorage;
use crate::entity::agreements::{Column as AgreementColumn, Entity as Agreements};
use crate::entity::contracts::{ActiveModel, Column, Entity as Contracts};
use crate::entity::grades::Entity as Grades;
use crate::entity::persons::Entity as Persons;
use crate::entity::students::{Column as StudentColumn, Entity as Students};
use crate::errors::{Result, SchoolError};
use crate::models::contracts::{
    entities::{Contract, ContractStatus},
    responses::{AgreementDetail, ContractDetail, ContractListItem},
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Select, Set,
    sea_query::LikeExpr,
};

fn status_values(statuses: &[ContractStatus]) -> Vec<String> {
    statuses.iter().map(|s| s.to_string()).collect()
}

impl SeaOrmStorage {
    /// 创建合同
    pub async fn create_contract_impl(&self, student_id: i64, grade_id: i64) -> Result<Contract> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            grade_id: Set(grade_id),
            status: Set(ContractStatus::UnderAnalysis.to_string()),
            comment: Set(None),
            discount: Set(0.0),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("创建合同失败: {e}")))?;

        Ok(result.into_contract())
    }

    /// 通过 ID 获取合同
    pub async fn get_contract_by_id_impl(&self, id: i64) -> Result<Option<Contract>> {
        let result = Contracts::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询合同失败: {e}")))?;

        Ok(result.map(|m| m.into_contract()))
    }

    /// 获取合同详情
    pub async fn get_contract_detail_impl(&self, id: i64) -> Result<Option<ContractDetail>> {
        let Some(contract) = Contracts::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询合同失败: {e}")))?
        else {
            return Ok(None);
        };

        let student = Students::find_by_id(contract.student_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询学生失败: {e}")))?
            .ok_or_else(|| SchoolError::not_found(format!("合同 {id} 的学生不存在")))?;

        let grade = Grades::find_by_id(contract.grade_id)
            .one(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询年级失败: {e}")))?
            .ok_or_else(|| SchoolError::not_found(format!("合同 {id} 的年级不存在")))?;

        // 协议按创建顺序排列，第一条即财务责任人
        let agreements = Agreements::find()
            .filter(AgreementColumn::ContractId.eq(id))
            .order_by_asc(AgreementColumn::Id)
            .find_also_related(Persons)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询合同协议失败: {e}")))?;

        let agreements = agreements
            .into_iter()
            .filter_map(|(agreement, person)| {
                person.map(|p| AgreementDetail {
                    agreement: agreement.into_agreement(),
                    person: p.into_person(),
                })
            })
            .collect();

        Ok(Some(ContractDetail {
            contract: contract.into_contract(),
            student: student.into_student(),
            grade: grade.into_grade(),
            agreements,
        }))
    }

    // 按年级与状态筛选的基础查询
    fn contracts_of_grade(grade_id: i64, statuses: &[ContractStatus]) -> Select<Contracts> {
        Contracts::find()
            .filter(Column::GradeId.eq(grade_id))
            .filter(Column::Status.is_in(status_values(statuses)))
    }

    async fn collect_list_items(
        &self,
        select: Select<Contracts>,
    ) -> Result<Vec<ContractListItem>> {
        let rows = select
            .find_also_related(Students)
            .order_by_asc(StudentColumn::Name)
            .all(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("查询合同列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(contract, student)| {
                student.map(|s| ContractListItem {
                    contract: contract.into_contract(),
                    student: s.into_student(),
                })
            })
            .collect())
    }

    /// 按年级与状态列出合同
    pub async fn list_contracts_by_grade_impl(
        &self,
        grade_id: i64,
        statuses: &[ContractStatus],
    ) -> Result<Vec<ContractListItem>> {
        self.collect_list_items(Self::contracts_of_grade(grade_id, statuses))
            .await
    }

    /// 按学生姓名搜索合同
    pub async fn search_contracts_by_student_name_impl(
        &self,
        grade_id: i64,
        student_name: &str,
        statuses: &[ContractStatus],
    ) -> Result<Vec<ContractListItem>> {
        let pattern = format!("%{}%", escape_like_pattern(student_name.trim()));
        let select = Self::contracts_of_grade(grade_id, statuses)
            .filter(StudentColumn::Name.like(LikeExpr::new(pattern).escape('\\')));

        self.collect_list_items(select).await
    }

    /// 更新合同状态
    pub async fn update_contract_status_impl(
        &self,
        id: i64,
        status: ContractStatus,
        comment: Option<String>,
    ) -> Result<Option<Contract>> {
        if self.get_contract_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            status: Set(status.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(comment) = comment {
            model.comment = Set(Some(comment));
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更新合同状态失败: {e}")))?;

        Ok(Some(result.into_contract()))
    }

    /// 更换合同年级
    pub async fn update_contract_grade_impl(
        &self,
        id: i64,
        grade_id: i64,
    ) -> Result<Option<Contract>> {
        if self.get_contract_by_id_impl(id).await?.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(id),
            grade_id: Set(grade_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| SchoolError::database_operation(format!("更换合同年级失败: {e}")))?;

        Ok(Some(result.into_contract()))
    }
}
