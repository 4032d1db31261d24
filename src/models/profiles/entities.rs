use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 权限标记集合
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export, export_to = "profile.ts")]
pub struct Permissions {
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
}

impl Permissions {
    /// 全部权限，用于初始管理员
    pub fn all() -> Self {
        Self {
            create_new_enrollments_permiss: true,
            validate_enrollments_permiss: true,
            create_extra_debits_permiss: true,
            pay_debits_permiss: true,
            discharge_payments_permiss: true,
            crud_profiles_permiss: true,
            crud_users_permiss: true,
            crud_grades_permiss: true,
            crud_extra_debits_permiss: true,
            generate_documents_permiss: true,
        }
    }

    pub fn has(&self, permission: Permission) -> bool {
        match permission {
            Permission::CreateNewEnrollments => self.create_new_enrollments_permiss,
            Permission::ValidateEnrollments => self.validate_enrollments_permiss,
            Permission::CreateExtraDebits => self.create_extra_debits_permiss,
            Permission::PayDebits => self.pay_debits_permiss,
            Permission::DischargePayments => self.discharge_payments_permiss,
            Permission::CrudProfiles => self.crud_profiles_permiss,
            Permission::CrudUsers => self.crud_users_permiss,
            Permission::CrudGrades => self.crud_grades_permiss,
            Permission::CrudExtraDebits => self.crud_extra_debits_permiss,
            Permission::GenerateDocuments => self.generate_documents_permiss,
        }
    }

    /// 任意一个权限满足即通过
    pub fn has_any(&self, permissions: &[Permission]) -> bool {
        permissions.iter().any(|p| self.has(*p))
    }
}

// 路由守卫使用的单个权限
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    CreateNewEnrollments,
    ValidateEnrollments,
    CreateExtraDebits,
    PayDebits,
    DischargePayments,
    CrudProfiles,
    CrudUsers,
    CrudGrades,
    CrudExtraDebits,
    GenerateDocuments,
}

impl Permission {
    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::CreateNewEnrollments => "create_new_enrollments_permiss",
            Permission::ValidateEnrollments => "validate_enrollments_permiss",
            Permission::CreateExtraDebits => "create_extra_debits_permiss",
            Permission::PayDebits => "pay_debits_permiss",
            Permission::DischargePayments => "discharge_payments_permiss",
            Permission::CrudProfiles => "crud_profiles_permiss",
            Permission::CrudUsers => "crud_users_permiss",
            Permission::CrudGrades => "crud_grades_permiss",
            Permission::CrudExtraDebits => "crud_extra_debits_permiss",
            Permission::GenerateDocuments => "generate_documents_permiss",
        }
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// 权限配置实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "profile.ts")]
pub struct Profile {
    pub id: i64,
    pub name: String,
    #[serde(flatten)]
    pub permissions: Permissions,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
