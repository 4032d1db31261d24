use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::common::define_string_enum;

define_string_enum! {
    // 合同状态
    #[ts(export, export_to = "contract.ts")]
    ContractStatus {
        UnderAnalysis => "underAnalysis",
        Pendent => "pendent",
        Accepted => "accepted",
        Active => "active",
    }
}

impl ContractStatus {
    /// 是否可以被审核通过
    pub fn can_be_approved(&self) -> bool {
        matches!(self, ContractStatus::UnderAnalysis | ContractStatus::Pendent)
    }

    /// 是否可以被标记为待补充
    pub fn can_be_marked_pendent(&self) -> bool {
        matches!(self, ContractStatus::UnderAnalysis)
    }
}

// 合同实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "contract.ts")]
pub struct Contract {
    pub id: i64,
    pub student_id: i64,
    pub grade_id: i64,
    pub status: ContractStatus,
    pub comment: Option<String>,
    pub discount: f64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_transitions() {
        assert!(ContractStatus::UnderAnalysis.can_be_approved());
        assert!(ContractStatus::Pendent.can_be_approved());
        assert!(!ContractStatus::Active.can_be_approved());
        assert!(ContractStatus::UnderAnalysis.can_be_marked_pendent());
        assert!(!ContractStatus::Pendent.can_be_marked_pendent());
    }

    #[test]
    fn test_status_wire_value_is_camel_case() {
        assert_eq!(ContractStatus::UnderAnalysis.as_str(), "underAnalysis");
        assert_eq!(
            "underAnalysis".parse::<ContractStatus>(),
            Ok(ContractStatus::UnderAnalysis)
        );
    }
}
