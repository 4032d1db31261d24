use serde::Deserialize;
use ts_rs::TS;

use super::entities::ContractStatus;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "contract.ts")]
pub struct UpdateContractGradeRequest {
    pub grade_id: i64,
}

// 按学生姓名搜索合同的查询参数
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "contract.ts")]
pub struct ContractSearchQuery {
    pub student_name: String,
    /// 逗号分隔的状态列表，缺省为全部状态
    #[serde(default)]
    pub status: Option<String>,
}

impl ContractSearchQuery {
    pub fn statuses(&self) -> Result<Vec<ContractStatus>, String> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") => Ok(vec![
                ContractStatus::UnderAnalysis,
                ContractStatus::Pendent,
                ContractStatus::Accepted,
                ContractStatus::Active,
            ]),
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().parse::<ContractStatus>())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statuses_default_to_all() {
        let query = ContractSearchQuery {
            student_name: "ana".to_string(),
            status: None,
        };
        assert_eq!(query.statuses().unwrap().len(), 4);
    }

    #[test]
    fn test_statuses_parse_list() {
        let query = ContractSearchQuery {
            student_name: "ana".to_string(),
            status: Some("accepted, active".to_string()),
        };
        assert_eq!(
            query.statuses().unwrap(),
            vec![ContractStatus::Accepted, ContractStatus::Active]
        );

        let bad = ContractSearchQuery {
            student_name: "ana".to_string(),
            status: Some("closed".to_string()),
        };
        assert!(bad.statuses().is_err());
    }
}
