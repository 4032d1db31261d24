use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Contract;
use crate::models::agreements::entities::Agreement;
use crate::models::grades::entities::Grade;
use crate::models::persons::entities::Person;
use crate::models::students::entities::Student;

// 协议及其责任人
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "contract.ts")]
pub struct AgreementDetail {
    #[serde(flatten)]
    pub agreement: Agreement,
    pub person: Person,
}

// 合同详情，携带学生、年级与全部协议
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "contract.ts")]
pub struct ContractDetail {
    #[serde(flatten)]
    pub contract: Contract,
    pub student: Student,
    pub grade: Grade,
    pub agreements: Vec<AgreementDetail>,
}

// 列表项：合同与学生
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "contract.ts")]
pub struct ContractListItem {
    #[serde(flatten)]
    pub contract: Contract,
    pub student: Student,
}
