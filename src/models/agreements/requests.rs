use serde::Deserialize;
use ts_rs::TS;

use super::entities::ResponsibleType;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "agreement.ts")]
pub struct CreateAgreementRequest {
    pub contract_id: i64,
    pub person_id: i64,
    pub responsible_type: ResponsibleType,
}
