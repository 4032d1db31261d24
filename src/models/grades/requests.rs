use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "grade.ts")]
pub struct GradeRequest {
    pub name: String,
    pub year: String,
    pub value: f64,
}
