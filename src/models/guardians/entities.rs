use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 监护人实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/guardian.ts")]
pub struct Guardian {
    pub id: i64,
    pub student_id: i64,
    pub full_name: String,
    pub relationship: String,
    pub phone: Option<String>,
    pub occupation: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 家庭信息实体（与学生一对一）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/guardian.ts")]
pub struct FamilyInfo {
    pub id: i64,
    pub student_id: i64,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub home_address: Option<String>,
    pub contact_phone: Option<String>,
    pub notes: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
