use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 学年实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/term.ts")]
pub struct SchoolYear {
    pub id: i64,
    pub name: String,
    pub starts_on: String,
    pub ends_on: String,
    pub active: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

// 学期实体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/term.ts")]
pub struct Semester {
    pub id: i64,
    pub school_year_id: i64,
    pub name: String,
    pub ordinal: i32,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
