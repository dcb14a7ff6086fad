use serde::Deserialize;
use ts_rs::TS;

// 创建监护人请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/guardian.ts")]
pub struct CreateGuardianRequest {
    pub full_name: String,
    pub relationship: String,
    pub phone: Option<String>,
    pub occupation: Option<String>,
}

// 更新监护人请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/guardian.ts")]
pub struct UpdateGuardianRequest {
    pub full_name: Option<String>,
    pub relationship: Option<String>,
    pub phone: Option<String>,
    pub occupation: Option<String>,
}

// 家庭信息 upsert 请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/guardian.ts")]
pub struct UpsertFamilyInfoRequest {
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub home_address: Option<String>,
    pub contact_phone: Option<String>,
    pub notes: Option<String>,
}
