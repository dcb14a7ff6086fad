use serde::Serialize;
use ts_rs::TS;

use super::entities::{FamilyInfo, Guardian};

// 监护人列表响应（数量有限，不分页）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/guardian.ts")]
pub struct GuardianListResponse {
    pub items: Vec<Guardian>,
}

// 家庭信息响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/guardian.ts")]
pub struct FamilyInfoResponse {
    pub family: FamilyInfo,
}
