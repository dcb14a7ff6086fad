use super::SeaOrmStorage;
use crate::entity::family_infos::{
    ActiveModel as FamilyInfoActiveModel, Column as FamilyInfoColumn, Entity as FamilyInfos,
};
use crate::entity::guardians::{ActiveModel, Column, Entity as Guardians};
use crate::errors::{Result, SimsError};
use crate::models::guardians::{
    entities::{FamilyInfo, Guardian},
    requests::{CreateGuardianRequest, UpdateGuardianRequest, UpsertFamilyInfoRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 为学生添加监护人
    pub async fn create_guardian_impl(
        &self,
        student_id: i64,
        req: CreateGuardianRequest,
    ) -> Result<Guardian> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(student_id),
            full_name: Set(req.full_name),
            relationship: Set(req.relationship),
            phone: Set(req.phone),
            occupation: Set(req.occupation),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("创建监护人失败: {e}")))?;

        Ok(result.into_guardian())
    }

    /// 通过 ID 获取监护人
    pub async fn get_guardian_by_id_impl(&self, id: i64) -> Result<Option<Guardian>> {
        let result = Guardians::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("查询监护人失败: {e}")))?;

        Ok(result.map(|m| m.into_guardian()))
    }

    /// 列出学生的监护人
    pub async fn list_guardians_by_student_impl(&self, student_id: i64) -> Result<Vec<Guardian>> {
        let guardians = Guardians::find()
            .filter(Column::StudentId.eq(student_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("查询监护人列表失败: {e}")))?;

        Ok(guardians.into_iter().map(|m| m.into_guardian()).collect())
    }

    /// 更新监护人信息
    pub async fn update_guardian_impl(
        &self,
        id: i64,
        update: UpdateGuardianRequest,
    ) -> Result<Option<Guardian>> {
        let existing = self.get_guardian_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(full_name) = update.full_name {
            model.full_name = Set(full_name);
        }

        if let Some(relationship) = update.relationship {
            model.relationship = Set(relationship);
        }

        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }

        if let Some(occupation) = update.occupation {
            model.occupation = Set(Some(occupation));
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("更新监护人失败: {e}")))?;

        self.get_guardian_by_id_impl(id).await
    }

    /// 删除监护人
    pub async fn delete_guardian_impl(&self, id: i64) -> Result<bool> {
        let result = Guardians::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("删除监护人失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 写入或覆盖学生家庭信息
    pub async fn upsert_family_info_impl(
        &self,
        student_id: i64,
        info: UpsertFamilyInfoRequest,
    ) -> Result<FamilyInfo> {
        let now = chrono::Utc::now().timestamp();

        let existing = FamilyInfos::find()
            .filter(FamilyInfoColumn::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("查询家庭信息失败: {e}")))?;

        let result = match existing {
            Some(current) => {
                let model = FamilyInfoActiveModel {
                    id: Set(current.id),
                    student_id: Set(student_id),
                    father_name: Set(info.father_name),
                    mother_name: Set(info.mother_name),
                    home_address: Set(info.home_address),
                    contact_phone: Set(info.contact_phone),
                    notes: Set(info.notes),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model
                    .update(&self.db)
                    .await
                    .map_err(|e| SimsError::database_operation(format!("更新家庭信息失败: {e}")))?
            }
            None => {
                let model = FamilyInfoActiveModel {
                    student_id: Set(student_id),
                    father_name: Set(info.father_name),
                    mother_name: Set(info.mother_name),
                    home_address: Set(info.home_address),
                    contact_phone: Set(info.contact_phone),
                    notes: Set(info.notes),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| SimsError::database_operation(format!("创建家庭信息失败: {e}")))?
            }
        };

        Ok(result.into_family_info())
    }

    /// 获取学生家庭信息
    pub async fn get_family_info_by_student_impl(
        &self,
        student_id: i64,
    ) -> Result<Option<FamilyInfo>> {
        let result = FamilyInfos::find()
            .filter(FamilyInfoColumn::StudentId.eq(student_id))
            .one(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("查询家庭信息失败: {e}")))?;

        Ok(result.map(|m| m.into_family_info()))
    }
}
