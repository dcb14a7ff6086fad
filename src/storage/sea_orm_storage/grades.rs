use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::errors::{Result, SimsError};
use crate::models::grades::{
    entities::GradeEntry,
    requests::{GradeListQuery, RecordGradeRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 录入成绩，同一学生同科目同学期同月份重复录入视为覆盖
    pub async fn upsert_grade_impl(
        &self,
        recorded_by: Option<i64>,
        record: RecordGradeRequest,
    ) -> Result<GradeEntry> {
        let now = chrono::Utc::now().timestamp();

        let existing = Grades::find()
            .filter(Column::StudentId.eq(record.student_id))
            .filter(Column::SubjectId.eq(record.subject_id))
            .filter(Column::SemesterId.eq(record.semester_id))
            .filter(Column::Month.eq(record.month))
            .one(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("查询成绩失败: {e}")))?;

        let result = match existing {
            Some(current) => {
                let model = ActiveModel {
                    id: Set(current.id),
                    score: Set(record.score),
                    recorded_by: Set(recorded_by),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model
                    .update(&self.db)
                    .await
                    .map_err(|e| SimsError::database_operation(format!("更新成绩失败: {e}")))?
            }
            None => {
                let model = ActiveModel {
                    student_id: Set(record.student_id),
                    subject_id: Set(record.subject_id),
                    semester_id: Set(record.semester_id),
                    month: Set(record.month),
                    score: Set(record.score),
                    recorded_by: Set(recorded_by),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| SimsError::database_operation(format!("录入成绩失败: {e}")))?
            }
        };

        Ok(result.into_grade_entry())
    }

    /// 按条件列出成绩，按月份、科目排序
    pub async fn list_grades_impl(&self, query: GradeListQuery) -> Result<Vec<GradeEntry>> {
        let mut select = Grades::find()
            .filter(Column::StudentId.eq(query.student_id))
            .filter(Column::SemesterId.eq(query.semester_id));

        if let Some(subject_id) = query.subject_id {
            select = select.filter(Column::SubjectId.eq(subject_id));
        }

        if let Some(month) = query.month {
            select = select.filter(Column::Month.eq(month));
        }

        let grades = select
            .order_by_asc(Column::Month)
            .order_by_asc(Column::SubjectId)
            .all(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("查询成绩列表失败: {e}")))?;

        Ok(grades.into_iter().map(|m| m.into_grade_entry()).collect())
    }
}
