use super::SeaOrmStorage;
use crate::entity::attendances::{ActiveModel, Column, Entity as Attendances};
use crate::errors::{Result, SimsError};
use crate::models::{
    PaginationInfo,
    attendance::{
        entities::{Attendance, AttendanceStatus},
        requests::{AttendanceListQuery, RecordAttendanceRequest},
        responses::{AttendanceListResponse, AttendanceSummaryResponse},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select,
    Set,
};

impl SeaOrmStorage {
    /// 记录考勤，同一学生同一天重复记录视为覆盖
    pub async fn upsert_attendance_impl(
        &self,
        recorded_by: Option<i64>,
        record: RecordAttendanceRequest,
    ) -> Result<Attendance> {
        let now = chrono::Utc::now().timestamp();

        let existing = Attendances::find()
            .filter(Column::StudentId.eq(record.student_id))
            .filter(Column::Date.eq(record.date.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("查询考勤记录失败: {e}")))?;

        let result = match existing {
            Some(current) => {
                let model = ActiveModel {
                    id: Set(current.id),
                    status: Set(record.status.to_string()),
                    note: Set(record.note),
                    recorded_by: Set(recorded_by),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model
                    .update(&self.db)
                    .await
                    .map_err(|e| SimsError::database_operation(format!("更新考勤记录失败: {e}")))?
            }
            None => {
                let model = ActiveModel {
                    student_id: Set(record.student_id),
                    date: Set(record.date),
                    status: Set(record.status.to_string()),
                    note: Set(record.note),
                    recorded_by: Set(recorded_by),
                    created_at: Set(now),
                    updated_at: Set(now),
                    ..Default::default()
                };
                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| SimsError::database_operation(format!("创建考勤记录失败: {e}")))?
            }
        };

        Ok(result.into_attendance())
    }

    // 日期区间筛选
    fn filtered_attendance(
        student_id: i64,
        from: &Option<String>,
        to: &Option<String>,
    ) -> Select<Attendances> {
        let mut select = Attendances::find().filter(Column::StudentId.eq(student_id));

        if let Some(from) = from {
            select = select.filter(Column::Date.gte(from.as_str()));
        }

        if let Some(to) = to {
            select = select.filter(Column::Date.lte(to.as_str()));
        }

        select
    }

    /// 分页列出学生考勤记录
    pub async fn list_attendance_with_pagination_impl(
        &self,
        student_id: i64,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let select = Self::filtered_attendance(student_id, &query.from, &query.to)
            .order_by_desc(Column::Date);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SimsError::database_operation(format!("查询考勤总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SimsError::database_operation(format!("查询考勤页数失败: {e}")))?;

        let records = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SimsError::database_operation(format!("查询考勤列表失败: {e}")))?;

        Ok(AttendanceListResponse {
            items: records.into_iter().map(|m| m.into_attendance()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 统计学生考勤
    pub async fn summarize_attendance_impl(
        &self,
        student_id: i64,
        from: Option<String>,
        to: Option<String>,
    ) -> Result<AttendanceSummaryResponse> {
        let records = Self::filtered_attendance(student_id, &from, &to)
            .all(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("统计考勤失败: {e}")))?;

        let mut present = 0i64;
        let mut absent = 0i64;
        let mut late = 0i64;
        let mut excused = 0i64;
        let mut attended = 0i64;

        for record in &records {
            let status = record
                .status
                .parse::<AttendanceStatus>()
                .unwrap_or(AttendanceStatus::Present);
            match status {
                AttendanceStatus::Present => present += 1,
                AttendanceStatus::Absent => absent += 1,
                AttendanceStatus::Late => late += 1,
                AttendanceStatus::Excused => excused += 1,
            }
            if status.counts_as_attended() {
                attended += 1;
            }
        }

        let total = records.len() as i64;
        let attendance_rate = if total > 0 {
            Some(attended as f64 / total as f64)
        } else {
            None
        };

        Ok(AttendanceSummaryResponse {
            student_id,
            total,
            present,
            absent,
            late,
            excused,
            attendance_rate,
        })
    }
}
