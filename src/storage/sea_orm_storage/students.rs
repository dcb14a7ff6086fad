use super::SeaOrmStorage;
use crate::entity::students::{ActiveModel, Column, Entity as Students};
use crate::errors::{Result, SimsError};
use crate::models::{
    PaginationInfo,
    students::{
        entities::{Student, StudentStatus},
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Select, Set,
};

impl SeaOrmStorage {
    /// 创建学生
    pub async fn create_student_impl(
        &self,
        student_number: String,
        req: CreateStudentRequest,
    ) -> Result<Student> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_number: Set(student_number),
            first_name: Set(req.first_name),
            last_name: Set(req.last_name),
            gender: Set(req.gender.to_string()),
            birth_date: Set(req.birth_date),
            grade_level: Set(req.grade_level),
            address: Set(req.address),
            phone: Set(req.phone),
            status: Set(StudentStatus::Active.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("创建学生失败: {e}")))?;

        Ok(result.into_student())
    }

    /// 通过 ID 获取学生
    pub async fn get_student_by_id_impl(&self, id: i64) -> Result<Option<Student>> {
        let result = Students::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    /// 通过学号获取学生
    pub async fn get_student_by_number_impl(&self, student_number: &str) -> Result<Option<Student>> {
        let result = Students::find()
            .filter(Column::StudentNumber.eq(student_number))
            .one(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("查询学生失败: {e}")))?;

        Ok(result.map(|m| m.into_student()))
    }

    // 搜索与筛选条件统一在此拼装
    fn filtered_students(query: &StudentListQuery) -> Select<Students> {
        let mut select = Students::find();

        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::StudentNumber.contains(&escaped))
                    .add(Column::FirstName.contains(&escaped))
                    .add(Column::LastName.contains(&escaped)),
            );
        }

        if let Some(grade_level) = query.grade_level {
            select = select.filter(Column::GradeLevel.eq(grade_level));
        }

        if let Some(ref status) = query.status {
            select = select.filter(Column::Status.eq(status.to_string()));
        }

        select.order_by_asc(Column::StudentNumber)
    }

    /// 分页列出学生
    pub async fn list_students_with_pagination_impl(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let paginator = Self::filtered_students(&query).paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| SimsError::database_operation(format!("查询学生总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| SimsError::database_operation(format!("查询学生页数失败: {e}")))?;

        let students = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| SimsError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(StudentListResponse {
            items: students.into_iter().map(|m| m.into_student()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出符合条件的学生（导出用），行数不超过 cap
    pub async fn list_students_all_impl(
        &self,
        cap: u64,
        query: StudentListQuery,
    ) -> Result<Vec<Student>> {
        let students = Self::filtered_students(&query)
            .limit(cap)
            .all(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("查询学生列表失败: {e}")))?;

        Ok(students.into_iter().map(|m| m.into_student()).collect())
    }

    /// 更新学生信息
    pub async fn update_student_impl(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        let existing = self.get_student_by_id_impl(id).await?;
        if existing.is_none() {
            return Ok(None);
        }

        let now = chrono::Utc::now().timestamp();

        let mut model = ActiveModel {
            id: Set(id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(first_name) = update.first_name {
            model.first_name = Set(first_name);
        }

        if let Some(last_name) = update.last_name {
            model.last_name = Set(last_name);
        }

        if let Some(gender) = update.gender {
            model.gender = Set(gender.to_string());
        }

        if let Some(birth_date) = update.birth_date {
            model.birth_date = Set(Some(birth_date));
        }

        if let Some(grade_level) = update.grade_level {
            model.grade_level = Set(grade_level);
        }

        if let Some(address) = update.address {
            model.address = Set(Some(address));
        }

        if let Some(phone) = update.phone {
            model.phone = Set(Some(phone));
        }

        if let Some(status) = update.status {
            model.status = Set(status.to_string());
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("更新学生失败: {e}")))?;

        self.get_student_by_id_impl(id).await
    }

    /// 删除学生，关联的监护人、注册、成绩、考勤由外键级联删除
    pub async fn delete_student_impl(&self, id: i64) -> Result<bool> {
        let result = Students::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("删除学生失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use migration::MigratorTrait;

    use super::*;
    use crate::models::students::entities::Gender;

    async fn memory_storage() -> SeaOrmStorage {
        let db = sea_orm::Database::connect("sqlite::memory:")
            .await
            .unwrap();
        migration::Migrator::up(&db, None).await.unwrap();
        SeaOrmStorage { db }
    }

    fn student_request(first_name: &str) -> CreateStudentRequest {
        CreateStudentRequest {
            student_number: None,
            first_name: first_name.to_string(),
            last_name: "王".to_string(),
            gender: Gender::Female,
            birth_date: None,
            grade_level: 3,
            address: None,
            phone: None,
        }
    }

    #[tokio::test]
    async fn test_list_students_all_respects_row_cap() {
        let storage = memory_storage().await;
        for i in 0..3 {
            storage
                .create_student_impl(format!("S20250000{i}"), student_request("小明"))
                .await
                .unwrap();
        }

        let query = StudentListQuery {
            page: None,
            size: None,
            search: None,
            grade_level: None,
            status: None,
        };

        let capped = storage
            .list_students_all_impl(2, query.clone())
            .await
            .unwrap();
        assert_eq!(capped.len(), 2);

        let all = storage.list_students_all_impl(10000, query).await.unwrap();
        assert_eq!(all.len(), 3);
    }
}
