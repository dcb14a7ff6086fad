//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod attendance;
mod catalog;
mod enrollments;
mod grades;
mod guardians;
mod students;
mod terms;
mod users;

use crate::config::AppConfig;
use crate::errors::{Result, SimsError};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SimsError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SimsError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SimsError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SimsError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(SimsError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    attendance::{
        entities::Attendance,
        requests::{AttendanceListQuery, RecordAttendanceRequest},
        responses::{AttendanceListResponse, AttendanceSummaryResponse},
    },
    catalog::{
        entities::{Course, Subject},
        requests::{
            CourseListQuery, CreateCourseRequest, CreateSubjectRequest, UpdateCourseRequest,
            UpdateSubjectRequest,
        },
    },
    enrollments::{
        entities::Enrollment,
        requests::{CreateEnrollmentRequest, EnrollmentListQuery, UpdateEnrollmentRequest},
        responses::EnrollmentListResponse,
    },
    grades::{
        entities::GradeEntry,
        requests::{GradeListQuery, RecordGradeRequest},
    },
    guardians::{
        entities::{FamilyInfo, Guardian},
        requests::{CreateGuardianRequest, UpdateGuardianRequest, UpsertFamilyInfoRequest},
    },
    students::{
        entities::Student,
        requests::{CreateStudentRequest, StudentListQuery, UpdateStudentRequest},
        responses::StudentListResponse,
    },
    terms::{
        entities::{SchoolYear, Semester},
        requests::{CreateSchoolYearRequest, CreateSemesterRequest},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 学生模块
    async fn create_student(
        &self,
        student_number: String,
        student: CreateStudentRequest,
    ) -> Result<Student> {
        self.create_student_impl(student_number, student).await
    }

    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>> {
        self.get_student_by_id_impl(id).await
    }

    async fn get_student_by_number(&self, student_number: &str) -> Result<Option<Student>> {
        self.get_student_by_number_impl(student_number).await
    }

    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse> {
        self.list_students_with_pagination_impl(query).await
    }

    async fn list_students_all(&self, query: StudentListQuery) -> Result<Vec<Student>> {
        self.list_students_all_impl(10000, query).await
    }

    async fn update_student(
        &self,
        id: i64,
        update: UpdateStudentRequest,
    ) -> Result<Option<Student>> {
        self.update_student_impl(id, update).await
    }

    async fn delete_student(&self, id: i64) -> Result<bool> {
        self.delete_student_impl(id).await
    }

    // 监护人与家庭信息模块
    async fn create_guardian(
        &self,
        student_id: i64,
        guardian: CreateGuardianRequest,
    ) -> Result<Guardian> {
        self.create_guardian_impl(student_id, guardian).await
    }

    async fn get_guardian_by_id(&self, id: i64) -> Result<Option<Guardian>> {
        self.get_guardian_by_id_impl(id).await
    }

    async fn list_guardians_by_student(&self, student_id: i64) -> Result<Vec<Guardian>> {
        self.list_guardians_by_student_impl(student_id).await
    }

    async fn update_guardian(
        &self,
        id: i64,
        update: UpdateGuardianRequest,
    ) -> Result<Option<Guardian>> {
        self.update_guardian_impl(id, update).await
    }

    async fn delete_guardian(&self, id: i64) -> Result<bool> {
        self.delete_guardian_impl(id).await
    }

    async fn upsert_family_info(
        &self,
        student_id: i64,
        info: UpsertFamilyInfoRequest,
    ) -> Result<FamilyInfo> {
        self.upsert_family_info_impl(student_id, info).await
    }

    async fn get_family_info_by_student(&self, student_id: i64) -> Result<Option<FamilyInfo>> {
        self.get_family_info_by_student_impl(student_id).await
    }

    // 学年与学期模块
    async fn create_school_year(&self, year: CreateSchoolYearRequest) -> Result<SchoolYear> {
        self.create_school_year_impl(year).await
    }

    async fn get_school_year_by_id(&self, id: i64) -> Result<Option<SchoolYear>> {
        self.get_school_year_by_id_impl(id).await
    }

    async fn list_school_years(&self) -> Result<Vec<SchoolYear>> {
        self.list_school_years_impl().await
    }

    async fn activate_school_year(&self, id: i64) -> Result<Option<SchoolYear>> {
        self.activate_school_year_impl(id).await
    }

    async fn create_semester(
        &self,
        school_year_id: i64,
        semester: CreateSemesterRequest,
    ) -> Result<Semester> {
        self.create_semester_impl(school_year_id, semester).await
    }

    async fn get_semester_by_id(&self, id: i64) -> Result<Option<Semester>> {
        self.get_semester_by_id_impl(id).await
    }

    async fn list_semesters_by_year(&self, school_year_id: i64) -> Result<Vec<Semester>> {
        self.list_semesters_by_year_impl(school_year_id).await
    }

    // 科目与课程模块
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject> {
        self.create_subject_impl(subject).await
    }

    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>> {
        self.get_subject_by_id_impl(id).await
    }

    async fn list_subjects(&self) -> Result<Vec<Subject>> {
        self.list_subjects_impl().await
    }

    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>> {
        self.update_subject_impl(id, update).await
    }

    async fn delete_subject(&self, id: i64) -> Result<bool> {
        self.delete_subject_impl(id).await
    }

    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(id).await
    }

    async fn list_courses(&self, query: CourseListQuery) -> Result<Vec<Course>> {
        self.list_courses_impl(query).await
    }

    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>> {
        self.update_course_impl(id, update).await
    }

    async fn delete_course(&self, id: i64) -> Result<bool> {
        self.delete_course_impl(id).await
    }

    // 注册模块
    async fn create_enrollment(&self, enrollment: CreateEnrollmentRequest) -> Result<Enrollment> {
        self.create_enrollment_impl(enrollment).await
    }

    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_id_impl(id).await
    }

    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse> {
        self.list_enrollments_with_pagination_impl(query).await
    }

    async fn update_enrollment(
        &self,
        id: i64,
        update: UpdateEnrollmentRequest,
    ) -> Result<Option<Enrollment>> {
        self.update_enrollment_impl(id, update).await
    }

    async fn delete_enrollment(&self, id: i64) -> Result<bool> {
        self.delete_enrollment_impl(id).await
    }

    // 考勤模块
    async fn upsert_attendance(
        &self,
        recorded_by: Option<i64>,
        record: RecordAttendanceRequest,
    ) -> Result<Attendance> {
        self.upsert_attendance_impl(recorded_by, record).await
    }

    async fn list_attendance_with_pagination(
        &self,
        student_id: i64,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse> {
        self.list_attendance_with_pagination_impl(student_id, query)
            .await
    }

    async fn summarize_attendance(
        &self,
        student_id: i64,
        from: Option<String>,
        to: Option<String>,
    ) -> Result<AttendanceSummaryResponse> {
        self.summarize_attendance_impl(student_id, from, to).await
    }

    // 成绩模块
    async fn upsert_grade(
        &self,
        recorded_by: Option<i64>,
        record: RecordGradeRequest,
    ) -> Result<GradeEntry> {
        self.upsert_grade_impl(recorded_by, record).await
    }

    async fn list_grades(&self, query: GradeListQuery) -> Result<Vec<GradeEntry>> {
        self.list_grades_impl(query).await
    }
}
