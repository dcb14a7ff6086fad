use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户数量
    async fn count_users(&self) -> Result<u64>;

    /// 学生管理方法
    // 创建学生，学号由服务层预先确定
    async fn create_student(
        &self,
        student_number: String,
        student: CreateStudentRequest,
    ) -> Result<Student>;
    // 通过ID获取学生信息
    async fn get_student_by_id(&self, id: i64) -> Result<Option<Student>>;
    // 通过学号获取学生信息
    async fn get_student_by_number(&self, student_number: &str) -> Result<Option<Student>>;
    // 分页列出学生
    async fn list_students_with_pagination(
        &self,
        query: StudentListQuery,
    ) -> Result<StudentListResponse>;
    // 列出符合条件的学生（导出用，不分页，行数有上限）
    async fn list_students_all(&self, query: StudentListQuery) -> Result<Vec<Student>>;
    // 更新学生信息
    async fn update_student(&self, id: i64, update: UpdateStudentRequest)
    -> Result<Option<Student>>;
    // 删除学生
    async fn delete_student(&self, id: i64) -> Result<bool>;

    /// 监护人与家庭信息方法
    // 为学生添加监护人
    async fn create_guardian(
        &self,
        student_id: i64,
        guardian: CreateGuardianRequest,
    ) -> Result<Guardian>;
    // 通过ID获取监护人
    async fn get_guardian_by_id(&self, id: i64) -> Result<Option<Guardian>>;
    // 列出学生的监护人
    async fn list_guardians_by_student(&self, student_id: i64) -> Result<Vec<Guardian>>;
    // 更新监护人信息
    async fn update_guardian(
        &self,
        id: i64,
        update: UpdateGuardianRequest,
    ) -> Result<Option<Guardian>>;
    // 删除监护人
    async fn delete_guardian(&self, id: i64) -> Result<bool>;
    // 写入或覆盖学生家庭信息
    async fn upsert_family_info(
        &self,
        student_id: i64,
        info: UpsertFamilyInfoRequest,
    ) -> Result<FamilyInfo>;
    // 获取学生家庭信息
    async fn get_family_info_by_student(&self, student_id: i64) -> Result<Option<FamilyInfo>>;

    /// 学年与学期方法
    // 创建学年
    async fn create_school_year(&self, year: CreateSchoolYearRequest) -> Result<SchoolYear>;
    // 通过ID获取学年
    async fn get_school_year_by_id(&self, id: i64) -> Result<Option<SchoolYear>>;
    // 列出学年
    async fn list_school_years(&self) -> Result<Vec<SchoolYear>>;
    // 激活指定学年，其余学年取消激活
    async fn activate_school_year(&self, id: i64) -> Result<Option<SchoolYear>>;
    // 在学年下创建学期
    async fn create_semester(
        &self,
        school_year_id: i64,
        semester: CreateSemesterRequest,
    ) -> Result<Semester>;
    // 通过ID获取学期
    async fn get_semester_by_id(&self, id: i64) -> Result<Option<Semester>>;
    // 列出学年下的学期
    async fn list_semesters_by_year(&self, school_year_id: i64) -> Result<Vec<Semester>>;

    /// 科目与课程方法
    // 创建科目
    async fn create_subject(&self, subject: CreateSubjectRequest) -> Result<Subject>;
    // 通过ID获取科目
    async fn get_subject_by_id(&self, id: i64) -> Result<Option<Subject>>;
    // 列出全部科目
    async fn list_subjects(&self) -> Result<Vec<Subject>>;
    // 更新科目
    async fn update_subject(
        &self,
        id: i64,
        update: UpdateSubjectRequest,
    ) -> Result<Option<Subject>>;
    // 删除科目
    async fn delete_subject(&self, id: i64) -> Result<bool>;
    // 创建课程
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    // 通过ID获取课程
    async fn get_course_by_id(&self, id: i64) -> Result<Option<Course>>;
    // 按条件列出课程
    async fn list_courses(&self, query: CourseListQuery) -> Result<Vec<Course>>;
    // 更新课程
    async fn update_course(&self, id: i64, update: UpdateCourseRequest) -> Result<Option<Course>>;
    // 删除课程
    async fn delete_course(&self, id: i64) -> Result<bool>;

    /// 注册管理方法
    // 学生注册到学年
    async fn create_enrollment(&self, enrollment: CreateEnrollmentRequest) -> Result<Enrollment>;
    // 通过ID获取注册记录
    async fn get_enrollment_by_id(&self, id: i64) -> Result<Option<Enrollment>>;
    // 分页列出注册记录
    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse>;
    // 更新注册记录
    async fn update_enrollment(
        &self,
        id: i64,
        update: UpdateEnrollmentRequest,
    ) -> Result<Option<Enrollment>>;
    // 删除注册记录
    async fn delete_enrollment(&self, id: i64) -> Result<bool>;

    /// 考勤管理方法
    // 记录考勤，同一学生同一天重复记录视为覆盖
    async fn upsert_attendance(
        &self,
        recorded_by: Option<i64>,
        record: RecordAttendanceRequest,
    ) -> Result<Attendance>;
    // 分页列出学生考勤记录
    async fn list_attendance_with_pagination(
        &self,
        student_id: i64,
        query: AttendanceListQuery,
    ) -> Result<AttendanceListResponse>;
    // 统计学生考勤
    async fn summarize_attendance(
        &self,
        student_id: i64,
        from: Option<String>,
        to: Option<String>,
    ) -> Result<AttendanceSummaryResponse>;

    /// 成绩管理方法
    // 录入成绩，同一学生同科目同学期同月份重复录入视为覆盖
    async fn upsert_grade(
        &self,
        recorded_by: Option<i64>,
        record: RecordGradeRequest,
    ) -> Result<GradeEntry>;
    // 按条件列出成绩
    async fn list_grades(&self, query: GradeListQuery) -> Result<Vec<GradeEntry>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
