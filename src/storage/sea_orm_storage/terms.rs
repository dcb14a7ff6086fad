use super::SeaOrmStorage;
use crate::entity::school_years::{
    ActiveModel as SchoolYearActiveModel, Column as SchoolYearColumn, Entity as SchoolYears,
};
use crate::entity::semesters::{ActiveModel as SemesterActiveModel, Column, Entity as Semesters};
use crate::errors::{Result, SimsError};
use crate::models::terms::{
    entities::{SchoolYear, Semester},
    requests::{CreateSchoolYearRequest, CreateSemesterRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建学年，新学年默认未激活
    pub async fn create_school_year_impl(
        &self,
        req: CreateSchoolYearRequest,
    ) -> Result<SchoolYear> {
        let now = chrono::Utc::now().timestamp();

        let model = SchoolYearActiveModel {
            name: Set(req.name),
            starts_on: Set(req.starts_on),
            ends_on: Set(req.ends_on),
            active: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("创建学年失败: {e}")))?;

        Ok(result.into_school_year())
    }

    /// 通过 ID 获取学年
    pub async fn get_school_year_by_id_impl(&self, id: i64) -> Result<Option<SchoolYear>> {
        let result = SchoolYears::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("查询学年失败: {e}")))?;

        Ok(result.map(|m| m.into_school_year()))
    }

    /// 列出学年，按起始日期倒序
    pub async fn list_school_years_impl(&self) -> Result<Vec<SchoolYear>> {
        let years = SchoolYears::find()
            .order_by_desc(SchoolYearColumn::StartsOn)
            .all(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("查询学年列表失败: {e}")))?;

        Ok(years.into_iter().map(|m| m.into_school_year()).collect())
    }

    /// 激活指定学年，其余学年取消激活
    pub async fn activate_school_year_impl(&self, id: i64) -> Result<Option<SchoolYear>> {
        let now = chrono::Utc::now().timestamp();

        // 先全部取消激活，再激活目标学年
        SchoolYears::update_many()
            .col_expr(SchoolYearColumn::Active, sea_orm::sea_query::Expr::value(false))
            .col_expr(
                SchoolYearColumn::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .filter(SchoolYearColumn::Active.eq(true))
            .exec(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("取消激活学年失败: {e}")))?;

        let result = SchoolYears::update_many()
            .col_expr(SchoolYearColumn::Active, sea_orm::sea_query::Expr::value(true))
            .col_expr(
                SchoolYearColumn::UpdatedAt,
                sea_orm::sea_query::Expr::value(now),
            )
            .filter(SchoolYearColumn::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("激活学年失败: {e}")))?;

        if result.rows_affected == 0 {
            return Ok(None);
        }
        self.get_school_year_by_id_impl(id).await
    }

    /// 在学年下创建学期
    pub async fn create_semester_impl(
        &self,
        school_year_id: i64,
        req: CreateSemesterRequest,
    ) -> Result<Semester> {
        let now = chrono::Utc::now().timestamp();

        let model = SemesterActiveModel {
            school_year_id: Set(school_year_id),
            name: Set(req.name),
            ordinal: Set(req.ordinal),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("创建学期失败: {e}")))?;

        Ok(result.into_semester())
    }

    /// 通过 ID 获取学期
    pub async fn get_semester_by_id_impl(&self, id: i64) -> Result<Option<Semester>> {
        let result = Semesters::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("查询学期失败: {e}")))?;

        Ok(result.map(|m| m.into_semester()))
    }

    /// 列出学年下的学期，按学期序号排序
    pub async fn list_semesters_by_year_impl(&self, school_year_id: i64) -> Result<Vec<Semester>> {
        let semesters = Semesters::find()
            .filter(Column::SchoolYearId.eq(school_year_id))
            .order_by_asc(Column::Ordinal)
            .all(&self.db)
            .await
            .map_err(|e| SimsError::database_operation(format!("查询学期列表失败: {e}")))?;

        Ok(semesters.into_iter().map(|m| m.into_semester()).collect())
    }
}
