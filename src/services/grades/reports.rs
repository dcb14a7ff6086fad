//! 成绩报表：月度、学期、学年三级视图
//!
//! 报表只读取已录入的成绩行，平均分计算见 `super::average`。

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::BTreeMap;
use std::sync::Arc;

use super::{GradeService, average};
use crate::models::grades::entities::GradeEntry;
use crate::models::grades::requests::{
    GradeListQuery, MonthlyReportParams, SemesterReportParams, YearlyReportParams,
};
use crate::models::grades::responses::{
    MonthAverage, MonthlyReportResponse, SemesterAverage, SemesterReportResponse, SubjectScore,
    YearlyReportResponse,
};
use crate::models::students::entities::Student;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 按月分组算出每月平均，月份升序
pub(crate) fn month_averages(grades: &[GradeEntry], grade_level: i32) -> Vec<MonthAverage> {
    let mut by_month: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    for grade in grades {
        by_month.entry(grade.month).or_default().push(grade.score);
    }
    by_month
        .into_iter()
        .filter_map(|(month, scores)| {
            average::monthly_average(&scores, grade_level)
                .map(|average| MonthAverage { month, average })
        })
        .collect()
}

/// 一个学期的平均分：月平均序列滚算
pub(crate) async fn compute_semester_average(
    storage: &Arc<dyn Storage>,
    student_id: i64,
    semester_id: i64,
    grade_level: i32,
) -> crate::errors::Result<Option<f64>> {
    let grades = storage
        .list_grades(GradeListQuery {
            student_id,
            semester_id,
            subject_id: None,
            month: None,
        })
        .await?;
    let months = month_averages(&grades, grade_level);
    let averages: Vec<f64> = months.iter().map(|m| m.average).collect();
    Ok(average::semester_average(&averages))
}

async fn fetch_student(
    storage: &Arc<dyn Storage>,
    student_id: i64,
) -> Result<Student, HttpResponse> {
    match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => Ok(student),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::StudentNotFound,
            "Student not found",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("Failed to get student: {e}"),
            )),
        ),
    }
}

pub async fn monthly_report(
    service: &GradeService,
    params: MonthlyReportParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match fetch_student(&storage, params.student_id).await {
        Ok(student) => student,
        Err(response) => return Ok(response),
    };

    let grades = match storage
        .list_grades(GradeListQuery {
            student_id: params.student_id,
            semester_id: params.semester_id,
            subject_id: None,
            month: Some(params.month),
        })
        .await
    {
        Ok(grades) => grades,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve grades: {e}"),
                )),
            );
        }
    };

    // 科目名映射
    let subjects = match storage.list_subjects().await {
        Ok(subjects) => subjects,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve subjects: {e}"),
                )),
            );
        }
    };
    let subject_names: BTreeMap<i64, String> = subjects
        .into_iter()
        .map(|subject| (subject.id, subject.name))
        .collect();

    let scores: Vec<SubjectScore> = grades
        .iter()
        .map(|grade| SubjectScore {
            subject_id: grade.subject_id,
            subject_name: subject_names
                .get(&grade.subject_id)
                .cloned()
                .unwrap_or_default(),
            score: grade.score,
        })
        .collect();

    let raw_scores: Vec<f64> = grades.iter().map(|grade| grade.score).collect();
    let response = MonthlyReportResponse {
        student_id: params.student_id,
        semester_id: params.semester_id,
        month: params.month,
        grade_level: student.grade_level,
        scores,
        average: average::monthly_average(&raw_scores, student.grade_level),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Monthly report generated successfully",
    )))
}

pub async fn semester_report(
    service: &GradeService,
    params: SemesterReportParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match fetch_student(&storage, params.student_id).await {
        Ok(student) => student,
        Err(response) => return Ok(response),
    };

    match storage.get_semester_by_id(params.semester_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SemesterNotFound,
                "Semester not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get semester: {e}"),
                )),
            );
        }
    }

    let grades = match storage
        .list_grades(GradeListQuery {
            student_id: params.student_id,
            semester_id: params.semester_id,
            subject_id: None,
            month: None,
        })
        .await
    {
        Ok(grades) => grades,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve grades: {e}"),
                )),
            );
        }
    };

    let months = month_averages(&grades, student.grade_level);
    let averages: Vec<f64> = months.iter().map(|m| m.average).collect();
    let response = SemesterReportResponse {
        student_id: params.student_id,
        semester_id: params.semester_id,
        grade_level: student.grade_level,
        months,
        semester_average: average::semester_average(&averages),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Semester report generated successfully",
    )))
}

pub async fn yearly_report(
    service: &GradeService,
    params: YearlyReportParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match fetch_student(&storage, params.student_id).await {
        Ok(student) => student,
        Err(response) => return Ok(response),
    };

    let semesters = match storage.list_semesters_by_year(params.school_year_id).await {
        Ok(semesters) if semesters.is_empty() => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SchoolYearNotFound,
                "School year not found or has no semesters",
            )));
        }
        Ok(semesters) => semesters,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to retrieve semesters: {e}"),
                )),
            );
        }
    };

    let mut semester_averages = Vec::with_capacity(semesters.len());
    for semester in &semesters {
        let average = match compute_semester_average(
            &storage,
            params.student_id,
            semester.id,
            student.grade_level,
        )
        .await
        {
            Ok(average) => average,
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("Failed to compute semester average: {e}"),
                    )),
                );
            }
        };
        semester_averages.push(SemesterAverage {
            semester_id: semester.id,
            ordinal: semester.ordinal,
            average,
        });
    }

    let averages: Vec<Option<f64>> = semester_averages.iter().map(|s| s.average).collect();
    let response = YearlyReportResponse {
        student_id: params.student_id,
        school_year_id: params.school_year_id,
        semesters: semester_averages,
        yearly_average: average::yearly_average(&averages),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        response,
        "Yearly report generated successfully",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(month: i32, subject_id: i64, score: f64) -> GradeEntry {
        GradeEntry {
            id: 0,
            student_id: 1,
            subject_id,
            semester_id: 1,
            month,
            score,
            recorded_by: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_month_averages_groups_and_sorts() {
        let grades = vec![
            entry(2, 1, 90.0),
            entry(1, 1, 80.0),
            entry(1, 2, 60.0),
            entry(2, 2, 70.0),
        ];
        let months = month_averages(&grades, 3);
        assert_eq!(months.len(), 2);
        assert_eq!(months[0].month, 1);
        assert!((months[0].average - 70.0).abs() < 1e-9);
        assert_eq!(months[1].month, 2);
        assert!((months[1].average - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_month_averages_fixed_divisor() {
        // 九年级：两科共 84 分，除以 8.4
        let grades = vec![entry(1, 1, 42.0), entry(1, 2, 42.0)];
        let months = month_averages(&grades, 9);
        assert_eq!(months.len(), 1);
        assert!((months[0].average - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_month_averages_empty() {
        assert!(month_averages(&[], 5).is_empty());
    }
}
