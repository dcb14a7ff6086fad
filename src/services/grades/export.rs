//! 学期平均分导出：指定学期、指定年级全部学生

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use rust_xlsxwriter::{Format, Workbook};
use tracing::error;

use super::{GradeService, reports};
use crate::models::grades::requests::SemesterExportParams;
use crate::models::students::requests::StudentListQuery;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_grade_level;

struct ExportRow {
    student_number: String,
    full_name: String,
    semester_average: Option<f64>,
}

pub async fn export_semester_averages(
    service: &GradeService,
    params: SemesterExportParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(msg) = validate_grade_level(params.grade_level) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::GradeDataInvalid, msg)));
    }

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

    let students = match storage
        .list_students_all(StudentListQuery {
            page: None,
            size: None,
            search: None,
            grade_level: Some(params.grade_level),
            status: None,
        })
        .await
    {
        Ok(students) => students,
        Err(e) => {
            error!("导出学期平均分失败: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("导出学期平均分失败: {e}"),
                )),
            );
        }
    };

    let mut rows = Vec::with_capacity(students.len());
    for student in &students {
        let semester_average = match reports::compute_semester_average(
            &storage,
            student.id,
            params.semester_id,
            student.grade_level,
        )
        .await
        {
            Ok(average) => average,
            Err(e) => {
                error!("导出学期平均分失败: {}", e);
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("导出学期平均分失败: {e}"),
                    )),
                );
            }
        };
        rows.push(ExportRow {
            student_number: student.student_number.clone(),
            full_name: student.full_name(),
            semester_average,
        });
    }

    match params.format.as_str() {
        "xlsx" => export_xlsx(&rows),
        _ => export_csv(&rows),
    }
}

fn format_average(average: Option<f64>) -> String {
    match average {
        Some(value) => format!("{value:.2}"),
        None => String::new(),
    }
}

fn export_csv(rows: &[ExportRow]) -> ActixResult<HttpResponse> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["student_number", "name", "semester_average"])
        .map_err(|e| {
            error!("CSV 写入失败: {}", e);
            actix_web::error::ErrorInternalServerError(format!("CSV 写入失败: {e}"))
        })?;

    for row in rows {
        wtr.write_record([
            row.student_number.clone(),
            row.full_name.clone(),
            format_average(row.semester_average),
        ])
        .map_err(|e| {
            error!("CSV 写入失败: {}", e);
            actix_web::error::ErrorInternalServerError(format!("CSV 写入失败: {e}"))
        })?;
    }

    let data = wtr.into_inner().map_err(|e| {
        error!("CSV 生成失败: {}", e);
        actix_web::error::ErrorInternalServerError(format!("CSV 生成失败: {e}"))
    })?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv; charset=utf-8")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"semester_averages.csv\"",
        ))
        .body(data))
}

fn export_xlsx(rows: &[ExportRow]) -> ActixResult<HttpResponse> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    let header_format = Format::new().set_bold();

    let headers = ["学号", "姓名", "学期平均分"];
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| {
                error!("XLSX 写入失败: {}", e);
                actix_web::error::ErrorInternalServerError(format!("XLSX 写入失败: {e}"))
            })?;
    }

    for (row_idx, row) in rows.iter().enumerate() {
        let row_idx = (row_idx + 1) as u32;
        worksheet
            .write_string(row_idx, 0, &row.student_number)
            .ok();
        worksheet.write_string(row_idx, 1, &row.full_name).ok();
        if let Some(average) = row.semester_average {
            worksheet.write_number(row_idx, 2, average).ok();
        }
    }

    let buffer = workbook.save_to_buffer().map_err(|e| {
        error!("XLSX 生成失败: {}", e);
        actix_web::error::ErrorInternalServerError(format!("XLSX 生成失败: {e}"))
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"semester_averages.xlsx\"",
        ))
        .body(buffer))
}
