//! 学生名单导出服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use rust_xlsxwriter::{Format, Workbook};
use tracing::error;

use super::StudentService;
use crate::models::students::entities::Student;
use crate::models::students::requests::{StudentExportParams, StudentListQuery};
use crate::models::{ApiResponse, ErrorCode};

/// 导出学生名单
pub async fn export_students(
    service: &StudentService,
    params: StudentExportParams,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = StudentListQuery {
        page: None,
        size: None,
        search: params.search.clone(),
        grade_level: params.grade_level,
        status: params.status.clone(),
    };

    let students = match storage.list_students_all(query).await {
        Ok(students) => students,
        Err(e) => {
            error!("导出学生失败: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("导出学生失败: {e}"),
                )),
            );
        }
    };

    match params.format.as_str() {
        "xlsx" => export_xlsx(&students),
        _ => export_csv(&students),
    }
}

fn export_csv(students: &[Student]) -> ActixResult<HttpResponse> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    // 写入表头
    wtr.write_record([
        "student_number",
        "first_name",
        "last_name",
        "gender",
        "birth_date",
        "grade_level",
        "status",
        "address",
        "phone",
    ])
    .map_err(|e| {
        error!("CSV 写入失败: {}", e);
        actix_web::error::ErrorInternalServerError(format!("CSV 写入失败: {e}"))
    })?;

    // 写入数据
    for student in students {
        wtr.write_record([
            student.student_number.clone(),
            student.first_name.clone(),
            student.last_name.clone(),
            student.gender.to_string(),
            student.birth_date.clone().unwrap_or_default(),
            student.grade_level.to_string(),
            student.status.to_string(),
            student.address.clone().unwrap_or_default(),
            student.phone.clone().unwrap_or_default(),
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
            "attachment; filename=\"students.csv\"",
        ))
        .body(data))
}

fn export_xlsx(students: &[Student]) -> ActixResult<HttpResponse> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // 表头格式
    let header_format = Format::new().set_bold();

    // 写入表头
    let headers = [
        "学号",
        "名",
        "姓",
        "性别",
        "出生日期",
        "年级",
        "学籍状态",
        "住址",
        "电话",
    ];
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &header_format)
            .map_err(|e| {
                error!("XLSX 写入失败: {}", e);
                actix_web::error::ErrorInternalServerError(format!("XLSX 写入失败: {e}"))
            })?;
    }

    // 写入数据
    for (row, student) in students.iter().enumerate() {
        let row = (row + 1) as u32;
        worksheet.write_string(row, 0, &student.student_number).ok();
        worksheet.write_string(row, 1, &student.first_name).ok();
        worksheet.write_string(row, 2, &student.last_name).ok();
        worksheet
            .write_string(row, 3, student.gender.to_string())
            .ok();
        worksheet
            .write_string(row, 4, student.birth_date.as_deref().unwrap_or(""))
            .ok();
        worksheet
            .write_number(row, 5, student.grade_level as f64)
            .ok();
        worksheet
            .write_string(row, 6, student.status.to_string())
            .ok();
        worksheet
            .write_string(row, 7, student.address.as_deref().unwrap_or(""))
            .ok();
        worksheet
            .write_string(row, 8, student.phone.as_deref().unwrap_or(""))
            .ok();
    }

    // 生成二进制数据
    let buffer = workbook.save_to_buffer().map_err(|e| {
        error!("XLSX 生成失败: {}", e);
        actix_web::error::ErrorInternalServerError(format!("XLSX 生成失败: {e}"))
    })?;

    Ok(HttpResponse::Ok()
        .content_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
        .insert_header((
            "Content-Disposition",
            "attachment; filename=\"students.xlsx\"",
        ))
        .body(buffer))
}
