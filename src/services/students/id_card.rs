//! 学生证 PDF 生成服务

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use printpdf::{BuiltinFont, Mm, PdfDocument};
use tracing::error;

use super::StudentService;
use crate::models::students::entities::Student;
use crate::models::{ApiResponse, ErrorCode};

// 标准卡片尺寸 ISO/IEC 7810 ID-1
const CARD_WIDTH_MM: f32 = 85.6;
const CARD_HEIGHT_MM: f32 = 54.0;

/// 生成学生证 PDF
pub async fn generate_id_card(
    service: &StudentService,
    student_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = service.get_config();

    let student = match storage.get_student_by_id(student_id).await {
        Ok(Some(student)) => student,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::StudentNotFound,
                "Student not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get student: {e}"),
                )),
            );
        }
    };

    // 当前激活学年印在卡片底部，没有激活学年时退回到公历年份
    let active_year = match storage.list_school_years().await {
        Ok(years) => years.into_iter().find(|y| y.active).map(|y| y.name),
        Err(e) => {
            error!("查询激活学年失败: {}", e);
            None
        }
    };

    let pdf = render_id_card(
        &student,
        &config.school.name,
        &config.school.motto,
        active_year.as_deref(),
    )
    .map_err(|e| {
        error!("学生证生成失败: {}", e);
        actix_web::error::ErrorInternalServerError(format!("学生证生成失败: {e}"))
    })?;

    let filename = format!("id_card_{}.pdf", student.student_number);
    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{filename}\""),
        ))
        .body(pdf))
}

fn render_id_card(
    student: &Student,
    school_name: &str,
    school_motto: &str,
    school_year: Option<&str>,
) -> Result<Vec<u8>, printpdf::Error> {
    let (doc, page, layer) = PdfDocument::new(
        "Student ID Card",
        Mm(CARD_WIDTH_MM),
        Mm(CARD_HEIGHT_MM),
        "Card",
    );

    let bold = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;
    let regular = doc.add_builtin_font(BuiltinFont::Helvetica)?;

    let layer = doc.get_page(page).get_layer(layer);

    // 头部：学校名称与校训
    layer.use_text(school_name, 12.0, Mm(6.0), Mm(45.0), &bold);
    layer.use_text(school_motto, 6.0, Mm(6.0), Mm(40.5), &regular);

    // 主体：学生信息
    layer.use_text(student.full_name(), 11.0, Mm(6.0), Mm(30.0), &bold);
    layer.use_text(
        format!("Student No: {}", student.student_number),
        8.0,
        Mm(6.0),
        Mm(23.5),
        &regular,
    );
    layer.use_text(
        format!("Grade: {}", student.grade_level),
        8.0,
        Mm(6.0),
        Mm(18.5),
        &regular,
    );
    if let Some(birth_date) = &student.birth_date {
        layer.use_text(
            format!("Date of Birth: {birth_date}"),
            8.0,
            Mm(6.0),
            Mm(13.5),
            &regular,
        );
    }

    // 底部：学年标识
    let issued_for = match school_year {
        Some(name) => format!("School Year {name}"),
        None => format!("Issued {}", chrono::Utc::now().format("%Y")),
    };
    layer.use_text(issued_for, 6.0, Mm(6.0), Mm(6.0), &regular);

    doc.save_to_bytes()
}
