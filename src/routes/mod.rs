pub mod attendance;
pub mod auth;
pub mod catalog;
pub mod enrollments;
pub mod grades;
pub mod guardians;
pub mod students;
pub mod terms;
pub mod users;

pub use attendance::configure_attendance_routes;
pub use auth::configure_auth_routes;
pub use catalog::configure_catalog_routes;
pub use enrollments::configure_enrollment_routes;
pub use grades::configure_grade_routes;
pub use guardians::configure_guardian_routes;
pub use students::configure_student_routes;
pub use terms::configure_term_routes;
pub use users::configure_user_routes;
