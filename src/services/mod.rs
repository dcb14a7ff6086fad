pub mod attendance;
pub mod auth;
pub mod catalog;
pub mod enrollments;
pub mod grades;
pub mod guardians;
pub mod students;
pub mod terms;
pub mod users;

pub use attendance::AttendanceService;
pub use auth::AuthService;
pub use catalog::CatalogService;
pub use enrollments::EnrollmentService;
pub use grades::GradeService;
pub use guardians::GuardianService;
pub use students::StudentService;
pub use terms::TermService;
pub use users::UserService;
