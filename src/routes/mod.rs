pub mod classrooms;

pub mod enrollments;

pub mod lookups;

pub mod reports;

pub mod students;

pub use classrooms::configure_classrooms_routes;
pub use enrollments::configure_enrollments_routes;
pub use lookups::configure_lookups_routes;
pub use reports::configure_reports_routes;
pub use students::configure_students_routes;
