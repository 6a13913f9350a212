pub mod attendance;
pub mod dialect;
pub mod event;
pub mod feedback;
pub mod registration;
pub mod report;
pub mod student;
