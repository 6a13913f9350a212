pub mod attendance;
pub mod event;
pub mod feedback;
pub mod registration;
pub mod report;
pub mod shared;
pub mod student;
