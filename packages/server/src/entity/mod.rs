pub mod attendance;
pub mod event;
pub mod feedback;
pub mod registration;
pub mod student;
