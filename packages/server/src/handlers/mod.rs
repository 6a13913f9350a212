pub mod attendance;
pub mod event;
pub mod feedback;
pub mod health;
pub mod me;
pub mod registration;
pub mod report;
pub mod staff;
pub mod student;
