//! Data models for LiftCheck

pub mod driver;
pub mod enums;
pub mod equipment;
pub mod maintenance;
pub mod notification;
pub mod question;
pub mod submission;

// Re-export commonly used types
pub use driver::Driver;
pub use enums::{MaintenancePriority, MaintenanceStatus, ResponseStatus};
pub use equipment::EquipmentUnit;
pub use maintenance::MaintenanceRecord;
pub use notification::FailNotification;
pub use question::Question;
pub use submission::{ChecklistResponse, Submission};
