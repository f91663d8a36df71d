mod emergency_code;
mod loader;
mod patient;

pub use emergency_code::EmergencyCode;
pub use loader::{load_patients, read_patients};
pub use patient::{ParseError, Patient};
