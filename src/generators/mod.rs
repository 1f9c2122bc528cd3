pub mod password;
pub mod strength;
pub mod uuid;

pub use password::PasswordGenerator;
pub use strength::{analyze_password_strength, strength_feedback};
pub use uuid::generate_uuid_v4;
