pub mod audit_log;
pub mod calculation;
pub mod user;

pub use audit_log::*;
pub use calculation::*;
pub use user::*;
