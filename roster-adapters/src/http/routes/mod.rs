pub mod create_user;
pub mod error;
pub mod profile_deleted;

pub use create_user::create_user;
pub use error::{ApiError, ErrorResponse};
pub use profile_deleted::profile_deleted;
