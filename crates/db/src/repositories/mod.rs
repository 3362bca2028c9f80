//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod chat_message_repo;
pub mod login_token_repo;
pub mod platform_repo;
pub mod request_repo;
pub mod session_repo;
pub mod step_repo;
pub mod subscription_repo;
pub mod user_platform_repo;
pub mod user_repo;

pub use chat_message_repo::ChatMessageRepo;
pub use login_token_repo::LoginTokenRepo;
pub use platform_repo::PlatformRepo;
pub use request_repo::RequestRepo;
pub use session_repo::SessionRepo;
pub use step_repo::StepRepo;
pub use subscription_repo::SubscriptionRepo;
pub use user_platform_repo::UserPlatformRepo;
pub use user_repo::UserRepo;
