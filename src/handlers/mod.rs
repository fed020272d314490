pub mod health;
pub mod list_users;
pub mod create_user;

pub use health::health_handler;
pub use list_users::list_users_handler;
pub use create_user::create_user_handler;
