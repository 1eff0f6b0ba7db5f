pub mod auth;
pub mod rotate;
pub mod show;

pub use auth::auth_command;
pub use rotate::rotate_command;
pub use show::show_command;
