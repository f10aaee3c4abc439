pub mod config;
pub mod login;
pub mod register;

pub use config::AuthConfig;
pub use login::{LoginInput, LoginUseCase};
pub use register::{RegisterInput, RegisterUseCase};
