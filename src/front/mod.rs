pub mod errors;
pub mod inbox;
pub mod otp;
pub mod server;
pub mod templates;

use crate::repo;

pub struct AppState {
    pub repo: repo::ImplMessageRepo,
}
