//! Record types stored in the database.
//!
//! - `image`: image records and the `NewImage` input shape
//! - `user`: user records and the `NewUser` input shape

pub mod image;
pub mod user;

pub use image::*;
pub use user::*;
