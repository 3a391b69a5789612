//! Data-access and query layer for the Platzigram photo-sharing application.
//!
//! The crate exposes a single entry point, [`Db`], which owns the connection
//! to the record store and implements every read/write operation the
//! application needs: saving and liking images, listing them by creation
//! time, owner or hashtag, and creating/authenticating users.
//!
//! ```no_run
//! use platzigram::{Config, Db, NewImage};
//!
//! # async fn run() -> Result<(), platzigram::DbError> {
//! let mut db = Db::new(Config {
//!     setup: true,
//!     ..Config::default()
//! });
//! db.connect().await?;
//!
//! let image = db
//!     .save_image(NewImage {
//!         description: "a #sunset over the bay".to_string(),
//!         url: "https://platzigram.test/sunset.jpg".to_string(),
//!         user_id: "some-user".to_string(),
//!     })
//!     .await?;
//!
//! let same = db.get_image(&image.public_id).await?;
//! assert_eq!(same.tags, vec!["sunset"]);
//!
//! db.disconnect().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use db::Db;
pub use error::DbError;
pub use models::{Image, NewImage, NewUser, User};
