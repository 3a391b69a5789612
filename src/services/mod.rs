//! Pure helpers with no I/O.
//!
//! - `hash`: one-way password hashing
//! - `tags`: hashtag normalization and extraction from descriptions
//! - `public_id`: base62 encoding of primary keys for external use

pub mod hash;
pub mod public_id;
pub mod tags;
