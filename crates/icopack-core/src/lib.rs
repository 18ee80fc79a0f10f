//! ICO container assembly.
//!
//! Packs already-encoded images into a single Windows ICO file: a 6-byte
//! header, one 16-byte directory entry per image, then the raw payloads
//! concatenated in input order. Image decoding is injected through
//! [`SizeProbe`]; this crate only needs each image's pixel dimensions.

pub mod directory;

mod builder;
mod error;
mod probe;

pub use builder::build;
pub use error::IcoError;
pub use probe::SizeProbe;
