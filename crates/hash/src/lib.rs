// Copyright 2025 Irreducible Inc.

//! GOST R 34.11-2012 ("Streebog") hash function with 256-bit and 512-bit digests.
//!
//! ```
//! use stribog_hash::{DigestWidth, Streebog};
//!
//! let hasher = Streebog::new(256)?;
//! let digest = hasher.compute(b"message");
//! assert_eq!(digest.width(), DigestWidth::Bits256);
//! assert_eq!(digest.as_bytes().len(), 32);
//! println!("{}", digest.labeled());
//! # Ok::<(), stribog_hash::Error>(())
//! ```

pub mod block;
pub mod cipher;
pub mod compression;
pub mod consts;
mod error;
mod output;
pub mod streebog;
mod width;


pub use compression::*;
pub use error::*;
pub use output::*;
pub use streebog::*;
pub use width::*;
