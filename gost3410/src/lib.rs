#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

/// Emit a `tracing` debug event when the `tracing` feature is enabled.
macro_rules! debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::debug!($($arg)*);
    };
}

/// Emit a `tracing` trace event when the `tracing` feature is enabled.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

pub mod dsa;
pub mod params;

mod error;
mod group;
mod public_key;
mod secret_key;

pub use crate::{
    error::{Error, Result},
    group::CurveGroup,
    params::{resolve, resolve_name, DomainParameters},
    public_key::PublicKey,
    secret_key::SecretKey,
};
pub use const_oid::ObjectIdentifier;
pub use rand_core;
pub use weierstrass::{self, AffinePoint, BigUint};
