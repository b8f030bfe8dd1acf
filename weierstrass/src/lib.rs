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

pub mod utils;

mod affine;
mod curve;
mod error;
mod field;
mod group;
mod projective;

pub use crate::{
    affine::AffinePoint,
    curve::Curve,
    error::{Error, Result},
    field::PrimeField,
    group::Group,
    projective::ProjectivePoint,
};
pub use num_bigint::{self, BigUint};
pub use rand_core;
