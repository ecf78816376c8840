//! Wire models and client-side business rules shared across the job portal.

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::multiple_crate_versions)]

pub mod models;
pub mod rules;
