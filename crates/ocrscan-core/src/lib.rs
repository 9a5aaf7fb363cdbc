#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod error;
#[doc(hidden)]
pub mod prelude;

pub mod ocr;

pub use crate::error::{BoxedError, Error, ErrorKind, Result};
