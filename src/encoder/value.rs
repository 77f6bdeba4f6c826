//! `SimdValue`, the `DataType` constants and the dispatch table
//!
//! Everything below the imports is generated from the type catalog by
//! `crate::codegen` during the build.

use super::sink::ByteSink;
use crate::dtype::{ArgumentType, DataType, ScalarKind};
use crate::error::{Error, Result};
use crate::simd::*;
use std::any::Any;

include!(concat!(env!("OUT_DIR"), "/simd_encoder.rs"));
