//! # simdarg
//!
//! **Byte-exact encoding of SIMD vector and matrix values into GPU argument slots.**
//!
//! Device functions declare each argument slot with a data type such as
//! `float3` or `float4x4`. simdarg writes a host value's raw bytes into such a
//! slot only when the value's type is exactly the declared type, and reports a
//! typed error otherwise. It never converts, widens or reinterprets.
//!
//! ## Pieces
//!
//! - [`simd`]: value types in device memory layout (`Float3`, `UChar4`, `Float4x4`, ...)
//! - [`encoder`]: the single-slot encoder and the [`ArgumentEncoding`](encoder::ArgumentEncoding) chaining seam
//! - [`arguments`]: encoding a whole argument table through a chain of encoders
//! - [`buffer`]: typed zero-copy views over shared byte regions
//! - [`catalog`]: the list of supported argument types
//!
//! The value types and the encoder's dispatch table are generated at build
//! time from a single type catalog, so they cannot drift apart.
//!
//! ## Quick Start
//!
//! ```
//! use simdarg::prelude::*;
//!
//! let value = SimdValue::from(Float4::new([1.0, 0.0, 0.0, 1.0]));
//! let mut slot: Vec<u8> = Vec::new();
//! encode(&value, &ArgumentType::Buffer(DataType::FLOAT4), &mut slot)?;
//! assert_eq!(slot.len(), 16);
//! # Ok::<(), simdarg::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `codegen`: exposes the dispatch-table generator (`codegen`) for external
//!   build tooling

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod arguments;
pub mod buffer;
pub mod catalog;
#[cfg(any(test, feature = "codegen"))]
pub mod codegen;
pub mod dtype;
pub mod encoder;
pub mod error;
pub mod simd;

pub use error::{Error, Result};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::arguments::{ArgumentDescriptor, ArgumentSink, encode_arguments};
    pub use crate::buffer::{DataBuffer, TypedView, with_typed_view};
    pub use crate::dtype::{ArgumentType, DataType, ScalarKind, Shape};
    pub use crate::encoder::{
        ArgumentEncoding, ByteSink, SimdArgumentEncoder, SimdValue, SliceSink, encode,
    };
    pub use crate::error::{Error, Result};
    pub use crate::simd::*;
}
