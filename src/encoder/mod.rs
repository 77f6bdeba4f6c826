//! Argument encoder for SIMD vector and matrix values
//!
//! Writes a value's exact in-memory bytes into an argument slot when the
//! value's type equals the slot's declared [`DataType`](crate::dtype::DataType),
//! and reports a typed error when it does not. No numeric conversion ever
//! happens: a `float3` is never widened to a `float4`, an `int2` is never
//! reinterpreted as a `uint2`.
//!
//! # Outcomes
//!
//! | Declared type | Value                          | Result                      |
//! |---------------|--------------------------------|-----------------------------|
//! | `Opaque`      | anything                       | `Ok`, nothing written       |
//! | `Buffer(t)`   | type `t`                       | `Ok`, `size_of` bytes written |
//! | `Buffer(t)`   | a different supported type     | `ArgumentTypeMismatch`      |
//! | `Buffer(t)`   | `Unrecognized`                 | `Ok`, nothing written       |
//!
//! `Unrecognized` being a no-op lets several encoders, each owning a disjoint
//! set of value types, be tried in turn through [`ArgumentEncoding`].
//!
//! # Example
//!
//! ```
//! use simdarg::dtype::{ArgumentType, DataType};
//! use simdarg::encoder::{SimdValue, SliceSink, encode};
//! use simdarg::simd::Float3;
//! use simdarg::Error;
//!
//! let value = SimdValue::from(Float3::new([1.0, 2.0, 3.0]));
//! let mut region = [0u8; 32];
//!
//! encode(&value, &ArgumentType::Buffer(DataType::FLOAT3), &mut SliceSink::new(&mut region, 0))?;
//! assert_eq!(&region[..16], value.as_bytes());
//!
//! let err = encode(&value, &ArgumentType::Buffer(DataType::FLOAT4), &mut SliceSink::new(&mut region, 0));
//! assert!(matches!(err, Err(Error::ArgumentTypeMismatch { provided: "float3", .. })));
//! # Ok::<(), simdarg::Error>(())
//! ```

mod sink;
mod value;

pub use sink::{ByteSink, SliceSink};
pub use value::SimdValue;

use crate::dtype::ArgumentType;
use crate::error::Result;
use log::{debug, trace};
use std::any::Any;

/// Encode one value into a slot declared as `argument`
///
/// See the [module documentation](self) for the possible outcomes. On error
/// nothing has been written to `sink`.
pub fn encode(value: &SimdValue, argument: &ArgumentType, sink: &mut dyn ByteSink) -> Result<()> {
    let Some(declared) = value::declared_data_type(argument) else {
        trace!("slot takes no raw bytes, skipping {:?}", value.type_name());
        return Ok(());
    };
    if matches!(value, SimdValue::Unrecognized) {
        trace!("no SIMD case for value, deferring slot of type {declared}");
        return Ok(());
    }
    value::dispatch(value, declared, sink).inspect_err(|err| debug!("{err}"))
}

/// An encoder for some universe of argument value types
///
/// Implementations must leave `sink` untouched and return `Ok(())` for values
/// outside their universe, so that encoders can be chained.
pub trait ArgumentEncoding {
    /// Encode `value` into a slot declared as `argument`
    fn encode_value(
        &self,
        value: &dyn Any,
        argument: &ArgumentType,
        sink: &mut dyn ByteSink,
    ) -> Result<()>;
}

/// [`ArgumentEncoding`] for the SIMD vector and matrix types
#[derive(Copy, Clone, Debug, Default)]
pub struct SimdArgumentEncoder;

impl ArgumentEncoding for SimdArgumentEncoder {
    fn encode_value(
        &self,
        value: &dyn Any,
        argument: &ArgumentType,
        sink: &mut dyn ByteSink,
    ) -> Result<()> {
        encode(&SimdValue::from_any(value), argument, sink)
    }
}
