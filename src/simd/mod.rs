//! SIMD value types in device memory layout
//!
//! One type per catalog entry (`Float2` … `Float4x4`, `Int2` … `UChar4`) is
//! generated at build time from the type catalog. All of them are `#[repr(C)]`,
//! [`Pod`](bytemuck::Pod), and laid out exactly like the device-side type:
//! three-lane vectors carry a zeroed fourth lane and are aligned like
//! four-lane vectors, matrices are arrays of column vectors.
//!
//! ```
//! use simdarg::simd::{Float3, Float4x4, Float4};
//!
//! assert_eq!(std::mem::size_of::<Float3>(), 16);
//! assert_eq!(std::mem::size_of::<Float4x4>(), 64);
//!
//! let v = Float3::new([1.0, 2.0, 3.0]);
//! assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
//!
//! let identity = Float4x4::from_columns([
//!     Float4::new([1.0, 0.0, 0.0, 0.0]),
//!     Float4::new([0.0, 1.0, 0.0, 0.0]),
//!     Float4::new([0.0, 0.0, 1.0, 0.0]),
//!     Float4::new([0.0, 0.0, 0.0, 1.0]),
//! ]);
//! assert_eq!(identity.column(3).to_array(), [0.0, 0.0, 0.0, 1.0]);
//! ```

/// Defines a vector type: name, scalar, lanes, lanes in memory, alignment
macro_rules! simd_vector {
    ($name:ident, $scalar:ty, $lanes:tt, $storage:tt, $align:tt) => {
        #[doc = concat!(
            "Vector of ", stringify!($lanes), " `", stringify!($scalar),
            "` lanes (", stringify!($align), "-byte aligned)"
        )]
        #[repr(C, align($align))]
        #[derive(Copy, Clone, Debug, Default, PartialEq)]
        pub struct $name([$scalar; $storage]);

        impl $name {
            /// Creates a vector from its lanes, zeroing any padding lane
            pub const fn new(lanes: [$scalar; $lanes]) -> Self {
                let mut storage = [0 as $scalar; $storage];
                let mut i = 0;
                while i < $lanes {
                    storage[i] = lanes[i];
                    i += 1;
                }
                Self(storage)
            }

            /// Creates a vector with every lane set to `value`
            pub const fn splat(value: $scalar) -> Self {
                Self::new([value; $lanes])
            }

            /// The meaningful lanes
            pub fn to_array(self) -> [$scalar; $lanes] {
                let mut lanes = [0 as $scalar; $lanes];
                lanes.copy_from_slice(&self.0[..$lanes]);
                lanes
            }
        }

        impl From<[$scalar; $lanes]> for $name {
            fn from(lanes: [$scalar; $lanes]) -> Self {
                Self::new(lanes)
            }
        }

        // SAFETY: `repr(C)` around a scalar array whose size is a multiple of
        // the alignment, so there are no padding bytes and any bit pattern is valid.
        unsafe impl bytemuck::Zeroable for $name {}
        unsafe impl bytemuck::Pod for $name {}
    };
}

/// Defines a column-major matrix type: name, column vector type, columns
macro_rules! simd_matrix {
    ($name:ident, $column:ident, $columns:tt) => {
        #[doc = concat!(
            "Matrix of ", stringify!($columns), " `", stringify!($column), "` columns"
        )]
        #[repr(C)]
        #[derive(Copy, Clone, Debug, Default, PartialEq)]
        pub struct $name([$column; $columns]);

        impl $name {
            /// Creates a matrix from its columns
            pub const fn from_columns(columns: [$column; $columns]) -> Self {
                Self(columns)
            }

            /// The columns
            pub fn columns(self) -> [$column; $columns] {
                self.0
            }

            /// Column `index`; panics if `index >= COLUMNS`
            pub fn column(self, index: usize) -> $column {
                self.0[index]
            }
        }

        // SAFETY: `repr(C)` array of padding-free `Pod` columns.
        unsafe impl bytemuck::Zeroable for $name {}
        unsafe impl bytemuck::Pod for $name {}
    };
}

include!(concat!(env!("OUT_DIR"), "/simd_types.rs"));

/// Three tightly packed `f32`s (12 bytes, 4-byte aligned)
///
/// The device's legacy packed layout: same declared type as [`Float3`] but
/// without the pad lane. Not available on tvOS.
#[cfg(not(target_os = "tvos"))]
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PackedFloat3 {
    /// First lane
    pub x: f32,
    /// Second lane
    pub y: f32,
    /// Third lane
    pub z: f32,
}

#[cfg(not(target_os = "tvos"))]
impl PackedFloat3 {
    /// Creates a packed vector
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

#[cfg(not(target_os = "tvos"))]
impl From<Float3> for PackedFloat3 {
    fn from(v: Float3) -> Self {
        let [x, y, z] = v.to_array();
        Self { x, y, z }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtype::DataType;
    use std::mem::{align_of, size_of};

    #[test]
    fn test_sizes_match_data_types() {
        assert_eq!(size_of::<Float2>(), DataType::FLOAT2.size_in_bytes());
        assert_eq!(size_of::<Float3>(), DataType::FLOAT3.size_in_bytes());
        assert_eq!(size_of::<Float4>(), DataType::FLOAT4.size_in_bytes());
        assert_eq!(size_of::<Float2x3>(), DataType::FLOAT2X3.size_in_bytes());
        assert_eq!(size_of::<Float3x3>(), DataType::FLOAT3X3.size_in_bytes());
        assert_eq!(size_of::<Float4x2>(), DataType::FLOAT4X2.size_in_bytes());
        assert_eq!(size_of::<Float4x4>(), DataType::FLOAT4X4.size_in_bytes());
        assert_eq!(size_of::<Short3>(), DataType::SHORT3.size_in_bytes());
        assert_eq!(size_of::<Char3>(), DataType::CHAR3.size_in_bytes());
        assert_eq!(size_of::<UChar2>(), DataType::UCHAR2.size_in_bytes());
    }

    #[test]
    fn test_alignments_match_data_types() {
        assert_eq!(align_of::<Float3>(), DataType::FLOAT3.alignment());
        assert_eq!(align_of::<Float2x4>(), DataType::FLOAT2X4.alignment());
        assert_eq!(align_of::<Float3x2>(), DataType::FLOAT3X2.alignment());
        assert_eq!(align_of::<UShort3>(), DataType::USHORT3.alignment());
        assert_eq!(align_of::<UChar4>(), DataType::UCHAR4.alignment());
    }

    #[test]
    fn test_three_lane_padding_is_zero() {
        let v = Int3::new([-1, -2, -3]);
        let lanes: &[i32] = bytemuck::cast_slice(bytemuck::bytes_of(&v));
        assert_eq!(lanes, &[-1, -2, -3, 0]);
        assert_eq!(v.to_array(), [-1, -2, -3]);
    }

    #[test]
    fn test_splat_and_from_array() {
        assert_eq!(UShort4::splat(7).to_array(), [7, 7, 7, 7]);
        assert_eq!(Char2::from([1, -1]), Char2::new([1, -1]));
    }

    #[test]
    fn test_matrix_is_column_major() {
        let m = Float2x3::from_columns([Float3::new([1.0, 2.0, 3.0]), Float3::new([4.0, 5.0, 6.0])]);
        let floats: &[f32] = bytemuck::cast_slice(bytemuck::bytes_of(&m));
        assert_eq!(floats, &[1.0, 2.0, 3.0, 0.0, 4.0, 5.0, 6.0, 0.0]);
        assert_eq!(m.column(1).to_array(), [4.0, 5.0, 6.0]);
    }

    #[cfg(not(target_os = "tvos"))]
    #[test]
    fn test_packed_float3_has_no_pad_lane() {
        assert_eq!(size_of::<PackedFloat3>(), 12);
        assert_eq!(align_of::<PackedFloat3>(), 4);
        let packed = PackedFloat3::from(Float3::new([1.0, 2.0, 3.0]));
        assert_eq!(packed, PackedFloat3::new(1.0, 2.0, 3.0));
    }
}
