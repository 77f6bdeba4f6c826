//! Data type system for device argument slots
//!
//! This module provides [`ScalarKind`], [`Shape`] and their combination
//! [`DataType`], which identifies one supported vector or matrix argument type,
//! together with [`ArgumentType`], the resolved declaration of an argument slot.
//!
//! # Memory Layout
//!
//! Values follow the device's SIMD layout rules rather than Rust's:
//!
//! | Shape            | Size                        | Alignment        |
//! |------------------|-----------------------------|------------------|
//! | `Vector(2)`      | 2 × scalar                  | size             |
//! | `Vector(3)`      | 4 × scalar (one pad lane)   | size             |
//! | `Vector(4)`      | 4 × scalar                  | size             |
//! | `Matrix { c, r }`| c × size of `Vector(r)`     | `Vector(r)` size |
//!
//! So `float3` is 16 bytes, `float3x3` is 48 bytes and `char3` is 4 bytes.
//!
//! This module has no dependencies on the rest of the crate: the build script
//! compiles it alongside the catalog to generate the dispatch table.

use std::fmt;

/// Element type of a vector or matrix argument
///
/// # Discriminant Values
///
/// - Floats: 0-9 (Float=0)
/// - Signed ints: 10-19 (Int=10, Short=11, Char=12)
/// - Unsigned ints: 20-29 (UInt=20, UShort=21, UChar=22)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ScalarKind {
    /// 32-bit floating point
    Float = 0,
    /// 32-bit signed integer
    Int = 10,
    /// 16-bit signed integer
    Short = 11,
    /// 8-bit signed integer
    Char = 12,
    /// 32-bit unsigned integer
    UInt = 20,
    /// 16-bit unsigned integer
    UShort = 21,
    /// 8-bit unsigned integer
    UChar = 22,
}

impl ScalarKind {
    /// Size of one scalar in bytes
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            Self::Float | Self::Int | Self::UInt => 4,
            Self::Short | Self::UShort => 2,
            Self::Char | Self::UChar => 1,
        }
    }

    /// Device-side spelling (e.g. "float", "ushort")
    pub const fn device_name(self) -> &'static str {
        match self {
            Self::Float => "float",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Short => "short",
            Self::UShort => "ushort",
            Self::Char => "char",
            Self::UChar => "uchar",
        }
    }

    /// Rust primitive with the same size and bit layout
    pub const fn rust_type(self) -> &'static str {
        match self {
            Self::Float => "f32",
            Self::Int => "i32",
            Self::UInt => "u32",
            Self::Short => "i16",
            Self::UShort => "u16",
            Self::Char => "i8",
            Self::UChar => "u8",
        }
    }

    /// Prefix of the Rust value type names built from this scalar (e.g. "UChar")
    pub const fn type_prefix(self) -> &'static str {
        match self {
            Self::Float => "Float",
            Self::Int => "Int",
            Self::UInt => "UInt",
            Self::Short => "Short",
            Self::UShort => "UShort",
            Self::Char => "Char",
            Self::UChar => "UChar",
        }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.device_name())
    }
}

/// Dimensionality of an argument value
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// A vector of 2, 3 or 4 lanes
    Vector(u8),
    /// A column-major matrix with 2-4 columns of 2-4 rows each
    Matrix {
        /// Number of column vectors
        columns: u8,
        /// Lanes per column
        rows: u8,
    },
}

impl Shape {
    /// Lanes in one column (the whole vector for `Vector`)
    #[inline]
    pub const fn column_lanes(self) -> u8 {
        match self {
            Self::Vector(lanes) => lanes,
            Self::Matrix { rows, .. } => rows,
        }
    }

    /// Number of columns (1 for `Vector`)
    #[inline]
    pub const fn columns(self) -> u8 {
        match self {
            Self::Vector(_) => 1,
            Self::Matrix { columns, .. } => columns,
        }
    }

    /// Returns true if both dimensions are in `2..=4`
    pub const fn is_valid(self) -> bool {
        match self {
            Self::Vector(lanes) => lanes >= 2 && lanes <= 4,
            Self::Matrix { columns, rows } => {
                columns >= 2 && columns <= 4 && rows >= 2 && rows <= 4
            }
        }
    }
}

/// Lanes a vector occupies in memory: three-lane vectors carry one pad lane
#[inline]
pub const fn storage_lanes(lanes: u8) -> usize {
    if lanes == 3 { 4 } else { lanes as usize }
}

/// A supported argument data type: a scalar kind combined with a shape
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DataType {
    scalar: ScalarKind,
    shape: Shape,
}

impl DataType {
    /// Vector of `lanes` scalars
    pub const fn vector(scalar: ScalarKind, lanes: u8) -> Self {
        Self {
            scalar,
            shape: Shape::Vector(lanes),
        }
    }

    /// Matrix of `columns` column vectors with `rows` lanes each
    pub const fn matrix(scalar: ScalarKind, columns: u8, rows: u8) -> Self {
        Self {
            scalar,
            shape: Shape::Matrix { columns, rows },
        }
    }

    /// Element type
    #[inline]
    pub const fn scalar(self) -> ScalarKind {
        self.scalar
    }

    /// Dimensionality
    #[inline]
    pub const fn shape(self) -> Shape {
        self.shape
    }

    /// Lanes one column occupies in memory, including padding
    #[inline]
    pub const fn storage_lanes(self) -> usize {
        storage_lanes(self.shape.column_lanes())
    }

    /// Required alignment in bytes
    #[inline]
    pub const fn alignment(self) -> usize {
        self.scalar.size_in_bytes() * self.storage_lanes()
    }

    /// Size of one value in bytes, padding lanes included
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        self.alignment() * self.shape.columns() as usize
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.shape {
            Shape::Vector(lanes) => write!(f, "{}{}", self.scalar, lanes),
            Shape::Matrix { columns, rows } => write!(f, "{}{}x{}", self.scalar, columns, rows),
        }
    }
}

/// Resolved declaration of a device function argument slot
///
/// Produced by an external argument-table resolver. `Opaque` covers slots
/// whose data type cannot be resolved and slots that are not plain data
/// buffers (textures, samplers, ...).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArgumentType {
    /// A data buffer holding one value of the given type
    Buffer(DataType),
    /// Anything the encoder cannot write raw bytes into
    Opaque,
}

impl ArgumentType {
    /// The declared data type, if this is a data buffer slot
    #[inline]
    pub const fn data_type(self) -> Option<DataType> {
        match self {
            Self::Buffer(data_type) => Some(data_type),
            Self::Opaque => None,
        }
    }
}

impl From<Option<DataType>> for ArgumentType {
    fn from(data_type: Option<DataType>) -> Self {
        data_type.map_or(Self::Opaque, Self::Buffer)
    }
}

impl From<DataType> for ArgumentType {
    fn from(data_type: DataType) -> Self {
        Self::Buffer(data_type)
    }
}
