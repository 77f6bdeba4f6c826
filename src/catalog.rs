//! The catalog of supported argument types
//!
//! [`CATALOG`] is the single list the dispatch-table generator reads. Every
//! entry becomes one value type, one `SimdValue` variant, one `DataType`
//! constant and one dispatch case; nothing else enumerates the supported types
//! by hand. Supporting a new scalar/shape combination means adding one line
//! here.
//!
//! Each entry derives its names from one token (e.g. `float3`):
//!
//! | Derived name     | Example    | Used for                          |
//! |------------------|------------|-----------------------------------|
//! | `token()`        | `float3`   | device-side data type name        |
//! | `type_name()`    | `Float3`   | value type and `SimdValue` variant |
//! | `const_name()`   | `FLOAT3`   | `DataType` associated constant    |

use crate::dtype::{DataType, ScalarKind, Shape};

/// One supported argument type and its naming metadata
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CatalogEntry {
    data_type: DataType,
}

impl CatalogEntry {
    /// Vector entry
    pub const fn vector(scalar: ScalarKind, lanes: u8) -> Self {
        Self {
            data_type: DataType::vector(scalar, lanes),
        }
    }

    /// Matrix entry
    pub const fn matrix(scalar: ScalarKind, columns: u8, rows: u8) -> Self {
        Self {
            data_type: DataType::matrix(scalar, columns, rows),
        }
    }

    /// The data type this entry describes
    #[inline]
    pub const fn data_type(self) -> DataType {
        self.data_type
    }

    /// Device-side name, shared by the value tag and the declared type tag
    pub fn token(self) -> String {
        self.data_type.to_string()
    }

    /// Name of the Rust value type and its `SimdValue` variant
    pub fn type_name(self) -> String {
        let prefix = self.data_type.scalar().type_prefix();
        match self.data_type.shape() {
            Shape::Vector(lanes) => format!("{prefix}{lanes}"),
            Shape::Matrix { columns, rows } => format!("{prefix}{columns}x{rows}"),
        }
    }

    /// Name of the associated `DataType` constant
    pub fn const_name(self) -> String {
        self.token().to_uppercase()
    }

    /// Rust expression constructing this entry's `DataType`
    pub fn data_type_expr(self) -> String {
        let scalar = self.data_type.scalar();
        match self.data_type.shape() {
            Shape::Vector(lanes) => format!("DataType::vector(ScalarKind::{scalar:?}, {lanes})"),
            Shape::Matrix { columns, rows } => {
                format!("DataType::matrix(ScalarKind::{scalar:?}, {columns}, {rows})")
            }
        }
    }

    /// Entry of a matrix's column vector, `None` for vectors
    pub fn column(self) -> Option<CatalogEntry> {
        match self.data_type.shape() {
            Shape::Vector(_) => None,
            Shape::Matrix { rows, .. } => Some(Self::vector(self.data_type.scalar(), rows)),
        }
    }
}

/// Every supported argument type, in generation order
pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry::vector(ScalarKind::Float, 2),
    CatalogEntry::vector(ScalarKind::Float, 3),
    CatalogEntry::vector(ScalarKind::Float, 4),
    CatalogEntry::matrix(ScalarKind::Float, 2, 2),
    CatalogEntry::matrix(ScalarKind::Float, 2, 3),
    CatalogEntry::matrix(ScalarKind::Float, 2, 4),
    CatalogEntry::matrix(ScalarKind::Float, 3, 2),
    CatalogEntry::matrix(ScalarKind::Float, 3, 3),
    CatalogEntry::matrix(ScalarKind::Float, 3, 4),
    CatalogEntry::matrix(ScalarKind::Float, 4, 2),
    CatalogEntry::matrix(ScalarKind::Float, 4, 3),
    CatalogEntry::matrix(ScalarKind::Float, 4, 4),
    CatalogEntry::vector(ScalarKind::Int, 2),
    CatalogEntry::vector(ScalarKind::Int, 3),
    CatalogEntry::vector(ScalarKind::Int, 4),
    CatalogEntry::vector(ScalarKind::UInt, 2),
    CatalogEntry::vector(ScalarKind::UInt, 3),
    CatalogEntry::vector(ScalarKind::UInt, 4),
    CatalogEntry::vector(ScalarKind::Short, 2),
    CatalogEntry::vector(ScalarKind::Short, 3),
    CatalogEntry::vector(ScalarKind::Short, 4),
    CatalogEntry::vector(ScalarKind::UShort, 2),
    CatalogEntry::vector(ScalarKind::UShort, 3),
    CatalogEntry::vector(ScalarKind::UShort, 4),
    CatalogEntry::vector(ScalarKind::Char, 2),
    CatalogEntry::vector(ScalarKind::Char, 3),
    CatalogEntry::vector(ScalarKind::Char, 4),
    CatalogEntry::vector(ScalarKind::UChar, 2),
    CatalogEntry::vector(ScalarKind::UChar, 3),
    CatalogEntry::vector(ScalarKind::UChar, 4),
];

// Every catalog shape must be one the device declares.
const _: () = {
    let mut i = 0;
    while i < CATALOG.len() {
        assert!(CATALOG[i].data_type.shape().is_valid());
        i += 1;
    }
};
