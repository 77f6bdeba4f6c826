//! Dispatch-table generator
//!
//! Rust has no runtime "is this `Any` a `SIMD3<Float>`" switch that stays in
//! sync with a type list on its own. This module generates the value types and
//! the encoder's exhaustive dispatch table from [`CATALOG`] instead, so the
//! two can never drift apart.
//!
//! # Architecture
//!
//! ```text
//! CATALOG → dispatch_cases() → [DispatchCase] → emit_*() → { file name → source }
//! ```
//!
//! The build script calls [`generate`] and writes each file into `OUT_DIR`;
//! `simd` and `encoder` `include!` them. Nothing calls the generator at run
//! time. Output only depends on catalog content and order, so repeated runs
//! are byte-identical.
//!
//! # Legacy packed float3
//!
//! The packed three-float layout is not a catalog entry: it shares its declared
//! type with `float3` but not its memory layout, and it does not exist on tvOS.
//! [`legacy_case`] appends it after the catalog-driven cases, guarded by
//! [`LEGACY_CFG`]. It is the only case that bypasses the catalog.

use crate::catalog::{CATALOG, CatalogEntry};
use std::collections::BTreeMap;

/// Output file holding the value type definitions
pub const TYPES_FILE: &str = "simd_types.rs";

/// Output file holding `SimdValue` and the dispatch table
pub const ENCODER_FILE: &str = "simd_encoder.rs";

/// Platform predicate under which the legacy packed float3 case exists
pub const LEGACY_CFG: &str = r#"not(target_os = "tvos")"#;

const HEADER: &str = "\
// @generated by the simdarg dispatch-table generator from the type catalog.
// Do not edit: add catalog entries instead.
";

/// One arm of the generated dispatch table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchCase {
    /// `SimdValue` variant, also the name of the wrapped value type
    pub variant: String,
    /// Device-side type name reported in mismatch errors
    pub label: String,
    /// `DataType` constant the declared slot type must equal
    pub declared: String,
    /// `cfg` predicate the case is compiled under, if any
    pub cfg: Option<&'static str>,
}

impl DispatchCase {
    fn from_entry(entry: &CatalogEntry) -> Self {
        Self {
            variant: entry.type_name(),
            label: entry.token(),
            declared: entry.const_name(),
            cfg: None,
        }
    }

    fn cfg_attr(&self, indent: &str) -> String {
        match self.cfg {
            Some(cfg) => format!("{indent}#[cfg({cfg})]\n"),
            None => String::new(),
        }
    }
}

/// The hand-maintained packed float3 case
pub fn legacy_case() -> DispatchCase {
    DispatchCase {
        variant: "PackedFloat3".to_string(),
        label: "packed_float3".to_string(),
        declared: "FLOAT3".to_string(),
        cfg: Some(LEGACY_CFG),
    }
}

/// One case per catalog entry, in catalog order, then the legacy case
pub fn dispatch_cases(entries: &[CatalogEntry]) -> Vec<DispatchCase> {
    let mut cases: Vec<DispatchCase> = entries.iter().map(DispatchCase::from_entry).collect();
    cases.push(legacy_case());
    cases
}

/// Generate every source file from [`CATALOG`]
pub fn generate() -> BTreeMap<&'static str, String> {
    generate_from(CATALOG)
}

/// Generate every source file from an arbitrary list of entries
///
/// Matrix entries require their column vector entry to be present, since the
/// matrix type is built from it.
pub fn generate_from(entries: &[CatalogEntry]) -> BTreeMap<&'static str, String> {
    let cases = dispatch_cases(entries);
    let mut files = BTreeMap::new();
    files.insert(TYPES_FILE, emit_types(entries));
    files.insert(ENCODER_FILE, emit_encoder(entries, &cases));
    files
}

fn emit_types(entries: &[CatalogEntry]) -> String {
    let mut source = String::from(HEADER);
    source.push('\n');
    for entry in entries {
        let data_type = entry.data_type();
        let line = match entry.column() {
            None => format!(
                "simd_vector!({}, {}, {}, {}, {});\n",
                entry.type_name(),
                data_type.scalar().rust_type(),
                data_type.shape().column_lanes(),
                data_type.storage_lanes(),
                data_type.alignment()
            ),
            Some(column) => format!(
                "simd_matrix!({}, {}, {});\n",
                entry.type_name(),
                column.type_name(),
                data_type.shape().columns()
            ),
        };
        source.push_str(&line);
    }
    source
}

fn emit_encoder(entries: &[CatalogEntry], cases: &[DispatchCase]) -> String {
    let mut source = String::from(HEADER);
    source.push_str(&emit_constants(entries));
    source.push_str(&emit_value_enum(cases));
    source.push_str(&emit_conversions(cases));
    source.push_str(&emit_value_impl(cases));
    source.push_str(BOILERPLATE);
    source.push_str(&emit_dispatch(cases));
    source
}

fn emit_constants(entries: &[CatalogEntry]) -> String {
    let mut source = String::from("\nimpl DataType {\n");
    for entry in entries {
        source.push_str(&format!(
            "    /// `{token}`\n    pub const {name}: DataType = {expr};\n",
            token = entry.token(),
            name = entry.const_name(),
            expr = entry.data_type_expr()
        ));
    }
    source.push_str("}\n");
    source
}

fn emit_value_enum(cases: &[DispatchCase]) -> String {
    let mut source = String::from(
        r#"
/// A runtime value presented to the SIMD argument encoder
///
/// One variant per supported argument type plus the legacy packed float3
/// layout. `Unrecognized` stands for any value outside this encoder's universe.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum SimdValue {
"#,
    );
    for case in cases {
        source.push_str(&format!(
            "    /// A `{label}` value\n{cfg}    {variant}({variant}),\n",
            label = case.label,
            cfg = case.cfg_attr("    "),
            variant = case.variant
        ));
    }
    source.push_str("    /// A value this encoder has no case for\n    Unrecognized,\n}\n");
    source
}

fn emit_conversions(cases: &[DispatchCase]) -> String {
    let mut source = String::new();
    for case in cases {
        source.push_str(&format!(
            r#"
{cfg}impl From<{variant}> for SimdValue {{
    fn from(value: {variant}) -> Self {{
        SimdValue::{variant}(value)
    }}
}}
"#,
            cfg = case.cfg_attr(""),
            variant = case.variant
        ));
    }
    source
}

fn emit_value_impl(cases: &[DispatchCase]) -> String {
    let mut type_names = String::new();
    let mut data_types = String::new();
    let mut bytes = String::new();
    let mut downcasts = String::new();
    for case in cases {
        let cfg = case.cfg_attr("            ");
        let variant = &case.variant;
        type_names.push_str(&format!(
            "{cfg}            SimdValue::{variant}(_) => Some(\"{}\"),\n",
            case.label
        ));
        data_types.push_str(&format!(
            "{cfg}            SimdValue::{variant}(_) => Some(DataType::{}),\n",
            case.declared
        ));
        bytes.push_str(&format!(
            "{cfg}            SimdValue::{variant}(v) => bytemuck::bytes_of(v),\n"
        ));
        downcasts.push_str(&format!(
            "{}        if let Some(v) = value.downcast_ref::<{variant}>() {{\n            return SimdValue::{variant}(*v);\n        }}\n",
            case.cfg_attr("        ")
        ));
    }

    format!(
        r#"
impl SimdValue {{
    /// Device-side name of the value's type, `None` for `Unrecognized`
    pub fn type_name(&self) -> Option<&'static str> {{
        match self {{
{type_names}            SimdValue::Unrecognized => None,
        }}
    }}

    /// Declared data type this value can be encoded into
    pub fn data_type(&self) -> Option<DataType> {{
        match self {{
{data_types}            SimdValue::Unrecognized => None,
        }}
    }}

    /// Raw bytes of the value, empty for `Unrecognized`
    pub fn as_bytes(&self) -> &[u8] {{
        match self {{
{bytes}            SimdValue::Unrecognized => &[],
        }}
    }}

    /// Classifies a type-erased value
    ///
    /// Recognizes `SimdValue` itself and every supported value type; anything
    /// else is `Unrecognized`.
    pub fn from_any(value: &dyn Any) -> SimdValue {{
        if let Some(v) = value.downcast_ref::<SimdValue>() {{
            return *v;
        }}
{downcasts}        SimdValue::Unrecognized
    }}
}}
"#
    )
}

const BOILERPLATE: &str = r#"
/// Declared data type of a slot, `None` when the slot takes no raw bytes
#[inline]
pub(super) fn declared_data_type(argument: &ArgumentType) -> Option<DataType> {
    argument.data_type()
}

#[inline]
fn write_value<T: bytemuck::Pod>(value: &T, sink: &mut dyn ByteSink) -> Result<()> {
    sink.write_bytes(bytemuck::bytes_of(value))
}
"#;

fn emit_dispatch(cases: &[DispatchCase]) -> String {
    let mut arms = String::new();
    for case in cases {
        arms.push_str(&format!(
            r#"{cfg}        SimdValue::{variant}(v) => {{
            if declared != DataType::{declared} {{
                return Err(Error::argument_type_mismatch("{label}", declared));
            }}
            write_value(v, sink)
        }}
"#,
            cfg = case.cfg_attr("        "),
            variant = case.variant,
            declared = case.declared,
            label = case.label
        ));
    }

    format!(
        r#"
/// Writes `value` to `sink` if its type equals `declared`
pub(super) fn dispatch(value: &SimdValue, declared: DataType, sink: &mut dyn ByteSink) -> Result<()> {{
    match value {{
{arms}        SimdValue::Unrecognized => Ok(()),
    }}
}}
"#
    )
}
