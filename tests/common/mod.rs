//! Common test utilities
#![allow(dead_code)]

use bytemuck::Pod;
use simdarg::dtype::DataType;
use simdarg::encoder::SimdValue;
use simdarg::simd::*;

/// A value of `T` whose byte `i` is `i + 1`, padding lanes included
pub fn patterned<T: Pod>() -> T {
    let mut value = T::zeroed();
    for (i, byte) in bytemuck::bytes_of_mut(&mut value).iter_mut().enumerate() {
        *byte = (i + 1) as u8;
    }
    value
}

/// One patterned value of every supported type, legacy packed float3 last
pub fn sample_values() -> Vec<SimdValue> {
    let mut values = vec![
        SimdValue::from(patterned::<Float2>()),
        SimdValue::from(patterned::<Float3>()),
        SimdValue::from(patterned::<Float4>()),
        SimdValue::from(patterned::<Float2x2>()),
        SimdValue::from(patterned::<Float2x3>()),
        SimdValue::from(patterned::<Float2x4>()),
        SimdValue::from(patterned::<Float3x2>()),
        SimdValue::from(patterned::<Float3x3>()),
        SimdValue::from(patterned::<Float3x4>()),
        SimdValue::from(patterned::<Float4x2>()),
        SimdValue::from(patterned::<Float4x3>()),
        SimdValue::from(patterned::<Float4x4>()),
        SimdValue::from(patterned::<Int2>()),
        SimdValue::from(patterned::<Int3>()),
        SimdValue::from(patterned::<Int4>()),
        SimdValue::from(patterned::<UInt2>()),
        SimdValue::from(patterned::<UInt3>()),
        SimdValue::from(patterned::<UInt4>()),
        SimdValue::from(patterned::<Short2>()),
        SimdValue::from(patterned::<Short3>()),
        SimdValue::from(patterned::<Short4>()),
        SimdValue::from(patterned::<UShort2>()),
        SimdValue::from(patterned::<UShort3>()),
        SimdValue::from(patterned::<UShort4>()),
        SimdValue::from(patterned::<Char2>()),
        SimdValue::from(patterned::<Char3>()),
        SimdValue::from(patterned::<Char4>()),
        SimdValue::from(patterned::<UChar2>()),
        SimdValue::from(patterned::<UChar3>()),
        SimdValue::from(patterned::<UChar4>()),
    ];
    #[cfg(not(target_os = "tvos"))]
    values.push(SimdValue::from(patterned::<PackedFloat3>()));
    values
}

/// Declared data types of `values`, deduplicated, in first-seen order
pub fn declared_types(values: &[SimdValue]) -> Vec<DataType> {
    let mut types: Vec<DataType> = Vec::new();
    for data_type in values.iter().filter_map(SimdValue::data_type) {
        if !types.contains(&data_type) {
            types.push(data_type);
        }
    }
    types
}

/// Assert `region` starts with `expected` and every later byte equals `fill`
pub fn assert_written_prefix(region: &[u8], expected: &[u8], fill: u8, msg: &str) {
    assert!(region.len() >= expected.len(), "{}: region too short", msg);
    assert_eq!(&region[..expected.len()], expected, "{}: written bytes differ", msg);
    for (i, byte) in region[expected.len()..].iter().enumerate() {
        assert_eq!(
            *byte,
            fill,
            "{}: byte {} after the value was modified",
            msg,
            expected.len() + i
        );
    }
}
