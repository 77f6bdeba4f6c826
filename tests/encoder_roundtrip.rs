//! Integration tests for the single-slot argument encoder
//!
//! Exercises every supported value type against every declared type.

mod common;

use common::{assert_written_prefix, declared_types, patterned, sample_values};
use simdarg::catalog::CATALOG;
use simdarg::dtype::{ArgumentType, DataType};
use simdarg::encoder::{SimdValue, SliceSink, encode};
use simdarg::simd::{Float3, Float4, Float4x4};
use simdarg::Error;

const FILL: u8 = 0xAA;

#[test]
fn test_exact_match_writes_value_bytes_only() {
    for value in sample_values() {
        let name = value.type_name().unwrap();
        let declared = ArgumentType::Buffer(value.data_type().unwrap());
        let expected = value.as_bytes();
        let mut region = vec![FILL; expected.len() + 16];

        let mut sink = SliceSink::new(&mut region, 0);
        encode(&value, &declared, &mut sink).unwrap();
        assert_eq!(sink.bytes_written(), expected.len(), "{name}");

        assert_written_prefix(&region, expected, FILL, name);
    }
}

#[test]
fn test_exact_match_at_offset() {
    for value in sample_values() {
        let name = value.type_name().unwrap();
        let declared = ArgumentType::Buffer(value.data_type().unwrap());
        let expected = value.as_bytes();
        let mut region = vec![FILL; expected.len() + 24];

        encode(&value, &declared, &mut SliceSink::new(&mut region, 8)).unwrap();

        assert!(region[..8].iter().all(|&b| b == FILL), "{name}: prefix modified");
        assert_written_prefix(&region[8..], expected, FILL, name);
    }
}

#[test]
fn test_every_mismatched_pair_is_rejected() {
    let values = sample_values();
    let declared_types = declared_types(&values);

    for value in &values {
        let provided = value.type_name().unwrap();
        for &declared in &declared_types {
            let mut region = vec![FILL; 80];
            let result = encode(
                value,
                &ArgumentType::Buffer(declared),
                &mut SliceSink::new(&mut region, 0),
            );

            if value.data_type() == Some(declared) {
                assert!(result.is_ok(), "{provided} into {declared}: {result:?}");
                continue;
            }
            assert_eq!(
                result,
                Err(Error::argument_type_mismatch(provided, declared)),
                "{provided} into {declared}"
            );
            assert!(
                region.iter().all(|&b| b == FILL),
                "{provided} into {declared}: destination modified"
            );
        }
    }
}

#[test]
fn test_opaque_slot_is_noop_for_every_value() {
    for value in sample_values() {
        let mut region = [FILL; 64];
        encode(&value, &ArgumentType::Opaque, &mut SliceSink::new(&mut region, 0)).unwrap();
        assert!(region.iter().all(|&b| b == FILL));
    }
}

#[test]
fn test_unrecognized_is_noop_for_every_declared_type() {
    for declared in declared_types(&sample_values()) {
        let mut region = [FILL; 64];
        encode(
            &SimdValue::Unrecognized,
            &ArgumentType::Buffer(declared),
            &mut SliceSink::new(&mut region, 0),
        )
        .unwrap();
        assert!(region.iter().all(|&b| b == FILL), "{declared}");
    }
}

#[test]
fn test_identity_float4x4_into_float4x4_slot() {
    let identity = Float4x4::from_columns([
        Float4::new([1.0, 0.0, 0.0, 0.0]),
        Float4::new([0.0, 1.0, 0.0, 0.0]),
        Float4::new([0.0, 0.0, 1.0, 0.0]),
        Float4::new([0.0, 0.0, 0.0, 1.0]),
    ]);
    let mut region = [FILL; 96];

    encode(
        &SimdValue::from(identity),
        &ArgumentType::Buffer(DataType::FLOAT4X4),
        &mut SliceSink::new(&mut region, 0),
    )
    .unwrap();

    let floats: &[f32] = bytemuck::cast_slice(&region[..64]);
    for column in 0..4 {
        for row in 0..4 {
            let expected = if column == row { 1.0 } else { 0.0 };
            assert_eq!(floats[column * 4 + row], expected);
        }
    }
    assert!(region[64..].iter().all(|&b| b == FILL));
}

#[test]
fn test_float3_into_float4_slot_is_rejected() {
    let value = SimdValue::from(Float3::new([1.0, 2.0, 3.0]));
    let mut region = [FILL; 32];

    let err = encode(
        &value,
        &ArgumentType::Buffer(DataType::FLOAT4),
        &mut SliceSink::new(&mut region, 0),
    )
    .unwrap_err();

    match err {
        Error::ArgumentTypeMismatch { provided, expected } => {
            assert_eq!(provided, "float3");
            assert_eq!(expected, DataType::FLOAT4);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(region, [FILL; 32]);
}

#[test]
fn test_short_destination_is_rejected_untouched() {
    let value = SimdValue::from(patterned::<Float4x4>());
    let mut region = [FILL; 48];

    let err = encode(
        &value,
        &ArgumentType::Buffer(DataType::FLOAT4X4),
        &mut SliceSink::new(&mut region, 0),
    )
    .unwrap_err();

    assert_eq!(err, Error::destination_too_small(0, 64, 48));
    assert_eq!(region, [FILL; 48]);
}

#[test]
fn test_samples_cover_the_catalog() {
    let sampled = declared_types(&sample_values());
    let catalog: Vec<DataType> = CATALOG.iter().map(|e| e.data_type()).collect();
    assert_eq!(sampled, catalog);
}
