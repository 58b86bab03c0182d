use bytes::Bytes;
use escode::{vecmap::ValueMap, Value};
use proptest::prelude::*;

/// arbitrary Bytes for use with proptest
pub fn arb_bs() -> impl Strategy<Value = Bytes> {
    prop::collection::vec(any::<u8>(), 0..64).prop_map(Bytes::from)
}

/// arbitrary Bytes without `0xfe` or `0xff`, whose index keys order like the raw bytes
pub fn arb_index_bs() -> impl Strategy<Value = Bytes> {
    prop::collection::vec(0u8..=0xfd, 0..16).prop_map(Bytes::from)
}

/// arbitrary scalar that can go into an index tuple
pub fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        // integers
        any::<i32>().prop_map(Value::from),
        any::<u32>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        (0..=i64::max_value() as u64).prop_map(Value::from),
        // floats
        any::<f64>().prop_map(Value::from),
        // strings
        arb_bs().prop_map(Value::from),
        ".{0,32}".prop_map(Value::from),
    ]
}

/// arbitrary Value for use with proptest
pub fn arb_value() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        arb_scalar(),
        any::<()>().prop_map(Value::from),
        // 8-bit
        any::<u8>().prop_map(Value::from),
        any::<i8>().prop_map(Value::from),
        // 16-bit
        any::<u16>().prop_map(Value::from),
        any::<i16>().prop_map(Value::from),
        // full 64-bit range
        any::<u64>().prop_map(Value::from),
        any::<f32>().prop_map(Value::from),
    ];
    leaf.prop_recursive(
        8,  // max depth
        64, // max nodes
        10, // max items per collection
        |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..10).prop_map(Value::from),
                prop::collection::vec((inner.clone(), inner), 0..10)
                    .prop_map(|kvs| Value::from(kvs.into_iter().collect::<ValueMap>()))
            ]
        },
    )
}
