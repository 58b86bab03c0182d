use escode::{encoding::*, Value};
use proptest::prelude::*;

fn tag_of(v: Value) -> u8 { encode(&v).unwrap()[0] }

#[test]
fn narrowing_boundaries() {
    assert_eq!(tag_of(Value::from(2_147_483_647i64)), 0x02);
    assert_eq!(tag_of(Value::from(-2_147_483_648i64)), 0x02);
    assert_eq!(tag_of(Value::from(2_147_483_648i64)), 0x03);
    assert_eq!(tag_of(Value::from(4_294_967_295i64)), 0x03);
    assert_eq!(tag_of(Value::from(4_294_967_296i64)), 0x04);
    assert_eq!(tag_of(Value::from(-2_147_483_649i64)), 0x04);
    assert_eq!(tag_of(Value::from(i64::max_value())), 0x04);
    assert_eq!(tag_of(Value::from(i64::max_value() as u64 + 1)), 0x05);
    assert_eq!(tag_of(Value::from(u64::max_value())), 0x05);
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 1_000, ..ProptestConfig::default() })]

    #[test]
    fn encode_decode_i64(i in proptest::num::i64::ANY) {
        let enc = encode(&Value::from(i)).unwrap();

        let dec = decode(&enc).ok();

        if dec != Some(Value::from(i)) {
            panic!("Tried encoding\n {:?}\n as \n{:x?}\n got \n{:?}\n", i, &enc[..], dec)
        }
        prop_assert_eq!(dec.and_then(|v| v.to_i64().ok()), Some(i));
    }

    #[test]
    fn encode_decode_u64(u in proptest::num::u64::ANY) {
        let enc = encode(&Value::from(u)).unwrap();

        prop_assert_eq!(decode(&enc).ok().and_then(|v| v.to_u64().ok()), Some(u));
    }

    #[test]
    fn narrowest_width(i in proptest::num::i64::ANY) {
        let len = encode(&Value::from(i)).unwrap().len();

        if i >= i32::min_value() as i64 && i <= u32::max_value() as i64 {
            prop_assert_eq!(len, 5);
        } else {
            prop_assert_eq!(len, 9);
        }
    }
}
