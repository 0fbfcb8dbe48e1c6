//! The wire-format leap-second catalog.
//!
//! Field numbers are part of the wire contract and never change. The
//! message follows proto2 presence rules: `end_jdn` is optional on the
//! wire so a catalog that omits it is distinguishable from one that sets
//! it to zero, and the repeated fields are unpacked.

/// Serialized catalog of leap seconds.
///
/// Each leap JDN labels the month-end day whose final smeared second is
/// inserted (positive) or removed (negative); `end_jdn` labels the day
/// before the last noon the table covers.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LeapTableProto {
    /// JDNs of days ending with an inserted leap second.
    #[prost(int32, repeated, packed = "false", tag = "1")]
    pub positive_leaps: Vec<i32>,

    /// JDNs of days ending with a removed leap second.
    #[prost(int32, repeated, packed = "false", tag = "2")]
    pub negative_leaps: Vec<i32>,

    /// The table asserts leap-second content through noon of `end_jdn + 1`.
    #[prost(int32, optional, tag = "3")]
    pub end_jdn: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use prost::Message;

    #[test]
    fn test_encode_decode_round_trip() {
        let proto = LeapTableProto {
            positive_leaps: vec![2441499, 2441683],
            negative_leaps: vec![2442048],
            end_jdn: Some(2442412),
        };
        let bytes = proto.encode_to_vec();
        assert_eq!(LeapTableProto::decode(bytes.as_slice()).unwrap(), proto);
    }

    #[test]
    fn test_empty_message_has_no_end_jdn() {
        let proto = LeapTableProto::decode(&[][..]).unwrap();
        assert!(proto.positive_leaps.is_empty());
        assert!(proto.negative_leaps.is_empty());
        assert_eq!(proto.end_jdn, None);
        assert!(proto.encode_to_vec().is_empty());
    }

    #[test]
    fn test_field_numbers_are_stable() {
        // end_jdn is field 3: varint wire type, tag byte 3 << 3 | 0.
        let proto = LeapTableProto {
            positive_leaps: vec![],
            negative_leaps: vec![],
            end_jdn: Some(1),
        };
        assert_eq!(proto.encode_to_vec(), vec![0x18, 0x01]);

        // positive_leaps is field 1, unpacked.
        let proto = LeapTableProto {
            positive_leaps: vec![1, 2],
            negative_leaps: vec![],
            end_jdn: None,
        };
        assert_eq!(proto.encode_to_vec(), vec![0x08, 0x01, 0x08, 0x02]);
    }
}
