use clockbound_proto::protocol::{CompareResponse, FromBytes, NowResponse, Request, ToBytes};
use clockbound_proto::unix_time::{Instant, UnixNanos};
use proptest::prelude::*;

proptest! {
    /// Every wire value decodes to an instant that encodes back to the same value.
    #[test]
    fn unix_nanos_instant_roundtrip(nanos in any::<u64>()) {
        let instant = Instant::from(UnixNanos(nanos));
        prop_assert!(instant.secs() >= 0);
        prop_assert!(instant.subsec_nanos() >= 0);
        prop_assert_eq!(UnixNanos::try_from(instant), Ok(UnixNanos(nanos)));
    }

    /// The midpoint never leaves the bound and never overflows.
    #[test]
    fn midpoint_within_bound(a in any::<u64>(), b in any::<u64>()) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let mid = UnixNanos::midpoint(UnixNanos(lo), UnixNanos(hi));
        prop_assert!(lo <= mid.0 && mid.0 <= hi);
        prop_assert!(hi - mid.0 <= mid.0 - lo + 1);
    }

    /// Any datagram either decodes as a Now response or fails; only 20 bytes succeed.
    #[test]
    fn now_response_length_validation(bytes in prop::collection::vec(any::<u8>(), 0..40)) {
        let result = NowResponse::decode_exact(&bytes);
        prop_assert_eq!(result.is_ok(), bytes.len() == 20);
    }

    /// Before/After results only depend on whether byte 4 is non-zero.
    #[test]
    fn compare_result_is_nonzero_byte(bytes in prop::collection::vec(any::<u8>(), 5..16)) {
        let (response, consumed) = CompareResponse::from_bytes(&bytes).unwrap();
        prop_assert_eq!(consumed, 5);
        prop_assert_eq!(response.result, bytes[4] != 0);
        prop_assert_eq!(response.header.unsynchronized, bytes[2] != 0);
    }

    /// Before requests carry the big-endian encoding of the queried instant.
    #[test]
    fn before_request_layout(nanos in any::<u64>()) {
        let mut buf = [0u8; 12];
        prop_assert_eq!(Request::Before(UnixNanos(nanos)).to_bytes(&mut buf), Ok(12));
        prop_assert_eq!(&buf[..4], &[1u8, 2, 0, 0][..]);
        prop_assert_eq!(&buf[4..], &nanos.to_be_bytes()[..]);
        prop_assert_eq!(Request::from_bytes(&buf), Ok((Request::Before(UnixNanos(nanos)), 12)));
    }
}
