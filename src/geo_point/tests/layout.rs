#[cfg(test)]
mod tests {
    use crate::{
        EncodedGeoPoint, GeoPoint, TimeOfFix, decode, encode, mask, read_field,
        geo_point::{
            layout::{LATITUDE, LONGITUDE},
            tests::{SOUTH_POLE_RECORD, init_logger, south_pole_point},
        },
    };

    ///既知の点が決まったバイト列になる
    #[test]
    fn south_pole_point_wire_format() {
        init_logger();

        let record = encode(&south_pole_point());
        assert_eq!(record, SOUTH_POLE_RECORD);
        assert_eq!(decode(&record), south_pole_point());
    }

    ///原点でも符号bitは1になる
    #[test]
    fn origin_sets_only_sign_bits() {
        let zero = TimeOfFix::default();
        let record = encode(&GeoPoint::new(0, zero, 0, zero));

        assert_eq!(record, [0x01, 0, 0, 0, 0x02, 0, 0, 0]);
        assert_eq!(read_field(&record, 0, 1).unwrap(), 1);
        assert_eq!(read_field(&record, 33, 1).unwrap(), 1);
    }

    #[test]
    fn negative_latitude_clears_sign_bit() {
        let record = encode(&south_pole_point());

        assert_eq!(read_field(&record, 33, 1).unwrap(), 0);
        assert_eq!(read_field(&record, 34, 7).unwrap(), 90);
    }

    #[test]
    fn positive_longitude_sets_sign_bit() {
        let record = encode(&south_pole_point());

        assert_eq!(read_field(&record, 0, 1).unwrap(), 1);
        assert_eq!(read_field(&record, 1, 8).unwrap(), 100);
    }

    #[test]
    fn west_longitude_and_north_latitude() {
        let time = TimeOfFix::new(1, 2, 3);
        let record = encode(&GeoPoint::new(35, time, -139, time));

        assert_eq!(LONGITUDE.sign.read(&record), 0);
        assert_eq!(LONGITUDE.degree.read(&record), 139);
        assert_eq!(LATITUDE.sign.read(&record), 1);
        assert_eq!(LATITUDE.degree.read(&record), 35);
    }

    #[test]
    fn time_fields_are_read_back_per_axis() {
        let point = GeoPoint::new(
            45,
            TimeOfFix::new(1, 2, 2047),
            -170,
            TimeOfFix::new(63, 59, 4095),
        );
        let record = encode(&point);

        assert_eq!(read_field(&record, 9, 6).unwrap(), 63);
        assert_eq!(read_field(&record, 15, 6).unwrap(), 59);
        assert_eq!(read_field(&record, 21, 12).unwrap(), 4095);
        assert_eq!(read_field(&record, 41, 6).unwrap(), 1);
        assert_eq!(read_field(&record, 47, 6).unwrap(), 2);
        assert_eq!(read_field(&record, 53, 11).unwrap(), 2047);
    }

    ///経度のミリ秒だけを変えると bit 21..33 だけが変わる
    #[test]
    fn longitude_millisecond_touches_only_its_bits() {
        let base = south_pole_point();
        let changed = GeoPoint::new(
            base.as_latitude(),
            base.as_latitude_time(),
            base.as_longitude(),
            TimeOfFix::new(20, 12, 212),
        );

        let before = EncodedGeoPoint::from(&base).to_u64_le();
        let after = EncodedGeoPoint::from(&changed).to_u64_le();
        let diff = before ^ after;

        assert_ne!(diff, 0);
        assert_eq!(diff & !(mask(12) << 21), 0);
    }

    #[test]
    fn encoded_record_conversions() {
        let encoded = EncodedGeoPoint::from_bytes(SOUTH_POLE_RECORD);

        assert_eq!(encoded.into_bytes(), SOUTH_POLE_RECORD);
        assert_eq!(EncodedGeoPoint::from(SOUTH_POLE_RECORD), encoded);
        assert_eq!(
            EncodedGeoPoint::from_u64_le(encoded.to_u64_le()),
            encoded
        );
        assert_eq!(
            EncodedGeoPoint::try_from(&SOUTH_POLE_RECORD[..]).unwrap(),
            encoded
        );
        assert_eq!(GeoPoint::from(encoded), south_pole_point());
        assert_eq!(
            encoded.to_string(),
            "01001101 00010100 00000110 10010110 10110101 00010100 00000110 11001011"
        );
    }

    #[test]
    fn encoded_record_rejects_wrong_length() {
        assert_eq!(
            EncodedGeoPoint::try_from(&[0u8; 7][..]),
            Err(crate::Error::RecordLength { len: 7 })
        );
        assert_eq!(
            EncodedGeoPoint::try_from(&[0u8; 9][..]),
            Err(crate::Error::RecordLength { len: 9 })
        );
    }
}
