use log::trace;

use crate::{
    geo_point::{
        GeoPoint,
        encode::EncodedGeoPoint,
        layout::{AxisLayout, LATITUDE, LONGITUDE, RECORD_LEN},
    },
    time_of_fix::TimeOfFix,
};

/// 8byte レコードを [`GeoPoint`] にデコードする。
///
/// 符号bitが `0` の場合は度の値を負として復元する。
///
/// ```
/// # use kasane_geopoint::{TimeOfFix, decode};
/// let point = decode(&[0x4d, 0x14, 0x06, 0x96, 0xb5, 0x14, 0x06, 0xcb]);
///
/// assert_eq!(point.as_latitude(), -90);
/// assert_eq!(point.as_longitude(), 100);
/// assert_eq!(point.as_latitude_time(), TimeOfFix::new(20, 12, 211));
/// ```
pub fn decode(record: &[u8; RECORD_LEN]) -> GeoPoint {
    let (longitude, longitude_time) = read_axis(record, &LONGITUDE);
    let (latitude, latitude_time) = read_axis(record, &LATITUDE);

    let point = GeoPoint::new(latitude, latitude_time, longitude, longitude_time);
    trace!("decode {:02x?} -> {:?}", record, point);
    point
}

///1軸分のフィールドを読み取る
fn read_axis(record: &[u8; RECORD_LEN], axis: &AxisLayout) -> (i16, TimeOfFix) {
    // 度は最大 8bit、時刻は最大 12bit なので縮小変換で値は失われない
    let magnitude = axis.degree.read(record) as i16;
    let degree = if axis.sign.read(record) == 0 {
        -magnitude
    } else {
        magnitude
    };

    let time = TimeOfFix::new(
        axis.minute.read(record) as u16,
        axis.second.read(record) as u16,
        axis.millisecond.read(record) as u16,
    );

    (degree, time)
}

impl From<EncodedGeoPoint> for GeoPoint {
    fn from(encoded: EncodedGeoPoint) -> Self {
        decode(encoded.as_bytes())
    }
}
