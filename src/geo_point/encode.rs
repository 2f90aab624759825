use std::fmt;

use log::trace;

use crate::{
    error::Error,
    geo_point::{
        GeoPoint,
        layout::{AxisLayout, LATITUDE, LONGITUDE, RECORD_LEN},
    },
    time_of_fix::TimeOfFix,
};

/// [`GeoPoint`] を 8byte レコードにエンコードする。
///
/// 全bitが `0` のレコードから始めて、各フィールドを書き込む。
/// 度の絶対値や時刻がフィールド幅を超える場合は下位bitのみが残る（エラーにはならない）。
///
/// ```
/// # use kasane_geopoint::{GeoPoint, TimeOfFix, encode};
/// let time = TimeOfFix::new(20, 12, 211);
/// let point = GeoPoint::new(-90, time, 100, time);
///
/// assert_eq!(encode(&point), [0x4d, 0x14, 0x06, 0x96, 0xb5, 0x14, 0x06, 0xcb]);
/// ```
pub fn encode(point: &GeoPoint) -> [u8; RECORD_LEN] {
    let record = [0u8; RECORD_LEN];
    let record = write_axis(
        record,
        &LONGITUDE,
        point.as_longitude(),
        point.as_longitude_time(),
    );
    let record = write_axis(
        record,
        &LATITUDE,
        point.as_latitude(),
        point.as_latitude_time(),
    );

    trace!("encode {:?} -> {:02x?}", point, record);
    record
}

///1軸分のフィールドを書き込む
fn write_axis(
    record: [u8; RECORD_LEN],
    axis: &AxisLayout,
    degree: i16,
    time: TimeOfFix,
) -> [u8; RECORD_LEN] {
    let sign = if degree < 0 { 0 } else { 1 };
    let magnitude = degree.unsigned_abs() as u64;

    if magnitude > axis.max_degree() {
        trace!(
            "degree {} does not fit {} and is truncated",
            degree, axis.degree
        );
    }

    let record = axis.sign.write(record, sign);
    let record = axis.degree.write(record, magnitude);
    let record = axis.minute.write(record, time.as_minute() as u64);
    let record = axis.second.write(record, time.as_second() as u64);
    axis.millisecond.write(record, time.as_millisecond() as u64)
}

/// エンコード済みの 64bit レコード。
///
/// ```
/// # use kasane_geopoint::{EncodedGeoPoint, GeoPoint, TimeOfFix};
/// let point = GeoPoint::new(35, TimeOfFix::new(1, 2, 3), 139, TimeOfFix::new(4, 5, 6));
/// let encoded = EncodedGeoPoint::from(&point);
///
/// assert_eq!(encoded.as_bytes().len(), 8);
/// assert_eq!(GeoPoint::from(encoded), point);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedGeoPoint([u8; RECORD_LEN]);

impl fmt::Display for EncodedGeoPoint {
    /// 各バイトを 8桁の2進数で空白区切りに表示する。
    ///
    /// ```
    /// # use kasane_geopoint::EncodedGeoPoint;
    /// let encoded = EncodedGeoPoint::from_bytes([1, 0, 0, 0, 2, 0, 0, 0]);
    /// assert_eq!(
    ///     encoded.to_string(),
    ///     "00000001 00000000 00000000 00000000 00000010 00000000 00000000 00000000"
    /// );
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, byte) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{:08b}", byte)?;
        }
        Ok(())
    }
}

impl EncodedGeoPoint {
    pub const fn from_bytes(bytes: [u8; RECORD_LEN]) -> Self {
        EncodedGeoPoint(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; RECORD_LEN] {
        &self.0
    }

    pub const fn into_bytes(self) -> [u8; RECORD_LEN] {
        self.0
    }

    /// レコードをリトルエンディアンの `u64` として返す。
    ///
    /// レコードの bit `n` は戻り値の bit `n` に対応する。
    pub const fn to_u64_le(&self) -> u64 {
        u64::from_le_bytes(self.0)
    }

    pub const fn from_u64_le(value: u64) -> Self {
        EncodedGeoPoint(value.to_le_bytes())
    }
}

impl From<&GeoPoint> for EncodedGeoPoint {
    fn from(point: &GeoPoint) -> Self {
        EncodedGeoPoint(encode(point))
    }
}

impl From<[u8; RECORD_LEN]> for EncodedGeoPoint {
    fn from(bytes: [u8; RECORD_LEN]) -> Self {
        EncodedGeoPoint(bytes)
    }
}

impl TryFrom<&[u8]> for EncodedGeoPoint {
    type Error = Error;

    /// スライスから構築する。長さが 8 でない場合は [`Error::RecordLength`] を返す。
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let record: [u8; RECORD_LEN] = bytes
            .try_into()
            .map_err(|_| Error::RecordLength { len: bytes.len() })?;
        Ok(EncodedGeoPoint(record))
    }
}
