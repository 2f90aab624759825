use std::fmt;

#[cfg(test)]
use proptest::prelude::*;
#[cfg(any(test, feature = "random"))]
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::time_of_fix::TimeOfFix;

pub mod decode;
pub mod encode;
pub mod layout;

#[cfg(test)]
mod tests;

use decode::decode;
use encode::encode;
use layout::RECORD_LEN;

/// 緯度・経度とそれぞれの測位時刻の組を表す型。
///
/// エンコードすると 1点あたり 64bit に収まる。
/// 緯度は慣例的に `-90..=90`、経度は `-180..=180` だが、この型は範囲を検証しない。
/// 往復で値が保たれるのは、度の絶対値が緯度 `127`・経度 `255` 以下、
/// 分・秒が `64` 未満、ミリ秒が緯度 `2048`・経度 `4096` 未満の場合に限られる。
///
/// ```
/// # use kasane_geopoint::{GeoPoint, TimeOfFix};
/// let time = TimeOfFix::new(20, 12, 211);
/// let point = GeoPoint::new(-90, time, 100, time);
///
/// let record = point.encode();
/// assert_eq!(GeoPoint::decode(&record), point);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoPoint {
    latitude: i16,
    latitude_time: TimeOfFix,
    longitude: i16,
    longitude_time: TimeOfFix,
}

impl fmt::Display for GeoPoint {
    /// 緯度と経度を1行ずつ表示する。
    ///
    /// ```
    /// # use kasane_geopoint::{GeoPoint, TimeOfFix};
    /// let time = TimeOfFix::new(20, 12, 211);
    /// let point = GeoPoint::new(-90, time, 100, time);
    /// assert_eq!(
    ///     point.to_string(),
    ///     "LATITUDE=-90,20,12,211\nLONGITUDE=100,20,12,211"
    /// );
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "LATITUDE={},{},{},{}",
            self.latitude,
            self.latitude_time.as_minute(),
            self.latitude_time.as_second(),
            self.latitude_time.as_millisecond()
        )?;
        write!(
            f,
            "LONGITUDE={},{},{},{}",
            self.longitude,
            self.longitude_time.as_minute(),
            self.longitude_time.as_second(),
            self.longitude_time.as_millisecond()
        )
    }
}

impl GeoPoint {
    pub const fn new(
        latitude: i16,
        latitude_time: TimeOfFix,
        longitude: i16,
        longitude_time: TimeOfFix,
    ) -> GeoPoint {
        GeoPoint {
            latitude,
            latitude_time,
            longitude,
            longitude_time,
        }
    }

    /// 緯度（度）。負の値は南緯。
    pub const fn as_latitude(&self) -> i16 {
        self.latitude
    }

    pub const fn as_latitude_time(&self) -> TimeOfFix {
        self.latitude_time
    }

    /// 経度（度）。負の値は西経。
    pub const fn as_longitude(&self) -> i16 {
        self.longitude
    }

    pub const fn as_longitude_time(&self) -> TimeOfFix {
        self.longitude_time
    }

    /// 8byte レコードにエンコードする。[`encode()`] を参照。
    pub fn encode(&self) -> [u8; RECORD_LEN] {
        encode(self)
    }

    /// 8byte レコードからデコードする。[`decode()`] を参照。
    pub fn decode(record: &[u8; RECORD_LEN]) -> GeoPoint {
        decode(record)
    }

    /// 地球上の有効な範囲からランダムに [`GeoPoint`] を生成します。
    #[cfg(any(test, feature = "random"))]
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self::random_using(&mut rng)
    }

    /// 外部の乱数生成器を使用してランダムな [`GeoPoint`] を生成します。
    ///
    /// 生成される値はすべてフィールド幅に収まるため、エンコードしても切り捨ては起きない。
    #[cfg(any(test, feature = "random"))]
    pub fn random_using<R: Rng>(rng: &mut R) -> Self {
        GeoPoint {
            latitude: rng.random_range(-90..=90),
            latitude_time: TimeOfFix::random_using(rng, 999),
            longitude: rng.random_range(-180..=180),
            longitude_time: TimeOfFix::random_using(rng, 999),
        }
    }

    /// 切り捨てなしで往復できる全範囲の [`GeoPoint`] を生成する
    #[cfg(test)]
    pub fn arb() -> impl Strategy<Value = Self> {
        use layout::{LATITUDE, LONGITUDE};

        let lat_max = LATITUDE.max_degree() as i16;
        let lon_max = LONGITUDE.max_degree() as i16;
        (
            -lat_max..=lat_max,
            arb_time(&LATITUDE),
            -lon_max..=lon_max,
            arb_time(&LONGITUDE),
        )
            .prop_map(|(latitude, latitude_time, longitude, longitude_time)| {
                GeoPoint::new(latitude, latitude_time, longitude, longitude_time)
            })
    }
}

#[cfg(test)]
fn arb_time(axis: &layout::AxisLayout) -> impl Strategy<Value = TimeOfFix> + use<> {
    (
        0..=axis.minute.max_value() as u16,
        0..=axis.second.max_value() as u16,
        0..=axis.millisecond.max_value() as u16,
    )
        .prop_map(|(minute, second, millisecond)| TimeOfFix::new(minute, second, millisecond))
}
