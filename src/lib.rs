//! 緯度経度と測位時刻を 64bit にパック/アンパックするライブラリ。
//!
//! 1点あたり 8byte のレコードに、経度 33bit・緯度 31bit を割り当てる。
//! 極に近づくほど経度方向の間隔は狭まる。

/// 発生し得るすべてのエラーを`enum` 型として定義・集約。
mod error;

/// 固定長バッファ上の任意位置・任意幅のビットフィールド操作。
mod bit_field;

/// 座標の各軸に付随する測位時刻。
mod time_of_fix;

/// 緯度経度の 64bit レコードへのエンコード・デコード。
mod geo_point;

pub use error::Error;

pub use bit_field::{MAX_FIELD_SIZE, field::Field, mask, read_field, write_field};
pub use time_of_fix::TimeOfFix;

pub use geo_point::GeoPoint;
pub use geo_point::decode::decode;
pub use geo_point::encode::{EncodedGeoPoint, encode};
pub use geo_point::layout::{AxisLayout, LATITUDE, LAYOUT, LONGITUDE, RECORD_LEN, RecordField};
