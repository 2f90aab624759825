use crate::{GeoPoint, TimeOfFix};

pub mod layout;

/// 測位ログの出力先をテストハーネスに向ける
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

///南緯90度・東経100度の点を生成する
pub fn south_pole_point() -> GeoPoint {
    let time = TimeOfFix::new(20, 12, 211);
    GeoPoint::new(-90, time, 100, time)
}

///`south_pole_point`をエンコードした結果
pub const SOUTH_POLE_RECORD: [u8; 8] = [0x4d, 0x14, 0x06, 0x96, 0xb5, 0x14, 0x06, 0xcb];
