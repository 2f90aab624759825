//! 64bit レコードのフィールド配置。
//!
//! ```text
//! EW (経度)  符号 1 + 度 8 + 分 6 + 秒 6 + ミリ秒 12 = 33bit  (bit  0..33)
//! NS (緯度)  符号 1 + 度 7 + 分 6 + 秒 6 + ミリ秒 11 = 31bit  (bit 33..64)
//! ```
//!
//! 符号bitは `0` が負（西経・南緯）、`1` が非負（東経・北緯）。

use crate::bit_field::{field::Field, mask};

/// レコードのバイト長
pub const RECORD_LEN: usize = 8;

/// 8byte レコード上のフィールド
pub type RecordField = Field<RECORD_LEN>;

/// 片方の軸（経度または緯度）が占めるフィールドの組
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisLayout {
    pub sign: RecordField,
    pub degree: RecordField,
    pub minute: RecordField,
    pub second: RecordField,
    pub millisecond: RecordField,
}

impl AxisLayout {
    /// 軸全体のビット幅
    pub const fn size(&self) -> usize {
        self.millisecond.end() - self.sign.as_begin()
    }

    /// 格納できる度の絶対値の最大値
    pub const fn max_degree(&self) -> u64 {
        self.degree.max_value()
    }

    const fn fields(&self) -> [RecordField; 5] {
        [
            self.sign,
            self.degree,
            self.minute,
            self.second,
            self.millisecond,
        ]
    }
}

pub const LONGITUDE: AxisLayout = AxisLayout {
    sign: Field::new(0, 1),
    degree: Field::new(1, 8),
    minute: Field::new(9, 6),
    second: Field::new(15, 6),
    millisecond: Field::new(21, 12),
};

pub const LATITUDE: AxisLayout = AxisLayout {
    sign: Field::new(33, 1),
    degree: Field::new(34, 7),
    minute: Field::new(41, 6),
    second: Field::new(47, 6),
    millisecond: Field::new(53, 11),
};

/// レコード上の全フィールド（bit位置順）
pub const LAYOUT: [RecordField; 10] = {
    let lon = LONGITUDE.fields();
    let lat = LATITUDE.fields();
    [
        lon[0], lon[1], lon[2], lon[3], lon[4], lat[0], lat[1], lat[2], lat[3], lat[4],
    ]
};

/// 全フィールドが互いに重ならず、かつ64bitを隙間なく埋めているかを判定する
const fn covers_record_exactly(fields: &[RecordField]) -> bool {
    let mut occupied = 0u64;
    let mut i = 0;
    while i < fields.len() {
        let bits = mask(fields[i].as_size() as u32) << fields[i].as_begin();
        if occupied & bits != 0 {
            return false;
        }
        occupied |= bits;
        i += 1;
    }
    occupied == u64::MAX
}

const _: () = assert!(
    covers_record_exactly(&LAYOUT),
    "record layout must assign every bit to exactly one field"
);
