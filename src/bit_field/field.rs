use std::fmt;

use crate::bit_field::{MAX_FIELD_SIZE, get_bits, mask, put_bits};

/// 固定長レコード上の1つのフィールドの位置と幅を表す型。
///
/// `N` はレコードのバイト長。[`Field::new`] は `const fn` であり、
/// `const` の文脈で範囲外のフィールドを定義するとコンパイルエラーになる。
/// そのため構築済みの [`Field`] に対する読み書きは失敗しない。
///
/// ```
/// # use kasane_geopoint::Field;
/// const MINUTE: Field<8> = Field::new(9, 6);
///
/// let record = MINUTE.write([0u8; 8], 20);
/// assert_eq!(MINUTE.read(&record), 20);
/// ```
///
/// ```compile_fail
/// # use kasane_geopoint::Field;
/// const BROKEN: Field<8> = Field::new(60, 6);
/// let _ = BROKEN;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Field<const N: usize> {
    begin: usize,
    size: usize,
}

impl<const N: usize> fmt::Display for Field<N> {
    /// 形式は `"{begin}..{end}"`。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.begin, self.end())
    }
}

impl<const N: usize> Field<N> {
    /// レコード全体のビット数
    pub const CAPACITY: usize = N * 8;

    /// 指定された位置と幅から [`Field`] を構築する。
    ///
    /// # Panics
    /// `size` が `1..=64` の範囲外、またはフィールドがレコードの外にはみ出す場合。
    /// `const` の文脈ではコンパイル時に検出される。
    pub const fn new(begin: usize, size: usize) -> Self {
        assert!(size > 0 && size <= MAX_FIELD_SIZE, "field size must be 1..=64");
        assert!(begin + size <= Self::CAPACITY, "field exceeds record");
        Field { begin, size }
    }

    /// 先頭のbit位置を返す。
    pub const fn as_begin(&self) -> usize {
        self.begin
    }

    /// ビット幅を返す。
    pub const fn as_size(&self) -> usize {
        self.size
    }

    /// 末尾の次のbit位置を返す。
    pub const fn end(&self) -> usize {
        self.begin + self.size
    }

    /// このフィールドが保持できる最大値を返す。
    ///
    /// ```
    /// # use kasane_geopoint::Field;
    /// assert_eq!(Field::<8>::new(21, 12).max_value(), 4095);
    /// ```
    pub const fn max_value(&self) -> u64 {
        mask(self.size as u32)
    }

    /// レコードからこのフィールドの値を読み取る。
    pub fn read(&self, record: &[u8; N]) -> u64 {
        get_bits(record, self.begin, self.size)
    }

    /// このフィールドを `value` で上書きした新しいレコードを返す。
    ///
    /// 幅を超える上位bitは切り捨てられる。
    pub fn write(&self, record: [u8; N], value: u64) -> [u8; N] {
        let mut result = record;
        put_bits(&mut result, self.begin, self.size, value);
        result
    }
}
