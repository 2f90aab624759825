use crate::error::Error;

pub mod field;

/// 1つのフィールドが保持できる最大のビット幅
pub const MAX_FIELD_SIZE: usize = u64::BITS as usize;

/// 下位 `size` bit がすべて `1` のビットパターンを返す。
///
/// `size` が 64 以上の場合は [`u64::MAX`] を返す。
///
/// ```
/// # use kasane_geopoint::mask;
/// assert_eq!(mask(0), 0);
/// assert_eq!(mask(6), 0b111111);
/// assert_eq!(mask(64), u64::MAX);
/// ```
pub const fn mask(size: u32) -> u64 {
    if size >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << size) - 1
    }
}

/// バッファ上の `begin..begin + size` の範囲を読み取り、符号なし整数として返す。
///
/// バッファは各バイトの LSB から順に番号付けされる（bit `0` は byte 0 の LSB、
/// bit `8` は byte 1 の LSB）。一方でフィールドの中身は MSB から格納されており、
/// `begin` の位置のビットが結果の最上位ビットになる。
///
/// # エラー
/// - `size` が 64 を超える場合、[`Error::FieldTooWide`] を返す。
/// - フィールドがバッファの外にはみ出す場合、[`Error::OutOfBounds`] を返す。
///
/// ```
/// # use kasane_geopoint::read_field;
/// let buffer = [0b1011_0000u8, 0b0000_0001];
///
/// // bit 4..8 は 1,1,0,1 の順で並んでいる
/// assert_eq!(read_field(&buffer, 4, 4).unwrap(), 0b1101);
/// assert_eq!(read_field(&buffer, 8, 1).unwrap(), 1);
/// assert!(read_field(&buffer, 12, 8).is_err());
/// ```
pub fn read_field(buffer: &[u8], begin: usize, size: usize) -> Result<u64, Error> {
    check_bounds(buffer.len(), begin, size)?;
    Ok(get_bits(buffer, begin, size))
}

/// `buffer` の `begin..begin + size` の範囲を `value` で上書きした新しいバッファを返す。
///
/// `value` の下位 `size` bit が MSB から順に `begin` の位置へ書き込まれるため、
/// [`read_field`] とは互いに逆の操作になる。
///
/// `value` が `size` bit に収まらない場合、上位の溢れたビットは黙って切り捨てられる。
/// これはエラーではなく、容量を優先した仕様である。
///
/// # エラー
/// 範囲の検証は書き込みより前に行われるため、エラー時にバッファが部分的に
/// 書き換えられることはない。
/// - `size` が 64 を超える場合、[`Error::FieldTooWide`] を返す。
/// - フィールドがバッファの外にはみ出す場合、[`Error::OutOfBounds`] を返す。
///
/// ```
/// # use kasane_geopoint::{read_field, write_field};
/// let buffer = write_field([0u8; 2], 0, 4, 0b1011).unwrap();
/// assert_eq!(buffer, [0b0000_1101, 0]);
/// assert_eq!(read_field(&buffer, 0, 4).unwrap(), 0b1011);
///
/// // 6bit に 70 を書き込むと 70 mod 64 = 6 になる
/// let buffer = write_field([0u8; 2], 3, 6, 70).unwrap();
/// assert_eq!(read_field(&buffer, 3, 6).unwrap(), 6);
/// ```
pub fn write_field<const N: usize>(
    buffer: [u8; N],
    begin: usize,
    size: usize,
    value: u64,
) -> Result<[u8; N], Error> {
    check_bounds(N, begin, size)?;
    let mut result = buffer;
    put_bits(&mut result, begin, size, value);
    Ok(result)
}

/// フィールドがバッファ内に収まっているかを検証する
fn check_bounds(len: usize, begin: usize, size: usize) -> Result<(), Error> {
    if size > MAX_FIELD_SIZE {
        return Err(Error::FieldTooWide { size });
    }

    let capacity = len * 8;
    match begin.checked_add(size) {
        Some(end) if end <= capacity => Ok(()),
        _ => Err(Error::OutOfBounds {
            begin,
            size,
            capacity,
        }),
    }
}

///バッファ上の1bitを取り出す
fn bit_at(buffer: &[u8], index: usize) -> u64 {
    ((buffer[index / 8] >> (index % 8)) & 1) as u64
}

/// 範囲の検証を行わずに読み取る
/// 呼び出し側が`begin + size`がバッファ内であることを保証する
pub(crate) fn get_bits(buffer: &[u8], begin: usize, size: usize) -> u64 {
    (begin..begin + size).fold(0u64, |acc, index| (acc << 1) | bit_at(buffer, index))
}

/// 範囲の検証を行わずに書き込む
/// 呼び出し側が`begin + size`がバッファ内であることを保証する
pub(crate) fn put_bits(buffer: &mut [u8], begin: usize, size: usize, value: u64) {
    for i in 0..size {
        let index = begin + size - 1 - i;
        let byte = &mut buffer[index / 8];
        let bit_mask = 1u8 << (index % 8);

        if (value >> i) & 1 == 1 {
            *byte |= bit_mask;
        } else {
            *byte &= !bit_mask;
        }
    }
}
