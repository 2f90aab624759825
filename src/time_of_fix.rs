use std::fmt;

#[cfg(any(test, feature = "random"))]
use rand::Rng;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 座標の各軸に付随する測位時刻（分・秒・ミリ秒）を表す型。
///
/// 値の上限は検証しない。レコードに格納できる範囲は格納先のフィールド幅で決まり、
/// 幅を超えた値はエンコード時に下位bitだけが残る。
///
/// ```
/// # use kasane_geopoint::TimeOfFix;
/// let time = TimeOfFix::new(20, 12, 211);
/// assert_eq!(time.to_string(), "20:12.211");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeOfFix {
    minute: u16,
    second: u16,
    millisecond: u16,
}

impl fmt::Display for TimeOfFix {
    /// 形式は `"{minute}:{second}.{millisecond:03}"`。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}.{:03}",
            self.minute, self.second, self.millisecond
        )
    }
}

impl TimeOfFix {
    pub const fn new(minute: u16, second: u16, millisecond: u16) -> TimeOfFix {
        TimeOfFix {
            minute,
            second,
            millisecond,
        }
    }

    pub const fn as_minute(&self) -> u16 {
        self.minute
    }

    pub const fn as_second(&self) -> u16 {
        self.second
    }

    pub const fn as_millisecond(&self) -> u16 {
        self.millisecond
    }

    /// 外部の乱数生成器を使用して、分・秒は `0..60`、ミリ秒は `0..=max_millisecond`
    /// の範囲でランダムな [`TimeOfFix`] を生成する。
    #[cfg(any(test, feature = "random"))]
    pub fn random_using<R: Rng>(rng: &mut R, max_millisecond: u16) -> Self {
        TimeOfFix {
            minute: rng.random_range(0..60),
            second: rng.random_range(0..60),
            millisecond: rng.random_range(0..=max_millisecond),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn display_pads_millisecond() {
        assert_eq!(TimeOfFix::new(5, 7, 9).to_string(), "5:7.009");
        assert_eq!(TimeOfFix::new(59, 59, 1999).to_string(), "59:59.1999");
    }

    #[test]
    fn structural_equality() {
        assert_eq!(TimeOfFix::new(20, 12, 211), TimeOfFix::new(20, 12, 211));
        assert_ne!(TimeOfFix::new(20, 12, 211), TimeOfFix::new(20, 12, 212));
        assert_eq!(TimeOfFix::default(), TimeOfFix::new(0, 0, 0));
    }

    #[test]
    fn random_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345); // シード固定
        for _ in 0..1000 {
            let time = TimeOfFix::random_using(&mut rng, 999);
            assert!(time.as_minute() < 60);
            assert!(time.as_second() < 60);
            assert!(time.as_millisecond() <= 999);
        }
    }
}
