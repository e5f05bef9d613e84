use std::{
    cmp::Ordering,
    fmt, iter,
    ops::{Add, AddAssign, Mul},
};

/// A peso amount held as a fixed-point count of centavos.
///
/// All arithmetic is exact integer arithmetic; no binary floating point is
/// involved anywhere. The only rounding step is [`Money::with_vat`], which
/// rounds half-to-even at centavo precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Zero pesos.
    pub const ZERO: Self = Self(0);

    /// Creates an amount from whole pesos.
    #[must_use]
    pub const fn from_pesos(pesos: i64) -> Self {
        Self(pesos * 100)
    }

    /// Creates an amount from centavos.
    #[must_use]
    pub const fn from_centavos(centavos: i64) -> Self {
        Self(centavos)
    }

    /// The amount in centavos.
    #[must_use]
    pub const fn centavos(self) -> i64 {
        self.0
    }

    /// Applies a tax rate expressed in basis points (1200 = 12%).
    ///
    /// The scaled value is reduced back to centavos with round-half-to-even,
    /// applied exactly once.
    #[must_use]
    pub fn with_vat(self, basis_points: u32) -> Self {
        let rate = 10_000 + i64::from(basis_points);
        let scaled = self.0 * rate;
        let quotient = scaled.div_euclid(10_000);
        let remainder = scaled.rem_euclid(10_000);
        match remainder.cmp(&5_000) {
            Ordering::Less => Self(quotient),
            Ordering::Greater => Self(quotient + 1),
            Ordering::Equal if quotient % 2 == 0 => Self(quotient),
            Ordering::Equal => Self(quotient + 1),
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, rhs: u32) -> Self {
        Self(self.0 * i64::from(rhs))
    }
}

impl iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let pesos = self.0 / 100;
        let centavos = (self.0 % 100).unsigned_abs();
        if self.0 < 0 && pesos == 0 {
            write!(f, "-0.{centavos:02}")
        } else {
            write!(f, "{pesos}.{centavos:02}")
        }
    }
}
