//! Money type for representing expense amounts
//!
//! Internally stores amounts in hundredths of a currency unit (i64) to avoid
//! floating-point drift when summing many expenses. No currency is attached;
//! the tracker only ever deals in one unit.
//!
//! Arithmetic is checked: adding or subtracting amounts returns `None` on
//! overflow instead of wrapping.

use std::fmt;

/// A monetary amount stored as hundredths of the currency unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from hundredths
    ///
    /// # Examples
    /// ```
    /// use expense_tracker::models::Money;
    /// let amount = Money::from_cents(4250); // 42.50
    /// assert_eq!(amount.to_string(), "42.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in hundredths
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn units(&self) -> i64 {
        self.0 / 100
    }

    /// Get the fractional portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Add two amounts, `None` on overflow
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract `other`, `None` on overflow
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Sum amounts, `None` if the total overflows
    pub fn checked_sum<I: IntoIterator<Item = Self>>(amounts: I) -> Option<Self> {
        amounts
            .into_iter()
            .try_fold(Self::zero(), |acc, m| acc.checked_add(m))
    }

    /// Parse a money amount from a string
    ///
    /// Accepts "42", "42.5", "42.50", "-3.25", "$42.50", "+1" and exponent
    /// forms such as "1e+16" or "4.25E1". Digits past the second decimal
    /// place are truncated.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let raw = s.trim();
        if raw.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, rest) = match raw.as_bytes()[0] {
            b'-' => (true, &raw[1..]),
            b'+' => (false, &raw[1..]),
            _ => (false, raw),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let invalid = || MoneyParseError::InvalidFormat(raw.to_string());

        let (mantissa, exponent) = match rest.find(|c: char| c == 'e' || c == 'E') {
            Some(pos) => {
                let exponent: i32 = rest[pos + 1..].parse().map_err(|_| invalid())?;
                (&rest[..pos], i64::from(exponent))
            }
            None => (rest, 0),
        };

        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        if whole.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }
        if !whole.bytes().all(|b| b.is_ascii_digit())
            || !fraction.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let digits: Vec<i64> = whole
            .bytes()
            .chain(fraction.bytes())
            .map(|b| i64::from(b - b'0'))
            .collect();

        // Number of leading digits that make up the value in hundredths.
        let cents_end = whole.len() as i64 + exponent + 2;

        let total = if cents_end <= 0 || digits.iter().all(|&d| d == 0) {
            0
        } else if cents_end > digits.len() as i64 + 20 {
            return Err(MoneyParseError::TooLarge(raw.to_string()));
        } else {
            let mut total: i64 = 0;
            for i in 0..cents_end as usize {
                let digit = digits.get(i).copied().unwrap_or(0);
                total = total
                    .checked_mul(10)
                    .and_then(|v| v.checked_add(digit))
                    .ok_or_else(|| MoneyParseError::TooLarge(raw.to_string()))?;
            }
            total
        };

        Ok(Self(if negative { -total } else { total }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.units().unsigned_abs(), self.cents_part())
        } else {
            write!(f, "{}.{:02}", self.units(), self.cents_part())
        }
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
    TooLarge(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount cannot be empty"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::TooLarge(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
