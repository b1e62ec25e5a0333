use std::num::IntErrorKind;
use thiserror::Error;

/// Behaviour to bind a caller owned variable of type `T` to Cli tokens.
///
/// We use this at the bottom of the command line parser object graph so the compiler can maintain each variable's type.
/// A `set` either replaces the variable entirely, or leaves it untouched.
pub trait Sink<T> {
    /// Convert the tokens matched by a parameter, and assign them to the variable.
    fn set(&mut self, tokens: &[&str]) -> Result<(), ConversionError>;

    /// Get the current value of the variable.
    fn get(&self) -> &T;

    /// Describe the current value of the variable (used to display defaults).
    fn describe(&self) -> String;

    /// Whether the mere presence of the parameter activates this sink (ex: `bool`).
    fn is_switch(&self) -> bool {
        false
    }
}

/// Behaviour to convert a single Cli token into a value.
///
/// Implement this for your own type `T` to use it in a [`Scalar`](crate::Scalar) or [`List`](crate::List).
/// `Display` is used to describe the value on the help message.
///
/// ### Example
/// ```
/// # use argset_builder as argset;
/// use argset::{ConversionError, FromToken};
///
/// #[derive(Debug, PartialEq)]
/// struct Point(i32, i32);
///
/// impl std::fmt::Display for Point {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
///         write!(f, "{},{}", self.0, self.1)
///     }
/// }
///
/// impl FromToken for Point {
///     fn from_token(token: &str) -> Result<Self, ConversionError> {
///         match token.split_once(',') {
///             Some((x, y)) => Ok(Point(i32::from_token(x)?, i32::from_token(y)?)),
///             None => Err(ConversionError::syntax::<Point>(token)),
///         }
///     }
/// }
///
/// assert_eq!(Point::from_token("1,2").unwrap(), Point(1, 2));
/// ```
pub trait FromToken: Sized + std::fmt::Display {
    /// Whether a `Scalar` of this type defaults to a switch when used as an option.
    const SWITCH: bool = false;

    /// Convert the token into a value.
    fn from_token(token: &str) -> Result<Self, ConversionError>;

    /// The value assigned when the parameter is matched without any tokens.
    fn activated() -> Option<Self> {
        None
    }
}

/// The failure to convert Cli tokens into a variable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// The token is not valid syntax for the type.
    #[error("'{token}' cannot convert to {type_name}: invalid syntax.")]
    Syntax {
        /// The offending token.
        token: String,
        /// The type being converted into.
        type_name: &'static str,
    },
    /// The token is valid syntax, but its magnitude does not fit the type.
    #[error("'{token}' cannot convert to {type_name}: value out of range.")]
    Range {
        /// The offending token.
        token: String,
        /// The type being converted into.
        type_name: &'static str,
    },
    /// A single valued variable received a different number of tokens.
    #[error("{type_name} expects precisely 1 token, but received {received}.")]
    Count {
        /// The number of tokens received.
        received: usize,
        /// The type being converted into.
        type_name: &'static str,
    },
}

impl ConversionError {
    /// Construct a `Syntax` error for the type `T`.
    pub fn syntax<T>(token: &str) -> Self {
        ConversionError::Syntax {
            token: token.to_string(),
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Construct a `Range` error for the type `T`.
    pub fn range<T>(token: &str) -> Self {
        ConversionError::Range {
            token: token.to_string(),
            type_name: std::any::type_name::<T>(),
        }
    }
}

impl FromToken for bool {
    const SWITCH: bool = true;

    fn from_token(token: &str) -> Result<Self, ConversionError> {
        match token {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(ConversionError::syntax::<bool>(token)),
        }
    }

    fn activated() -> Option<Self> {
        Some(true)
    }
}

impl FromToken for String {
    fn from_token(token: &str) -> Result<Self, ConversionError> {
        Ok(token.to_string())
    }
}

// Splits a base-0 integer token into its radix and signed digits.
// `0x`, `0o`, `0b` select a radix, as does a bare leading `0` (octal).
// Underscores may separate digits, or follow a prefix.
// `None` means the token can never be valid, ex: a second sign after the prefix.
fn radix_digits(token: &str) -> Option<(u32, String)> {
    let (sign, unsigned) = match token.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", token.strip_prefix('+').unwrap_or(token)),
    };

    let prefix = unsigned.get(..2).map(|p| p.to_ascii_lowercase());
    let (radix, body, prefixed) = match prefix.as_deref() {
        Some("0x") => (16, &unsigned[2..], true),
        Some("0o") => (8, &unsigned[2..], true),
        Some("0b") => (2, &unsigned[2..], true),
        _ if unsigned.len() > 1 && unsigned.starts_with('0') => (8, &unsigned[1..], true),
        _ => (10, unsigned, false),
    };

    if body.starts_with(['+', '-']) {
        return None;
    }

    if body.ends_with('_') || body.contains("__") || (!prefixed && body.starts_with('_')) {
        return None;
    }

    Some((radix, format!("{sign}{}", body.replace('_', ""))))
}

macro_rules! integer_token {
    ($($t:ty),*) => {
        $(
            impl FromToken for $t {
                fn from_token(token: &str) -> Result<Self, ConversionError> {
                    let (radix, digits) = radix_digits(token)
                        .ok_or_else(|| ConversionError::syntax::<$t>(token))?;
                    <$t>::from_str_radix(&digits, radix).map_err(|error| match error.kind() {
                        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                            ConversionError::range::<$t>(token)
                        }
                        _ => ConversionError::syntax::<$t>(token),
                    })
                }
            }
        )*
    };
}

integer_token!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

fn is_infinity_literal(token: &str) -> bool {
    let unsigned = token
        .strip_prefix('-')
        .or_else(|| token.strip_prefix('+'))
        .unwrap_or(token)
        .to_ascii_lowercase();
    unsigned == "inf" || unsigned == "infinity"
}

macro_rules! float_token {
    ($($t:ty),*) => {
        $(
            impl FromToken for $t {
                fn from_token(token: &str) -> Result<Self, ConversionError> {
                    let value: $t = token
                        .parse()
                        .map_err(|_| ConversionError::syntax::<$t>(token))?;

                    if value.is_infinite() && !is_infinity_literal(token) {
                        return Err(ConversionError::range::<$t>(token));
                    }

                    Ok(value)
                }
            }
        )*
    };
}

float_token!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{thread_rng, Rng};
    use rstest::rstest;

    #[rstest]
    #[case("true", true)]
    #[case("false", false)]
    fn bool_token(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(bool::from_token(token).unwrap(), expected);
    }

    #[rstest]
    #[case("True")]
    #[case("1")]
    #[case("t")]
    #[case("")]
    fn bool_token_strict(#[case] token: &str) {
        assert_matches!(
            bool::from_token(token),
            Err(ConversionError::Syntax { type_name: "bool", .. })
        );
    }

    #[test]
    fn bool_activated() {
        assert!(bool::SWITCH);
        assert_eq!(bool::activated(), Some(true));
        assert!(!isize::SWITCH);
        assert_eq!(isize::activated(), None);
    }

    #[rstest]
    #[case("0", 0)]
    #[case("42", 42)]
    #[case("-7", -7)]
    #[case("+7", 7)]
    #[case("0x1F", 31)]
    #[case("0X1f", 31)]
    #[case("-0x10", -16)]
    #[case("0o17", 15)]
    #[case("0b101", 5)]
    #[case("010", 8)]
    #[case("-017", -15)]
    #[case("00", 0)]
    #[case("1_000", 1000)]
    #[case("0x_1F", 31)]
    #[case("0b1_0_1", 5)]
    fn isize_token(#[case] token: &str, #[case] expected: isize) {
        assert_eq!(isize::from_token(token).unwrap(), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("4.2")]
    #[case("")]
    #[case("-")]
    #[case("0x")]
    #[case("0b2")]
    #[case("0x-5")]
    #[case("0x+5")]
    #[case("+0x-5")]
    #[case("0b-1")]
    #[case("-0o+7")]
    #[case("09")]
    #[case("0-5")]
    #[case("_1")]
    #[case("1_")]
    #[case("1__0")]
    #[case("0x_")]
    fn isize_token_syntax(#[case] token: &str) {
        assert_eq!(
            isize::from_token(token).unwrap_err(),
            ConversionError::syntax::<isize>(token)
        );
    }

    #[rstest]
    #[case("99999999999999999999999")]
    #[case("-99999999999999999999999")]
    fn isize_token_range(#[case] token: &str) {
        assert_eq!(
            isize::from_token(token).unwrap_err(),
            ConversionError::range::<isize>(token)
        );
    }

    #[test]
    fn u8_token_range() {
        assert_eq!(u8::from_token("255").unwrap(), 255);
        assert_matches!(u8::from_token("256"), Err(ConversionError::Range { .. }));
    }

    #[rstest]
    #[case("3.4", 3.4)]
    #[case("-0.5", -0.5)]
    #[case("1e3", 1000.0)]
    #[case("7", 7.0)]
    fn f64_token(#[case] token: &str, #[case] expected: f64) {
        assert_eq!(f64::from_token(token).unwrap(), expected);
    }

    #[rstest]
    #[case("inf")]
    #[case("-Infinity")]
    fn f64_token_infinity(#[case] token: &str) {
        assert!(f64::from_token(token).unwrap().is_infinite());
    }

    #[test]
    fn f64_token_errors() {
        assert_matches!(f64::from_token("1e400"), Err(ConversionError::Range { .. }));
        assert_matches!(f64::from_token("abc"), Err(ConversionError::Syntax { .. }));
    }

    #[test]
    fn string_token() {
        assert_eq!(String::from_token("--verbatim").unwrap(), "--verbatim");
        assert_eq!(String::from_token("").unwrap(), "");
    }

    #[test]
    fn integer_describe_inverts() {
        for _ in 0..100 {
            let value: isize = thread_rng().gen();
            let token = value.to_string();
            assert_eq!(isize::from_token(&token).unwrap().to_string(), token);
        }
    }

    #[test]
    fn conversion_error_display() {
        assert_eq!(
            ConversionError::syntax::<bool>("x").to_string(),
            "'x' cannot convert to bool: invalid syntax."
        );
        assert_eq!(
            ConversionError::Count {
                received: 2,
                type_name: "i32"
            }
            .to_string(),
            "i32 expects precisely 1 token, but received 2."
        );
    }
}
