//! Decoded tag values and their text rendering.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Tag name to value, ordered by tag name.
pub type MetadataRecord = BTreeMap<String, TagValue>;

/// Anything that can be rendered as the text stored in a graph literal.
///
/// Rendering never fails: it is a conversion to text, not a parse.
pub trait DisplayText {
    fn to_display_text(&self) -> String;
}
impl DisplayText for str {
    fn to_display_text(&self) -> String {
        self.to_string()
    }
}
impl DisplayText for String {
    fn to_display_text(&self) -> String {
        self.clone()
    }
}
impl<T: DisplayText + ?Sized> DisplayText for &T {
    fn to_display_text(&self) -> String {
        (**self).to_display_text()
    }
}

/// A signed fraction, as stored in EXIF `RATIONAL`/`SRATIONAL` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    pub num: i64,
    pub den: i64,
}
impl Rational {
    pub fn new(num: i64, den: i64) -> Self {
        Self { num, den }
    }

    /// Lowest terms with a positive denominator. A zero denominator is left alone.
    pub fn reduced(&self) -> Self {
        if self.den == 0 {
            return *self;
        }
        let divisor = gcd(self.num.unsigned_abs(), self.den.unsigned_abs()) as i64;
        let sign = if self.den < 0 { -1 } else { 1 };
        Self {
            num: sign * self.num / divisor,
            den: sign * self.den / divisor,
        }
    }
}
impl Display for Rational {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let reduced = self.reduced();
        match reduced.den {
            1 => write!(f, "{}", reduced.num),
            den => write!(f, "{}/{}", reduced.num, den),
        }
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a.max(1)
}

/// One decoded tag value.
///
/// Numeric variants hold every component of the field; most tags have one.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    Text(String),
    Unsigned(Vec<u64>),
    Signed(Vec<i64>),
    Rational(Vec<Rational>),
    Float(Vec<f64>),
    /// Opaque bytes (EXIF `UNDEFINED`).
    Bytes(Vec<u8>),
}
impl DisplayText for TagValue {
    fn to_display_text(&self) -> String {
        match self {
            TagValue::Text(text) => text.clone(),
            TagValue::Unsigned(values) => render_list(values),
            TagValue::Signed(values) => render_list(values),
            TagValue::Rational(values) => render_list(values),
            TagValue::Float(values) => render_list(values),
            TagValue::Bytes(bytes) if !bytes.is_empty() && bytes.iter().all(|b| b.is_ascii_graphic() || *b == b' ') => {
                String::from_utf8_lossy(bytes).into_owned()
            },
            TagValue::Bytes(bytes) => render_list(bytes),
        }
    }
}
impl Display for TagValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.to_display_text())
    }
}
impl From<&str> for TagValue {
    fn from(value: &str) -> Self {
        TagValue::Text(value.to_string())
    }
}
impl From<String> for TagValue {
    fn from(value: String) -> Self {
        TagValue::Text(value)
    }
}

/// A lone value renders bare; anything else renders as `[a, b, c]`.
fn render_list<T: Display>(values: &[T]) -> String {
    match values {
        [single] => single.to_string(),
        many => format!("[{}]", many.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")),
    }
}
