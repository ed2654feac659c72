// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Log arguments and attributes.
//!
//! Every argument handed to a level method, and every attribute bound to an
//! entry, is a [`Value`]. Its [`Display`] implementation is the default
//! stringification used when messages are rendered.

use std::{
	borrow::Cow,
	error::Error as StdError,
	fmt::{self, Debug, Display, Formatter},
	sync::Arc,
};

/// A single log argument or attribute value.
#[derive(Debug, Clone)]
pub enum Value {
	Nil,
	Str(Arc<str>),
	Int(i64),
	Uint(u64),
	Float(f64),
	Bool(bool),
	Error(Arc<dyn StdError + Send + Sync>),
	Any(Arc<dyn Debug + Send + Sync>),
}

impl Value {
	pub fn error<E>(err: E) -> Self
	where
		E: StdError + Send + Sync + 'static,
	{
		Value::Error(Arc::new(err))
	}

	/// Wrap an arbitrary object, rendered through its `Debug` form.
	pub fn any<T>(value: T) -> Self
	where
		T: Debug + Send + Sync + 'static,
	{
		Value::Any(Arc::new(value))
	}

	pub fn is_str(&self) -> bool {
		matches!(self, Value::Str(_))
	}

	/// Short type label used in render diagnostics such as `%!d(string=x)`.
	pub fn type_name(&self) -> &'static str {
		match self {
			Value::Nil => "<nil>",
			Value::Str(_) => "string",
			Value::Int(_) => "int",
			Value::Uint(_) => "uint",
			Value::Float(_) => "float64",
			Value::Bool(_) => "bool",
			Value::Error(_) => "error",
			Value::Any(_) => "object",
		}
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			Value::Nil => f.write_str("<nil>"),
			Value::Str(s) => f.write_str(s),
			Value::Int(v) => write!(f, "{v}"),
			Value::Uint(v) => write!(f, "{v}"),
			Value::Float(v) => f.write_str(&format_float_shortest(*v)),
			Value::Bool(v) => write!(f, "{v}"),
			Value::Error(err) => write!(f, "{err}"),
			Value::Any(obj) => write!(f, "{obj:?}"),
		}
	}
}

impl PartialEq for Value {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Value::Nil, Value::Nil) => true,
			(Value::Str(l), Value::Str(r)) => l == r,
			(Value::Int(l), Value::Int(r)) => l == r,
			(Value::Uint(l), Value::Uint(r)) => l == r,
			(Value::Float(l), Value::Float(r)) => l == r,
			(Value::Bool(l), Value::Bool(r)) => l == r,
			(Value::Error(l), Value::Error(r)) => Arc::ptr_eq(l, r),
			(Value::Any(l), Value::Any(r)) => Arc::ptr_eq(l, r),
			_ => false,
		}
	}
}

/// Shortest float form: plain decimal for exponents in `-4..6`,
/// scientific (`1e+06`) otherwise.
pub(crate) fn format_float_shortest(v: f64) -> String {
	if v.is_nan() {
		return "NaN".to_string();
	}
	if v.is_infinite() {
		return if v > 0.0 { "+Inf" } else { "-Inf" }.to_string();
	}
	if v == 0.0 {
		return if v.is_sign_negative() { "-0" } else { "0" }.to_string();
	}
	let sci = format!("{v:e}");
	let (mantissa, exp) = split_exponent(&sci);
	if !(-4..6).contains(&exp) {
		format!("{mantissa}{}", exponent_suffix('e', exp))
	} else {
		format!("{v}")
	}
}

/// Split Rust's `{:e}` output (`1.5e-7`) into mantissa and exponent.
pub(crate) fn split_exponent(sci: &str) -> (&str, i32) {
	match sci.split_once(['e', 'E']) {
		Some((mantissa, exp)) => (mantissa, exp.parse().unwrap_or(0)),
		None => (sci, 0),
	}
}

/// `e+06` style exponent: explicit sign, at least two digits.
pub(crate) fn exponent_suffix(marker: char, exp: i32) -> String {
	let sign = if exp < 0 { '-' } else { '+' };
	format!("{marker}{sign}{:02}", exp.unsigned_abs())
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Str(Arc::from(v))
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Str(Arc::from(v))
	}
}

impl From<&String> for Value {
	fn from(v: &String) -> Self {
		Value::Str(Arc::from(v.as_str()))
	}
}

impl From<Cow<'_, str>> for Value {
	fn from(v: Cow<'_, str>) -> Self {
		Value::Str(Arc::from(v.as_ref()))
	}
}

impl From<Arc<str>> for Value {
	fn from(v: Arc<str>) -> Self {
		Value::Str(v)
	}
}

impl From<char> for Value {
	fn from(v: char) -> Self {
		Value::Str(Arc::from(v.to_string()))
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

macro_rules! impl_from_signed {
	($($t:ty),*) => {
		$(
			impl From<$t> for Value {
				fn from(v: $t) -> Self {
					Value::Int(v as i64)
				}
			}
		)*
	};
}

macro_rules! impl_from_unsigned {
	($($t:ty),*) => {
		$(
			impl From<$t> for Value {
				fn from(v: $t) -> Self {
					Value::Uint(v as u64)
				}
			}
		)*
	};
}

impl_from_signed!(i8, i16, i32, i64, isize);
impl_from_unsigned!(u8, u16, u32, u64, usize);

impl From<f32> for Value {
	fn from(v: f32) -> Self {
		// through the shortest decimal form, so 0.1f32 stays 0.1
		Value::Float(v.to_string().parse().unwrap_or(v as f64))
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Float(v)
	}
}

impl From<Arc<dyn StdError + Send + Sync>> for Value {
	fn from(err: Arc<dyn StdError + Send + Sync>) -> Self {
		Value::Error(err)
	}
}

impl From<Box<dyn StdError + Send + Sync>> for Value {
	fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
		Value::Error(Arc::from(err))
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(v: Option<T>) -> Self {
		v.map_or(Value::Nil, Into::into)
	}
}

/// A key/value pair bound to an entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
	pub key: Arc<str>,
	pub value: Value,
}

impl Attr {
	pub fn new(key: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
		Self {
			key: key.into(),
			value: value.into(),
		}
	}
}

impl Display for Attr {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}={}", self.key, self.value)
	}
}

/// Build a `[Value; N]` from heterogeneous expressions.
///
/// ```
/// use chainlog::{Value, values};
///
/// let args = values!["retry", 3, true];
/// assert_eq!(args[1], Value::Int(3));
/// ```
#[macro_export]
macro_rules! values {
	() => {{
		let empty: [$crate::Value; 0] = [];
		empty
	}};
	($($arg:expr),+ $(,)?) => {
		[$($crate::Value::from($arg)),+]
	};
}

#[cfg(test)]
mod tests {
	use std::io;

	use super::*;

	#[test]
	fn test_default_stringification() {
		assert_eq!(Value::from("a").to_string(), "a");
		assert_eq!(Value::from(-3).to_string(), "-3");
		assert_eq!(Value::from(3u8).to_string(), "3");
		assert_eq!(Value::from(true).to_string(), "true");
		assert_eq!(Value::from(None::<i32>).to_string(), "<nil>");
		assert_eq!(Value::error(io::Error::other("disk full")).to_string(), "disk full");
		assert_eq!(Value::any(vec![1, 2]).to_string(), "[1, 2]");
	}

	#[test]
	fn test_float_forms() {
		assert_eq!(Value::from(1.0).to_string(), "1");
		assert_eq!(Value::from(0.1f32).to_string(), "0.1");
		assert_eq!(Value::from(123456.5).to_string(), "123456.5");
		assert_eq!(Value::from(1_000_000.0).to_string(), "1e+06");
		assert_eq!(Value::from(0.00001).to_string(), "1e-05");
		assert_eq!(Value::from(f64::NEG_INFINITY).to_string(), "-Inf");
	}

	#[test]
	fn test_values_macro() {
		let args = values!["a", 1, 2.5, false];
		assert_eq!(args.len(), 4);
		assert!(args[0].is_str());
		assert_eq!(args[3], Value::Bool(false));
		let empty: [Value; 0] = values![];
		assert!(empty.is_empty());
	}

	#[test]
	fn test_attr_display() {
		assert_eq!(Attr::new("user", 42).to_string(), "user=42");
	}
}
