// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Message rendering for the three call shapes.
//!
//! - [`sprint`]: plain concatenation of each argument's default form
//! - [`sprintln`]: the default forms joined by single spaces
//! - [`sprintf`]: printf-style verb substitution
//!
//! None of these fail. A verb that does not fit its argument, a missing
//! argument or a surplus argument is rendered inline as a `%!` marker, e.g.
//! `%!d(string=x)`, `%!s(MISSING)` or `%!(EXTRA int=3)`. Widths and
//! precisions above [`MAX_WIDTH`] render as `%!(BADWIDTH)` / `%!(BADPREC)`.

use std::fmt::Write;

use crate::{
	Value,
	value::{exponent_suffix, format_float_shortest, split_exponent},
};

pub fn sprint(args: &[Value]) -> String {
	let mut out = String::new();
	for arg in args {
		let _ = write!(out, "{arg}");
	}
	out
}

pub fn sprintln(args: &[Value]) -> String {
	let mut out = String::new();
	for (i, arg) in args.iter().enumerate() {
		if i > 0 {
			out.push(' ');
		}
		let _ = write!(out, "{arg}");
	}
	out
}

/// Largest width or precision `sprintf` will honour.
pub const MAX_WIDTH: usize = 1_000_000;

#[derive(Debug, Default, Clone, Copy)]
struct Spec {
	minus: bool,
	plus: bool,
	sharp: bool,
	zero: bool,
	space: bool,
	width: Option<usize>,
	precision: Option<usize>,
}

pub fn sprintf(format: &str, args: &[Value]) -> String {
	let mut out = String::with_capacity(format.len() + 16);
	let mut next_arg = 0usize;
	let mut chars = format.chars().peekable();

	while let Some(c) = chars.next() {
		if c != '%' {
			out.push(c);
			continue;
		}

		let mut spec = Spec::default();
		while let Some(&flag) = chars.peek() {
			match flag {
				'-' => spec.minus = true,
				'+' => spec.plus = true,
				'#' => spec.sharp = true,
				'0' => spec.zero = true,
				' ' => spec.space = true,
				_ => break,
			}
			chars.next();
		}

		if chars.peek() == Some(&'*') {
			chars.next();
			match star_argument(args, &mut next_arg) {
				Some(width) => spec.width = Some(width),
				None => out.push_str("%!(BADWIDTH)"),
			}
		} else if let Some(width) = parse_number(&mut chars) {
			match bounded(width) {
				Some(width) => spec.width = Some(width),
				None => out.push_str("%!(BADWIDTH)"),
			}
		}

		if chars.peek() == Some(&'.') {
			chars.next();
			if chars.peek() == Some(&'*') {
				chars.next();
				match star_argument(args, &mut next_arg) {
					Some(precision) => spec.precision = Some(precision),
					None => out.push_str("%!(BADPREC)"),
				}
			} else {
				match bounded(parse_number(&mut chars).unwrap_or(0)) {
					Some(precision) => spec.precision = Some(precision),
					None => out.push_str("%!(BADPREC)"),
				}
			}
		}

		let Some(verb) = chars.next() else {
			out.push_str("%!(NOVERB)");
			break;
		};

		if verb == '%' {
			out.push('%');
			continue;
		}

		let Some(arg) = args.get(next_arg) else {
			let _ = write!(out, "%!{verb}(MISSING)");
			continue;
		};
		next_arg += 1;

		match format_arg(arg, verb, &spec) {
			Some(rendered) => out.push_str(&rendered),
			None => out.push_str(&bad_verb(verb, arg)),
		}
	}

	if next_arg < args.len() {
		out.push_str("%!(EXTRA ");
		for (i, arg) in args[next_arg..].iter().enumerate() {
			if i > 0 {
				out.push_str(", ");
			}
			let _ = write!(out, "{}={}", arg.type_name(), arg);
		}
		out.push(')');
	}

	out
}

fn parse_number(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<usize> {
	let mut number: Option<usize> = None;
	while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
		number = Some(number.unwrap_or(0).saturating_mul(10).saturating_add(digit as usize));
		chars.next();
	}
	number
}

fn bounded(n: usize) -> Option<usize> {
	(n <= MAX_WIDTH).then_some(n)
}

fn star_argument(args: &[Value], next_arg: &mut usize) -> Option<usize> {
	let arg = args.get(*next_arg)?;
	*next_arg += 1;
	let n = match arg {
		Value::Int(v) => usize::try_from(*v).ok()?,
		Value::Uint(v) => usize::try_from(*v).ok()?,
		_ => return None,
	};
	bounded(n)
}

fn bad_verb(verb: char, arg: &Value) -> String {
	match arg {
		Value::Nil => format!("%!{verb}(<nil>)"),
		_ => format!("%!{verb}({}={})", arg.type_name(), arg),
	}
}

fn format_arg(arg: &Value, verb: char, spec: &Spec) -> Option<String> {
	if verb == 'T' {
		return Some(pad(arg.type_name().to_string(), spec, false));
	}

	match arg {
		Value::Nil => match verb {
			'v' => Some(pad("<nil>".to_string(), spec, false)),
			_ => None,
		},
		Value::Str(s) => format_str(s, verb, spec),
		Value::Int(v) => format_int(*v < 0, v.unsigned_abs(), verb, spec),
		Value::Uint(v) => format_int(false, *v, verb, spec),
		Value::Float(v) => format_float(*v, verb, spec),
		Value::Bool(v) => match verb {
			'v' | 't' => Some(pad(v.to_string(), spec, false)),
			_ => None,
		},
		Value::Error(err) => format_str(&err.to_string(), verb, spec),
		Value::Any(obj) => match verb {
			'v' if spec.sharp => Some(pad(format!("{obj:#?}"), spec, false)),
			'v' | 's' => Some(pad(format!("{obj:?}"), spec, false)),
			'q' => Some(pad(format!("{:?}", format!("{obj:?}")), spec, false)),
			_ => None,
		},
	}
}

fn format_str(s: &str, verb: char, spec: &Spec) -> Option<String> {
	let truncated: String = match spec.precision {
		Some(precision) => s.chars().take(precision).collect(),
		None => s.to_string(),
	};
	let rendered = match verb {
		'v' | 's' => truncated,
		'q' => format!("{truncated:?}"),
		'x' => hex_bytes(&truncated, false),
		'X' => hex_bytes(&truncated, true),
		_ => return None,
	};
	Some(pad(rendered, spec, false))
}

fn hex_bytes(s: &str, upper: bool) -> String {
	s.bytes()
		.map(|b| {
			if upper {
				format!("{b:02X}")
			} else {
				format!("{b:02x}")
			}
		})
		.collect()
}

fn format_int(negative: bool, magnitude: u64, verb: char, spec: &Spec) -> Option<String> {
	let digits = match verb {
		'v' | 'd' => magnitude.to_string(),
		'b' => format!("{magnitude:b}"),
		'o' => format!("{magnitude:o}"),
		'x' => format!("{magnitude:x}"),
		'X' => format!("{magnitude:X}"),
		'c' => {
			let c = u32::try_from(magnitude).ok().and_then(char::from_u32).unwrap_or('\u{FFFD}');
			return Some(pad(c.to_string(), spec, false));
		}
		'q' => {
			let c = u32::try_from(magnitude).ok().and_then(char::from_u32).unwrap_or('\u{FFFD}');
			return Some(pad(format!("{c:?}"), spec, false));
		}
		_ => return None,
	};

	let digits = match spec.precision {
		Some(precision) if digits.len() < precision => format!("{}{digits}", "0".repeat(precision - digits.len())),
		_ => digits,
	};

	let prefix = match (spec.sharp, verb) {
		(true, 'b') => "0b",
		(true, 'o') => "0",
		(true, 'x') => "0x",
		(true, 'X') => "0X",
		_ => "",
	};

	let mut rendered = String::with_capacity(digits.len() + 3);
	rendered.push_str(sign(negative, spec));
	rendered.push_str(prefix);
	rendered.push_str(&digits);
	// an explicit precision disables zero padding
	Some(pad(rendered, spec, spec.precision.is_none()))
}

fn sign(negative: bool, spec: &Spec) -> &'static str {
	if negative {
		"-"
	} else if spec.plus {
		"+"
	} else if spec.space {
		" "
	} else {
		""
	}
}

fn format_float(v: f64, verb: char, spec: &Spec) -> Option<String> {
	if v.is_nan() {
		return Some(pad("NaN".to_string(), spec, false));
	}
	if v.is_infinite() {
		let rendered = if v < 0.0 { "-Inf" } else { "+Inf" };
		return Some(pad(rendered.to_string(), spec, false));
	}

	let negative = v.is_sign_negative() && v != 0.0;
	let abs = v.abs();
	let body = match verb {
		'v' => format_float_shortest(abs),
		'f' | 'F' => {
			let precision = spec.precision.unwrap_or(6);
			format!("{abs:.precision$}")
		}
		'e' | 'E' => scientific(abs, spec.precision.unwrap_or(6), verb),
		'g' | 'G' => match spec.precision {
			None => {
				let shortest = format_float_shortest(abs);
				if verb == 'G' { shortest.to_uppercase() } else { shortest }
			}
			Some(precision) => general(abs, precision.max(1), verb, spec.sharp),
		},
		_ => return None,
	};

	let mut rendered = String::with_capacity(body.len() + 1);
	rendered.push_str(sign(negative, spec));
	rendered.push_str(&body);
	Some(pad(rendered, spec, true))
}

fn scientific(abs: f64, precision: usize, verb: char) -> String {
	let sci = format!("{abs:.precision$e}");
	let (mantissa, exp) = split_exponent(&sci);
	let marker = if verb.is_ascii_uppercase() { 'E' } else { 'e' };
	format!("{mantissa}{}", exponent_suffix(marker, exp))
}

fn general(abs: f64, precision: usize, verb: char, keep_zeros: bool) -> String {
	let digits = precision - 1;
	let sci = format!("{abs:.digits$e}");
	let (mantissa, exp) = split_exponent(&sci);
	let marker = if verb == 'G' { 'E' } else { 'e' };

	let precision = i32::try_from(precision).unwrap_or(i32::MAX);
	if exp < -4 || exp >= precision {
		let mantissa = if keep_zeros { mantissa.to_string() } else { strip_zeros(mantissa) };
		format!("{mantissa}{}", exponent_suffix(marker, exp))
	} else {
		let decimals = usize::try_from(precision.saturating_sub(1).saturating_sub(exp)).unwrap_or(0);
		let fixed = format!("{abs:.decimals$}");
		if keep_zeros { fixed } else { strip_zeros(&fixed) }
	}
}

fn strip_zeros(s: &str) -> String {
	if s.contains('.') {
		s.trim_end_matches('0').trim_end_matches('.').to_string()
	} else {
		s.to_string()
	}
}

fn pad(rendered: String, spec: &Spec, numeric: bool) -> String {
	let Some(width) = spec.width else {
		return rendered;
	};
	let len = rendered.chars().count();
	if len >= width {
		return rendered;
	}
	let fill = width - len;

	if spec.minus {
		return format!("{rendered}{}", " ".repeat(fill));
	}
	if spec.zero && numeric {
		// zeros go between the sign and the digits
		let sign_len = rendered.chars().take_while(|c| matches!(c, '+' | '-' | ' ')).count();
		let (sign, digits) = rendered.split_at(sign_len);
		return format!("{sign}{}{digits}", "0".repeat(fill));
	}
	format!("{}{rendered}", " ".repeat(fill))
}
