// Copyright 2015-2020 Parity Technologies (UK) Ltd.
// This file is part of OpenEthereum.

// OpenEthereum is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// OpenEthereum is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.

// You should have received a copy of the GNU General Public License
// along with OpenEthereum.  If not, see <http://www.gnu.org/licenses/>.

//! Conversions between word storage and arbitrary precision integers.

use num_bigint::{BigInt, BigUint, Sign};
use num_traits::One;

use crate::error::{ParseIntError, ParseIntErrorKind};
use crate::words;

/// Value of canonical `limbs` as an arbitrary precision integer.
///
/// Signed values with bit `bits - 1` set are read as two's complement.
pub fn to_oracle(limbs: &[u64], bits: usize, signed: bool) -> BigInt {
	let mut bytes = Vec::with_capacity(limbs.len() * 8);
	for word in limbs {
		bytes.extend_from_slice(&word.to_le_bytes());
	}
	let value = BigInt::from(BigUint::from_bytes_le(&bytes));

	if signed && words::sign_bit(limbs, bits) {
		value - (BigInt::one() << bits)
	} else {
		value
	}
}

/// Low `bits` bits of `value` in two's complement. Never fails.
pub fn from_oracle<const LIMBS: usize>(value: &BigInt, bits: usize) -> [u64; LIMBS] {
	let fill = if value.sign() == Sign::Minus { 0xff } else { 0 };
	let bytes = value.to_signed_bytes_le();
	let raw = bytes.chunks(8).map(|chunk| {
		let mut word = [fill; 8];
		word[..chunk.len()].copy_from_slice(chunk);
		u64::from_le_bytes(word)
	});
	words::normalize(raw, bits, true)
}

/// Like `from_oracle`, but `None` unless the result reads back as `value`.
pub fn exact_from_oracle<const LIMBS: usize>(value: &BigInt, bits: usize, signed: bool) -> Option<[u64; LIMBS]> {
	let limbs = from_oracle(value, bits);
	if to_oracle(&limbs, bits, signed) == *value {
		Some(limbs)
	} else {
		trace!(
			target: "wideint",
			"{} does not fit in {} bit {} integer",
			value, bits, if signed { "signed" } else { "unsigned" },
		);
		None
	}
}

fn split_sign(text: &str, signed: bool) -> Result<(bool, &str), ParseIntError> {
	match text.as_bytes().first() {
		Some(b'-') if signed => Ok((true, &text[1..])),
		Some(b'-') => {
			trace!(target: "wideint", "rejected {:?}: minus sign for unsigned integer", text);
			Err(ParseIntErrorKind::InvalidDigit.into())
		}
		Some(b'+') => Ok((false, &text[1..])),
		_ => Ok((false, text)),
	}
}

fn parse_digits(digits: &str, radix: u32, negative: bool) -> Result<BigInt, ParseIntError> {
	if digits.is_empty() {
		return Err(ParseIntErrorKind::Empty.into());
	}
	if !digits.chars().all(|c| c.is_digit(radix)) {
		trace!(target: "wideint", "rejected {:?}: invalid digit for radix {}", digits, radix);
		return Err(ParseIntErrorKind::InvalidDigit.into());
	}
	let value = BigInt::parse_bytes(digits.as_bytes(), radix).ok_or(ParseIntErrorKind::InvalidDigit)?;
	Ok(if negative { -value } else { value })
}

/// Parse a number in `radix`, which must be in `2..=36`. A leading `+` is
/// always accepted, a leading `-` only when `signed`.
pub fn parse_radix(text: &str, radix: u32, signed: bool) -> Result<BigInt, ParseIntError> {
	if radix < 2 || radix > 36 {
		return Err(ParseIntErrorKind::InvalidRadix(radix).into());
	}
	let (negative, digits) = split_sign(text, signed)?;
	parse_digits(digits, radix, negative)
}

/// Parse literal text: optional sign, then decimal or `0x`, `0o`, `0b`
/// prefixed digits. `_` separators are ignored. A `-` is rejected unless
/// `signed`.
pub fn parse_literal(text: &str, signed: bool) -> Result<BigInt, ParseIntError> {
	let cleaned: String = text.chars().filter(|c| *c != '_').collect();
	let (negative, body) = split_sign(&cleaned, signed)?;
	let (radix, digits) = match body.get(..2) {
		Some("0x") | Some("0X") => (16, &body[2..]),
		Some("0o") | Some("0O") => (8, &body[2..]),
		Some("0b") | Some("0B") => (2, &body[2..]),
		_ => (10, body),
	};
	parse_digits(digits, radix, negative)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unsigned_to_oracle() {
		assert_eq!(to_oracle(&[0], 8, false), BigInt::from(0));
		assert_eq!(to_oracle(&[255], 8, false), BigInt::from(255));
		assert_eq!(to_oracle(&[0, 1], 128, false), BigInt::from(1u128 << 64));
		assert_eq!(to_oracle(&[u64::MAX, u64::MAX], 128, false), BigInt::from(u128::MAX));
	}

	#[test]
	fn signed_to_oracle() {
		assert_eq!(to_oracle(&[0xff], 8, true), BigInt::from(-1));
		assert_eq!(to_oracle(&[0x80], 8, true), BigInt::from(-128));
		assert_eq!(to_oracle(&[0x7f], 8, true), BigInt::from(127));
		assert_eq!(to_oracle(&[u64::MAX, 0xff], 72, true), BigInt::from(-1));
		assert_eq!(to_oracle(&[0, 0x8000_0000_0000_0000], 128, true), BigInt::from(i128::MIN));
	}

	#[test]
	fn from_oracle_truncates() {
		let ret: [u64; 1] = from_oracle(&BigInt::from(256), 8);
		assert_eq!(ret, [0]);
		let ret: [u64; 1] = from_oracle(&BigInt::from(-1), 8);
		assert_eq!(ret, [0xff]);
		let ret: [u64; 3] = from_oracle(&BigInt::from(-2), 136);
		assert_eq!(ret, [u64::MAX - 1, u64::MAX, 0xff]);
		let ret: [u64; 2] = from_oracle(&(BigInt::from(u128::MAX) + 5), 128);
		assert_eq!(ret, [4, 0]);
		let ret: [u64; 1] = from_oracle(&BigInt::from(0x1234_5678u64), 24);
		assert_eq!(ret, [0x34_5678]);
	}

	#[test]
	fn exact_from_oracle_checks_range() {
		assert_eq!(exact_from_oracle::<1>(&BigInt::from(256), 8, false), None);
		assert_eq!(exact_from_oracle::<1>(&BigInt::from(255), 8, false), Some([255]));
		assert_eq!(exact_from_oracle::<1>(&BigInt::from(-1), 8, false), None);
		assert_eq!(exact_from_oracle::<1>(&BigInt::from(-1), 8, true), Some([0xff]));
		assert_eq!(exact_from_oracle::<1>(&BigInt::from(128), 8, true), None);
		assert_eq!(exact_from_oracle::<1>(&BigInt::from(-128), 8, true), Some([0x80]));
		assert_eq!(exact_from_oracle::<1>(&BigInt::from(-129), 8, true), None);
		assert_eq!(exact_from_oracle::<4>(&(BigInt::one() << 255), 256, true), None);
		assert_eq!(exact_from_oracle::<4>(&(BigInt::one() << 255), 256, false), Some([0, 0, 0, 1 << 63]));
	}

	#[test]
	fn parses_radix() {
		assert_eq!(parse_radix("ff", 16, true), Ok(BigInt::from(255)));
		assert_eq!(parse_radix("-101", 2, true), Ok(BigInt::from(-5)));
		assert_eq!(parse_radix("+z", 36, true), Ok(BigInt::from(35)));
		assert_eq!(parse_radix("", 10, true).unwrap_err().kind(), ParseIntErrorKind::Empty);
		assert_eq!(parse_radix("-", 10, true).unwrap_err().kind(), ParseIntErrorKind::Empty);
		assert_eq!(parse_radix("12a", 10, true).unwrap_err().kind(), ParseIntErrorKind::InvalidDigit);
		assert_eq!(parse_radix("1_000", 10, true).unwrap_err().kind(), ParseIntErrorKind::InvalidDigit);
		assert_eq!(parse_radix("--1", 10, true).unwrap_err().kind(), ParseIntErrorKind::InvalidDigit);
		assert_eq!(parse_radix("1", 37, true).unwrap_err().kind(), ParseIntErrorKind::InvalidRadix(37));
	}

	#[test]
	fn parses_literals() {
		assert_eq!(parse_literal("1_000", true), Ok(BigInt::from(1000)));
		assert_eq!(parse_literal("0xff", true), Ok(BigInt::from(255)));
		assert_eq!(parse_literal("-0x80", true), Ok(BigInt::from(-128)));
		assert_eq!(parse_literal("0o17", true), Ok(BigInt::from(15)));
		assert_eq!(parse_literal("0b1010_1010", true), Ok(BigInt::from(0xaa)));
		assert_eq!(parse_literal("0x", true).unwrap_err().kind(), ParseIntErrorKind::Empty);
		assert_eq!(parse_literal("0x-1", true).unwrap_err().kind(), ParseIntErrorKind::InvalidDigit);
	}

	#[test]
	fn unsigned_rejects_minus() {
		assert_eq!(parse_radix("-0", 10, false).unwrap_err().kind(), ParseIntErrorKind::InvalidDigit);
		assert_eq!(parse_radix("-ff", 16, false).unwrap_err().kind(), ParseIntErrorKind::InvalidDigit);
		assert_eq!(parse_radix("+7", 10, false), Ok(BigInt::from(7)));
		assert_eq!(parse_literal("-0x0", false).unwrap_err().kind(), ParseIntErrorKind::InvalidDigit);
		assert_eq!(parse_literal("0x7", false), Ok(BigInt::from(7)));
	}
}
