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

//! Fixed-width signed integers.
//!
//! `Int<BITS, LIMBS>` stores the two's complement bits of the value in a
//! `Uint<BITS, LIMBS>`. The sign is bit `BITS - 1`; nothing above it is ever
//! set in storage.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Neg, Not};
use std::str::FromStr;

use num_bigint::BigInt;

use crate::bridge;
use crate::convert::BinaryInteger;
use crate::error::{ParseIntError, ParseIntErrorKind};
use crate::uint::Uint;
use crate::words;

/// Negate a `2 * BITS` wide `(high, low)` pair in two's complement.
fn negate_pair<const BITS: usize, const LIMBS: usize>(
	high: Uint<BITS, LIMBS>,
	low: Uint<BITS, LIMBS>,
) -> (Uint<BITS, LIMBS>, Uint<BITS, LIMBS>) {
	let high = if low.is_zero() { high.twos_complement() } else { !high };
	(high, low.twos_complement())
}

/// Two's complement fixed-width signed integer.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Int<const BITS: usize, const LIMBS: usize>(Uint<BITS, LIMBS>);

impl<const BITS: usize, const LIMBS: usize> Int<BITS, LIMBS> {
	/// Width of the type in bits.
	pub const BITS: u32 = BITS as u32;

	/// Zero.
	pub const ZERO: Self = Int(Uint::ZERO);

	/// One.
	pub const ONE: Self = Int(Uint::ONE);

	/// Minus one, all bits set.
	pub const MINUS_ONE: Self = Int(Uint::MAX);

	/// Smallest value, `-2^(BITS - 1)`.
	pub const MIN: Self = {
		let mut limbs = [0u64; LIMBS];
		limbs[(BITS - 1) / words::WORD_BITS] = 1 << ((BITS - 1) % words::WORD_BITS);
		Int(Uint::from_limbs(limbs))
	};

	/// Largest value, `2^(BITS - 1) - 1`.
	pub const MAX: Self = {
		let mut limbs = [u64::MAX; LIMBS];
		limbs[LIMBS - 1] = Uint::<BITS, LIMBS>::MASK >> 1;
		Int(Uint::from_limbs(limbs))
	};

	/// Reinterpret unsigned bits as a signed value.
	pub const fn from_bits(bits: Uint<BITS, LIMBS>) -> Self {
		Int(bits)
	}

	/// Two's complement bits of the value.
	pub const fn to_bits(self) -> Uint<BITS, LIMBS> {
		self.0
	}

	/// Build from little-endian two's complement words, dropping bits above
	/// `BITS`.
	pub const fn from_limbs(limbs: [u64; LIMBS]) -> Self {
		Int(Uint::from_limbs(limbs))
	}

	/// Build from any number of little-endian two's complement words.
	/// Missing words repeat the sign of the last one given, excess words are
	/// dropped.
	pub fn from_words<I>(raw: I) -> Self where I: IntoIterator<Item = u64> {
		Int(Uint::from_limbs(words::normalize(raw, BITS, true)))
	}

	/// Little-endian two's complement storage words.
	pub const fn as_limbs(&self) -> &[u64; LIMBS] {
		self.0.as_limbs()
	}

	/// Little-endian two's complement storage words.
	pub const fn into_limbs(self) -> [u64; LIMBS] {
		self.0.into_limbs()
	}

	/// Convert from any integer, keeping the low `BITS` bits of its two's
	/// complement representation.
	pub fn truncating_from<T: BinaryInteger>(value: T) -> Self {
		Int(Uint::from_limbs(words::normalize(value.words(), BITS, T::SIGNED)))
	}

	/// Convert from any integer, `None` if the value does not fit.
	pub fn exact_from<T: BinaryInteger>(value: T) -> Option<Self> {
		Self::from_big_int(&value.to_big_int())
	}

	/// Value as an arbitrary precision integer.
	pub fn to_big_int(&self) -> BigInt {
		bridge::to_oracle(self.0.as_limbs(), BITS, true)
	}

	/// Low `BITS` bits of `value` in two's complement.
	pub fn from_big_int_truncating(value: &BigInt) -> Self {
		Int(Uint::from_big_int_truncating(value))
	}

	/// `value` if it is in `MIN..=MAX`.
	pub fn from_big_int(value: &BigInt) -> Option<Self> {
		bridge::exact_from_oracle(value, BITS, true).map(Self::from_limbs)
	}

	/// Parse text in the given radix, with an optional leading sign.
	pub fn from_str_radix(text: &str, radix: u32) -> Result<Self, ParseIntError> {
		let value = bridge::parse_radix(text, radix, true)?;
		Self::from_big_int(&value).ok_or_else(|| ParseIntErrorKind::Overflow.into())
	}

	/// Build from literal text: optional sign, then decimal or `0x`, `0o`,
	/// `0b` prefixed digits, with optional `_` separators.
	///
	/// # Panics
	///
	/// When the text is malformed or the value does not fit.
	pub fn from_literal(text: &str) -> Self {
		match bridge::parse_literal(text, true).ok().and_then(|value| Self::from_big_int(&value)) {
			Some(value) => value,
			None => panic!("invalid {} bit signed literal: {}", BITS, text),
		}
	}

	/// Whether the value is zero.
	pub fn is_zero(&self) -> bool {
		self.0.is_zero()
	}

	/// Whether the value is below zero.
	pub fn is_negative(&self) -> bool {
		words::sign_bit(self.0.as_limbs(), BITS)
	}

	/// Whether the value is above zero.
	pub fn is_positive(&self) -> bool {
		!self.is_negative() && !self.is_zero()
	}

	/// `-1`, `0` or `1` following the sign of the value.
	pub fn signum(&self) -> Self {
		if self.is_negative() {
			Self::MINUS_ONE
		} else if self.is_zero() {
			Self::ZERO
		} else {
			Self::ONE
		}
	}

	/// Absolute value as the same-width unsigned type. Never overflows.
	pub fn unsigned_abs(self) -> Uint<BITS, LIMBS> {
		if self.is_negative() { self.0.twos_complement() } else { self.0 }
	}

	/// Same as `unsigned_abs`.
	pub fn magnitude(self) -> Uint<BITS, LIMBS> {
		self.unsigned_abs()
	}

	/// Two's complement negation of the bits, wrapping `MIN` to itself.
	pub fn twos_complement(self) -> Self {
		Int(self.0.twos_complement())
	}

	/// Absolute value and overflow flag, set only for `MIN`.
	pub fn overflowing_abs(self) -> (Self, bool) {
		if self.is_negative() { self.overflowing_neg() } else { (self, false) }
	}

	/// Absolute value, `None` for `MIN`.
	pub fn checked_abs(self) -> Option<Self> {
		match self.overflowing_abs() {
			(_, true) => None,
			(result, false) => Some(result),
		}
	}

	/// Absolute value, wrapping `MIN` to itself.
	pub fn wrapping_abs(self) -> Self {
		overflowing!(self.overflowing_abs())
	}

	/// Absolute value.
	///
	/// # Panics
	///
	/// For `MIN`.
	pub fn abs(self) -> Self {
		let (result, overflow) = self.overflowing_abs();
		panic_on_overflow!(overflow);
		result
	}

	/// Negation and overflow flag, set only for `MIN`.
	pub fn overflowing_neg(self) -> (Self, bool) {
		(self.twos_complement(), self == Self::MIN)
	}

	/// Add returning result and overflow flag.
	pub fn overflowing_add(self, other: Self) -> (Self, bool) {
		let result = Int(self.0.wrapping_add(other.0));
		// operands of equal sign must keep it
		let overflow = self.is_negative() == other.is_negative() && result.is_negative() != self.is_negative();
		(result, overflow)
	}

	/// Subtract returning result and overflow flag.
	pub fn overflowing_sub(self, other: Self) -> (Self, bool) {
		let result = Int(self.0.wrapping_sub(other.0));
		let overflow = self.is_negative() != other.is_negative() && result.is_negative() != self.is_negative();
		(result, overflow)
	}

	/// Multiply returning the low `BITS` bits and overflow flag.
	pub fn overflowing_mul(self, other: Self) -> (Self, bool) {
		let result = Int(self.0.wrapping_mul(other.0));
		let (magnitude, overflow) = self.unsigned_abs().overflowing_mul(other.unsigned_abs());
		let negative = self.is_negative() != other.is_negative();
		(result, overflow || !Self::fits_magnitude(magnitude, negative))
	}

	/// Divide, truncating toward zero, returning quotient and overflow flag.
	/// Dividing by zero gives `(self, true)`, `MIN / -1` gives `(MIN, true)`.
	pub fn overflowing_div(self, other: Self) -> (Self, bool) {
		if other.is_zero() {
			return (self, true);
		}
		if self == Self::MIN && other == Self::MINUS_ONE {
			return (Self::MIN, true);
		}
		let (quotient, _) = self.unsigned_abs().div_rem(other.unsigned_abs());
		(Self::from_magnitude(quotient, self.is_negative() != other.is_negative()), false)
	}

	/// Remainder with the sign of `self`, and overflow flag. Dividing by zero
	/// gives `(self, true)`, `MIN % -1` gives `(0, true)`.
	pub fn overflowing_rem(self, other: Self) -> (Self, bool) {
		if other.is_zero() {
			return (self, true);
		}
		if self == Self::MIN && other == Self::MINUS_ONE {
			return (Self::ZERO, true);
		}
		let (_, rem) = self.unsigned_abs().div_rem(other.unsigned_abs());
		(Self::from_magnitude(rem, self.is_negative()), false)
	}

	/// Exponentiation returning wrapped result and overflow flag.
	pub fn overflowing_pow(self, exp: u32) -> (Self, bool) {
		let result = Int(self.0.wrapping_pow(exp));
		let (magnitude, overflow) = self.unsigned_abs().overflowing_pow(exp);
		let negative = self.is_negative() && exp % 2 == 1;
		(result, overflow || !Self::fits_magnitude(magnitude, negative))
	}

	/// `self^exp`.
	///
	/// # Panics
	///
	/// On overflow.
	pub fn pow(self, exp: u32) -> Self {
		let (result, overflow) = self.overflowing_pow(exp);
		panic_on_overflow!(overflow);
		result
	}

	/// Addition clamped to `MIN..=MAX`.
	pub fn saturating_add(self, other: Self) -> Self {
		match self.checked_add(other) {
			Some(result) => result,
			None if other.is_negative() => Self::MIN,
			None => Self::MAX,
		}
	}

	/// Subtraction clamped to `MIN..=MAX`.
	pub fn saturating_sub(self, other: Self) -> Self {
		match self.checked_sub(other) {
			Some(result) => result,
			None if other.is_negative() => Self::MAX,
			None => Self::MIN,
		}
	}

	/// Multiplication clamped to `MIN..=MAX`.
	pub fn saturating_mul(self, other: Self) -> Self {
		match self.checked_mul(other) {
			Some(result) => result,
			None if self.is_negative() != other.is_negative() => Self::MIN,
			None => Self::MAX,
		}
	}

	/// Shift left, `None` when `shift >= BITS`.
	pub fn checked_shl(self, shift: u32) -> Option<Self> {
		if shift as usize >= BITS { None } else { Some(self.shifted_left(shift as usize)) }
	}

	/// Arithmetic shift right, `None` when `shift >= BITS`.
	pub fn checked_shr(self, shift: u32) -> Option<Self> {
		if shift as usize >= BITS { None } else { Some(self.shifted_right(shift as usize)) }
	}

	/// Shift left by `shift % BITS`.
	pub fn wrapping_shl(self, shift: u32) -> Self {
		self.shifted_left(shift as usize % BITS)
	}

	/// Arithmetic shift right by `shift % BITS`.
	pub fn wrapping_shr(self, shift: u32) -> Self {
		self.shifted_right(shift as usize % BITS)
	}

	/// Least number of bits needed to represent the magnitude.
	pub fn bits(&self) -> usize {
		self.unsigned_abs().bits()
	}

	/// Whether bit `index` of the two's complement bits is set.
	pub fn bit(&self, index: usize) -> bool {
		self.0.bit(index)
	}

	/// Byte `index` of the two's complement bits, least significant first.
	pub fn byte(&self, index: usize) -> u8 {
		self.0.byte(index)
	}

	/// Zero bits above the most significant set bit.
	pub fn leading_zeros(&self) -> u32 {
		self.0.leading_zeros()
	}

	/// Zero bits below the least significant set bit; `BITS` for zero.
	pub fn trailing_zeros(&self) -> u32 {
		self.0.trailing_zeros()
	}

	/// One bits above the most significant zero bit.
	pub fn leading_ones(&self) -> u32 {
		self.0.leading_ones()
	}

	/// One bits below the least significant zero bit.
	pub fn trailing_ones(&self) -> u32 {
		self.0.trailing_ones()
	}

	/// Number of set bits.
	pub fn count_ones(&self) -> u32 {
		self.0.count_ones()
	}

	/// Number of unset bits.
	pub fn count_zeros(&self) -> u32 {
		self.0.count_zeros()
	}

	/// Reverse the byte order within `BITS`.
	///
	/// # Panics
	///
	/// When `BITS` is not a multiple of 8.
	pub fn byte_swap(self) -> Self {
		Int(self.0.byte_swap())
	}

	/// Write the two's complement bits as big-endian bytes.
	///
	/// # Panics
	///
	/// When `bytes` is not exactly `ceil(BITS / 8)` long.
	pub fn to_big_endian(&self, bytes: &mut [u8]) {
		self.0.to_big_endian(bytes)
	}

	/// Write the two's complement bits as little-endian bytes.
	///
	/// # Panics
	///
	/// When `bytes` is not exactly `ceil(BITS / 8)` long.
	pub fn to_little_endian(&self, bytes: &mut [u8]) {
		self.0.to_little_endian(bytes)
	}

	/// Read big-endian two's complement bytes. Shorter input is sign
	/// extended, longer input keeps its low `BITS` bits.
	pub fn from_big_endian(bytes: &[u8]) -> Self {
		Self::from_words(words::pack_le_bytes(bytes.iter().rev().copied(), true))
	}

	/// Read little-endian two's complement bytes. Shorter input is sign
	/// extended, longer input keeps its low `BITS` bits.
	pub fn from_little_endian(bytes: &[u8]) -> Self {
		Self::from_words(words::pack_le_bytes(bytes.iter().copied(), true))
	}

	/// Full `2 * BITS` wide product as `(high, low)`, where `high` carries the
	/// sign and `low` holds the low bits.
	pub fn multiplied_full_width(self, other: Self) -> (Self, Uint<BITS, LIMBS>) {
		let (high, low) = self.unsigned_abs().multiplied_full_width(other.unsigned_abs());
		let (high, low) = if self.is_negative() != other.is_negative() {
			negate_pair(high, low)
		} else {
			(high, low)
		};
		(Int(high), low)
	}

	/// Quotient and remainder of the `2 * BITS` wide `(high, low)` dividend.
	///
	/// The quotient truncates toward zero and the remainder takes the sign of
	/// the dividend.
	///
	/// # Panics
	///
	/// When the quotient does not fit `BITS` bits, including division by zero.
	pub fn dividing_full_width(self, dividend: (Self, Uint<BITS, LIMBS>)) -> (Self, Self) {
		match self.checked_dividing_full_width(dividend) {
			Some(result) => result,
			None => panic!("quotient overflow in full width division"),
		}
	}

	/// Quotient and remainder of the `2 * BITS` wide `(high, low)` dividend,
	/// `None` when the quotient does not fit `BITS` bits.
	pub fn checked_dividing_full_width(self, dividend: (Self, Uint<BITS, LIMBS>)) -> Option<(Self, Self)> {
		let (high, low) = dividend;
		let dividend_negative = high.is_negative();
		let magnitude = if dividend_negative { negate_pair(high.0, low) } else { (high.0, low) };

		let (quotient, rem) = self.unsigned_abs().checked_dividing_full_width(magnitude)?;
		let negative = dividend_negative != self.is_negative();
		if !Self::fits_magnitude(quotient, negative) {
			return None;
		}
		Some((Self::from_magnitude(quotient, negative), Self::from_magnitude(rem, dividend_negative)))
	}

	/// Distance from `self` to `other`, `None` on overflow.
	pub fn checked_distance_to(self, other: Self) -> Option<Self> {
		other.checked_sub(self)
	}

	/// Distance from `self` to `other`.
	///
	/// # Panics
	///
	/// When the distance does not fit.
	pub fn distance_to(self, other: Self) -> Self {
		other - self
	}

	/// `self` moved by `step`, `None` on overflow.
	pub fn checked_advanced_by(self, step: Self) -> Option<Self> {
		self.checked_add(step)
	}

	/// `self` moved by `step`.
	///
	/// # Panics
	///
	/// When the result does not fit.
	pub fn advanced_by(self, step: Self) -> Self {
		self + step
	}

	/// Digits of the value in `radix` with a leading `-` when negative.
	///
	/// # Panics
	///
	/// When `radix` is not in `2..=36`.
	pub fn to_str_radix(&self, radix: u32) -> String {
		let digits = self.unsigned_abs().to_str_radix(radix);
		if self.is_negative() { format!("-{}", digits) } else { digits }
	}

	pub(crate) fn shifted_left(self, shift: usize) -> Self {
		Int(self.0.shifted_left(shift))
	}

	pub(crate) fn shifted_right(self, shift: usize) -> Self {
		if !self.is_negative() {
			return Int(self.0.shifted_right(shift));
		}
		if shift >= BITS {
			return Self::MINUS_ONE;
		}
		Int(self.0.shifted_right(shift) | Uint::MAX.shifted_left(BITS - shift))
	}

	fn fits_magnitude(magnitude: Uint<BITS, LIMBS>, negative: bool) -> bool {
		if negative { magnitude <= Self::MIN.0 } else { magnitude < Self::MIN.0 }
	}

	fn from_magnitude(magnitude: Uint<BITS, LIMBS>, negative: bool) -> Self {
		if negative { Int(magnitude.twos_complement()) } else { Int(magnitude) }
	}
}

impl_checked_ops!(Int);
impl_arith_ops!(Int);

impl<const BITS: usize, const LIMBS: usize> Default for Int<BITS, LIMBS> {
	fn default() -> Self {
		Self::ZERO
	}
}

impl<const BITS: usize, const LIMBS: usize> Neg for Int<BITS, LIMBS> {
	type Output = Self;

	fn neg(self) -> Self {
		let (result, overflow) = self.overflowing_neg();
		panic_on_overflow!(overflow);
		result
	}
}

impl<const BITS: usize, const LIMBS: usize> BitAnd for Int<BITS, LIMBS> {
	type Output = Self;

	#[inline]
	fn bitand(self, other: Self) -> Self {
		Int(self.0 & other.0)
	}
}

impl<const BITS: usize, const LIMBS: usize> BitOr for Int<BITS, LIMBS> {
	type Output = Self;

	#[inline]
	fn bitor(self, other: Self) -> Self {
		Int(self.0 | other.0)
	}
}

impl<const BITS: usize, const LIMBS: usize> BitXor for Int<BITS, LIMBS> {
	type Output = Self;

	#[inline]
	fn bitxor(self, other: Self) -> Self {
		Int(self.0 ^ other.0)
	}
}

impl<const BITS: usize, const LIMBS: usize> Not for Int<BITS, LIMBS> {
	type Output = Self;

	#[inline]
	fn not(self) -> Self {
		Int(!self.0)
	}
}

impl<const BITS: usize, const LIMBS: usize> Ord for Int<BITS, LIMBS> {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self.is_negative(), other.is_negative()) {
			(false, true) => Ordering::Greater,
			(true, false) => Ordering::Less,
			// same sign, two's complement bits order like the values
			_ => self.0.cmp(&other.0),
		}
	}
}

impl<const BITS: usize, const LIMBS: usize> PartialOrd for Int<BITS, LIMBS> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<const BITS: usize, const LIMBS: usize> FromStr for Int<BITS, LIMBS> {
	type Err = ParseIntError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		Self::from_str_radix(value, 10)
	}
}

impl<const BITS: usize, const LIMBS: usize> fmt::Debug for Int<BITS, LIMBS> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}

impl<const BITS: usize, const LIMBS: usize> fmt::Display for Int<BITS, LIMBS> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.pad_integral(!self.is_negative(), "", &self.unsigned_abs().to_str_radix(10))
	}
}

// radix formats print the two's complement bits, like the primitive types

impl<const BITS: usize, const LIMBS: usize> fmt::LowerHex for Int<BITS, LIMBS> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::LowerHex::fmt(&self.0, f)
	}
}

impl<const BITS: usize, const LIMBS: usize> fmt::UpperHex for Int<BITS, LIMBS> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::UpperHex::fmt(&self.0, f)
	}
}

impl<const BITS: usize, const LIMBS: usize> fmt::Octal for Int<BITS, LIMBS> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Octal::fmt(&self.0, f)
	}
}

impl<const BITS: usize, const LIMBS: usize> fmt::Binary for Int<BITS, LIMBS> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Binary::fmt(&self.0, f)
	}
}
