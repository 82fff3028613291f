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

//! Fixed-width unsigned integers.
//!
//! `Uint<BITS, LIMBS>` stores a `BITS` wide value in `LIMBS` little-endian
//! words. Arithmetic works directly on the words with carry propagation;
//! only conversions and parsing go through `BigInt`.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};
use std::str::FromStr;

use num_bigint::BigInt;

use crate::bridge;
use crate::convert::BinaryInteger;
use crate::error::{ParseIntError, ParseIntErrorKind};
use crate::int::Int;
use crate::math;
use crate::words::{self, WORD_BITS};

const DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

#[inline(always)]
fn carrying_add(x: u64, y: u64, carry: bool) -> (u64, bool) {
	let (a, b) = x.overflowing_add(y);
	let (c, d) = a.overflowing_add(carry as u64);
	(c, b || d)
}

#[inline(always)]
fn borrowing_sub(x: u64, y: u64, borrow: bool) -> (u64, bool) {
	let (a, b) = x.overflowing_sub(y);
	let (c, d) = a.overflowing_sub(borrow as u64);
	(c, b || d)
}

/// `x * y + add + carry` as (low, high) words. Cannot overflow.
#[inline(always)]
fn carrying_mul(x: u64, y: u64, add: u64, carry: u64) -> (u64, u64) {
	let wide = x as u128 * y as u128 + add as u128 + carry as u128;
	(wide as u64, (wide >> 64) as u64)
}

/// Little-endian fixed-width unsigned integer.
///
/// `LIMBS` must equal `ceil(BITS / 64)`; use the aliases in `catalog`
/// (`U8` ... `U256`) rather than spelling it out.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct Uint<const BITS: usize, const LIMBS: usize>([u64; LIMBS]);

impl<const BITS: usize, const LIMBS: usize> Uint<BITS, LIMBS> {
	/// Width of the type in bits.
	pub const BITS: u32 = BITS as u32;

	pub(crate) const MASK: u64 = words::top_word_mask(BITS);

	const SHAPE: () = assert!(BITS > 0 && LIMBS == words::word_count(BITS), "LIMBS must equal ceil(BITS / 64)");

	/// Zero.
	pub const ZERO: Self = Uint([0; LIMBS]);

	/// One.
	pub const ONE: Self = {
		let mut limbs = [0; LIMBS];
		limbs[0] = 1;
		Uint(limbs)
	};

	/// Smallest value, zero.
	pub const MIN: Self = Self::ZERO;

	/// Largest value, `2^BITS - 1`.
	pub const MAX: Self = {
		let mut limbs = [u64::MAX; LIMBS];
		limbs[LIMBS - 1] = Self::MASK;
		Uint(limbs)
	};

	/// Build from little-endian words, dropping bits above `BITS`.
	pub const fn from_limbs(mut limbs: [u64; LIMBS]) -> Self {
		let () = Self::SHAPE;
		limbs[LIMBS - 1] &= Self::MASK;
		Uint(limbs)
	}

	/// Build from any number of little-endian words. Missing words are zero,
	/// excess words and bits above `BITS` are dropped.
	pub fn from_words<I>(raw: I) -> Self where I: IntoIterator<Item = u64> {
		let () = Self::SHAPE;
		Uint(words::normalize(raw, BITS, false))
	}

	/// Little-endian storage words.
	pub const fn as_limbs(&self) -> &[u64; LIMBS] {
		&self.0
	}

	/// Little-endian storage words.
	pub const fn into_limbs(self) -> [u64; LIMBS] {
		self.0
	}

	/// Convert from any integer, keeping the low `BITS` bits of its two's
	/// complement representation.
	pub fn truncating_from<T: BinaryInteger>(value: T) -> Self {
		let () = Self::SHAPE;
		Uint(words::normalize(value.words(), BITS, T::SIGNED))
	}

	/// Convert from any integer, `None` if the value does not fit.
	pub fn exact_from<T: BinaryInteger>(value: T) -> Option<Self> {
		Self::from_big_int(&value.to_big_int())
	}

	/// Value as an arbitrary precision integer.
	pub fn to_big_int(&self) -> BigInt {
		bridge::to_oracle(&self.0, BITS, false)
	}

	/// Low `BITS` bits of `value`, two's complement for negative input.
	pub fn from_big_int_truncating(value: &BigInt) -> Self {
		let () = Self::SHAPE;
		Uint(bridge::from_oracle(value, BITS))
	}

	/// `value` if it is in `0..=MAX`.
	pub fn from_big_int(value: &BigInt) -> Option<Self> {
		let () = Self::SHAPE;
		bridge::exact_from_oracle(value, BITS, false).map(Uint)
	}

	/// Parse text in the given radix, with an optional leading `+`. A leading
	/// `-` is an invalid digit, even for zero.
	pub fn from_str_radix(text: &str, radix: u32) -> Result<Self, ParseIntError> {
		let value = bridge::parse_radix(text, radix, false)?;
		Self::from_big_int(&value).ok_or_else(|| ParseIntErrorKind::Overflow.into())
	}

	/// Build from literal text: decimal, or `0x`, `0o`, `0b` prefixed, with
	/// optional `_` separators.
	///
	/// # Panics
	///
	/// When the text is malformed or the value does not fit.
	pub fn from_literal(text: &str) -> Self {
		match bridge::parse_literal(text, false).ok().and_then(|value| Self::from_big_int(&value)) {
			Some(value) => value,
			None => panic!("invalid {} bit unsigned literal: {}", BITS, text),
		}
	}

	/// Whether the value is zero.
	pub fn is_zero(&self) -> bool {
		self.0.iter().all(|word| *word == 0)
	}

	/// Least number of bits needed to represent the value.
	pub fn bits(&self) -> usize {
		BITS - self.leading_zeros() as usize
	}

	/// Whether bit `index` is set. Bits at `BITS` and above read as unset.
	pub fn bit(&self, index: usize) -> bool {
		index < BITS && self.0[index / WORD_BITS] >> (index % WORD_BITS) & 1 == 1
	}

	fn set_bit(&mut self, index: usize) {
		self.0[index / WORD_BITS] |= 1 << (index % WORD_BITS);
	}

	/// Byte `index`, counting from the least significant.
	pub fn byte(&self, index: usize) -> u8 {
		if index >= LIMBS * 8 {
			return 0;
		}
		(self.0[index / 8] >> (index % 8 * 8)) as u8
	}

	/// Zero bits above the most significant set bit, within `BITS`.
	pub fn leading_zeros(&self) -> u32 {
		let mut zeros = 0;
		for word in self.0.iter().rev() {
			zeros += word.leading_zeros();
			if *word != 0 {
				break;
			}
		}
		// unused high bits of the top word are not part of the value
		zeros - words::padding_bits(BITS)
	}

	/// Zero bits below the least significant set bit; `BITS` for zero.
	pub fn trailing_zeros(&self) -> u32 {
		let mut zeros = 0;
		for word in self.0.iter() {
			if *word != 0 {
				return zeros + word.trailing_zeros();
			}
			zeros += WORD_BITS as u32;
		}
		BITS as u32
	}

	/// Number of set bits.
	pub fn count_ones(&self) -> u32 {
		self.0.iter().map(|word| word.count_ones()).sum()
	}

	/// Number of unset bits within `BITS`.
	pub fn count_zeros(&self) -> u32 {
		BITS as u32 - self.count_ones()
	}

	/// One bits above the most significant zero bit.
	pub fn leading_ones(&self) -> u32 {
		(!*self).leading_zeros()
	}

	/// One bits below the least significant zero bit.
	pub fn trailing_ones(&self) -> u32 {
		(!*self).trailing_zeros()
	}

	/// Reverse the byte order within `BITS`.
	///
	/// # Panics
	///
	/// When `BITS` is not a multiple of 8.
	pub fn byte_swap(self) -> Self {
		assert!(BITS % 8 == 0, "byte swap of a {} bit integer", BITS);
		let bytes = BITS / 8;
		let mut ret = [0u64; LIMBS];
		for index in 0..bytes {
			let mirrored = bytes - 1 - index;
			ret[mirrored / 8] |= (self.byte(index) as u64) << (mirrored % 8 * 8);
		}
		Uint(ret)
	}

	/// Two's complement, i.e. `2^BITS - self` wrapped to zero for zero.
	pub fn twos_complement(self) -> Self {
		(!self).wrapping_add(Self::ONE)
	}

	/// Add returning result and overflow flag.
	pub fn overflowing_add(self, other: Self) -> (Self, bool) {
		let mut ret = [0u64; LIMBS];
		let mut carry = false;
		for i in 0..LIMBS {
			let (word, overflow) = carrying_add(self.0[i], other.0[i], carry);
			ret[i] = word;
			carry = overflow;
		}
		let overflow = carry || ret[LIMBS - 1] & !Self::MASK != 0;
		ret[LIMBS - 1] &= Self::MASK;
		(Uint(ret), overflow)
	}

	/// Subtract returning result and overflow (borrow) flag.
	pub fn overflowing_sub(self, other: Self) -> (Self, bool) {
		let mut ret = [0u64; LIMBS];
		let mut borrow = false;
		for i in 0..LIMBS {
			let (word, overflow) = borrowing_sub(self.0[i], other.0[i], borrow);
			ret[i] = word;
			borrow = overflow;
		}
		ret[LIMBS - 1] &= Self::MASK;
		(Uint(ret), borrow)
	}

	/// Multiply returning the low `BITS` bits and overflow flag.
	pub fn overflowing_mul(self, other: Self) -> (Self, bool) {
		let mut ret = [0u64; LIMBS];
		let mut overflow = false;

		for i in 0..LIMBS {
			if self.0[i] == 0 {
				continue;
			}

			let mut carry = 0u64;
			for j in 0..LIMBS - i {
				let (word, high) = carrying_mul(self.0[i], other.0[j], ret[i + j], carry);
				ret[i + j] = word;
				carry = high;
			}
			// anything landing at or above word `LIMBS` is lost
			overflow |= carry != 0 || other.0[LIMBS - i..].iter().any(|word| *word != 0);
		}

		overflow |= ret[LIMBS - 1] & !Self::MASK != 0;
		ret[LIMBS - 1] &= Self::MASK;
		(Uint(ret), overflow)
	}

	/// Divide returning quotient and overflow flag. Dividing by zero gives
	/// `(self, true)`.
	pub fn overflowing_div(self, other: Self) -> (Self, bool) {
		if other.is_zero() {
			return (self, true);
		}
		(self.div_rem(other).0, false)
	}

	/// Remainder and overflow flag. Dividing by zero gives `(self, true)`.
	pub fn overflowing_rem(self, other: Self) -> (Self, bool) {
		if other.is_zero() {
			return (self, true);
		}
		(self.div_rem(other).1, false)
	}

	/// Negation in two's complement; overflows for any nonzero value.
	pub fn overflowing_neg(self) -> (Self, bool) {
		(self.twos_complement(), !self.is_zero())
	}

	/// Exponentiation by squaring, returning wrapped result and overflow flag.
	pub fn overflowing_pow(self, mut exp: u32) -> (Self, bool) {
		let mut base = self;
		let mut acc = Self::ONE;
		let mut overflow = false;

		while exp > 0 {
			if exp & 1 == 1 {
				acc = overflowing!(acc.overflowing_mul(base), overflow);
			}
			exp >>= 1;
			if exp > 0 {
				base = overflowing!(base.overflowing_mul(base), overflow);
			}
		}
		(acc, overflow)
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

	/// Shift left, `None` when `shift >= BITS`.
	pub fn checked_shl(self, shift: u32) -> Option<Self> {
		if shift as usize >= BITS { None } else { Some(self.shifted_left(shift as usize)) }
	}

	/// Shift right, `None` when `shift >= BITS`.
	pub fn checked_shr(self, shift: u32) -> Option<Self> {
		if shift as usize >= BITS { None } else { Some(self.shifted_right(shift as usize)) }
	}

	/// Shift left by `shift % BITS`.
	pub fn wrapping_shl(self, shift: u32) -> Self {
		self.shifted_left(shift as usize % BITS)
	}

	/// Shift right by `shift % BITS`.
	pub fn wrapping_shr(self, shift: u32) -> Self {
		self.shifted_right(shift as usize % BITS)
	}

	/// Quotient and remainder of the `2 * BITS` wide `(high, low)` dividend.
	///
	/// # Panics
	///
	/// When the quotient does not fit `BITS` bits, including division by zero.
	pub fn dividing_full_width(self, dividend: (Self, Self)) -> (Self, Self) {
		match self.checked_dividing_full_width(dividend) {
			Some(result) => result,
			None => panic!("quotient overflow in full width division"),
		}
	}

	/// Quotient and remainder of the `2 * BITS` wide `(high, low)` dividend,
	/// `None` when the quotient does not fit `BITS` bits.
	pub fn checked_dividing_full_width(self, dividend: (Self, Self)) -> Option<(Self, Self)> {
		let (high, low) = dividend;
		if high >= self {
			return None;
		}
		if high.is_zero() {
			return Some(low.div_rem(self));
		}

		// restoring division over the low half, bit by bit; `high < self`
		// keeps every partial remainder below the divisor
		let mut rem = high;
		let mut quotient = Self::ZERO;
		for i in (0..BITS).rev() {
			let carry = rem.bit(BITS - 1);
			rem = rem.shifted_left(1);
			if low.bit(i) {
				rem.0[0] |= 1;
			}
			if carry || rem >= self {
				rem = rem.wrapping_sub(self);
				quotient.set_bit(i);
			}
		}
		Some((quotient, rem))
	}

	/// Full `2 * BITS` wide product as `(high, low)`.
	pub fn multiplied_full_width(self, other: Self) -> (Self, Self) {
		let mut low = [0u64; LIMBS];
		let mut high = [0u64; LIMBS];

		for i in 0..LIMBS {
			let mut carry = 0u64;
			for j in 0..LIMBS {
				let slot = if i + j < LIMBS { &mut low[i + j] } else { &mut high[i + j - LIMBS] };
				let (word, next) = carrying_mul(self.0[i], other.0[j], *slot, carry);
				*slot = word;
				carry = next;
			}
			high[i] = carry;
		}

		// split the product at bit `BITS` rather than at the word boundary
		let word = |k: usize| match k {
			k if k < LIMBS => low[k],
			k if k < 2 * LIMBS => high[k - LIMBS],
			_ => 0,
		};
		let offset = BITS / WORD_BITS;
		let shift = BITS % WORD_BITS;
		let upper = (0..LIMBS).map(|j| match shift {
			0 => word(offset + j),
			_ => word(offset + j) >> shift | word(offset + j + 1) << (WORD_BITS - shift),
		});

		(Self::from_words(upper), Self::from_limbs(low))
	}

	/// Signed distance from `self` to `other`, `None` if it does not fit the
	/// same-width signed type.
	pub fn checked_distance_to(self, other: Self) -> Option<Int<BITS, LIMBS>> {
		let distance = Int::from_bits(other.wrapping_sub(self));
		if (other >= self) != distance.is_negative() {
			Some(distance)
		} else {
			None
		}
	}

	/// Signed distance from `self` to `other`.
	///
	/// # Panics
	///
	/// When the distance does not fit the same-width signed type.
	pub fn distance_to(self, other: Self) -> Int<BITS, LIMBS> {
		match self.checked_distance_to(other) {
			Some(distance) => distance,
			None => panic!("arithmetic operation overflow"),
		}
	}

	/// `self` moved by a signed step, `None` when leaving `0..=MAX`.
	pub fn checked_advanced_by(self, step: Int<BITS, LIMBS>) -> Option<Self> {
		if step.is_negative() {
			self.checked_sub(step.unsigned_abs())
		} else {
			self.checked_add(step.to_bits())
		}
	}

	/// `self` moved by a signed step.
	///
	/// # Panics
	///
	/// When the result leaves `0..=MAX`.
	pub fn advanced_by(self, step: Int<BITS, LIMBS>) -> Self {
		match self.checked_advanced_by(step) {
			Some(value) => value,
			None => panic!("arithmetic operation overflow"),
		}
	}

	/// Digits of the value in `radix`, lowercase, without prefix.
	///
	/// # Panics
	///
	/// When `radix` is not in `2..=36`.
	pub fn to_str_radix(&self, radix: u32) -> String {
		assert!(radix >= 2 && radix <= 36, "radix must be in 2..=36, got {}", radix);
		if self.is_zero() {
			return "0".to_owned();
		}

		let (chunk, chunk_digits) = math::word_chunk(radix);
		let mut chunks = Vec::with_capacity(LIMBS + 1);
		let mut current = *self;
		while !current.is_zero() {
			let (quotient, rem) = current.div_rem_word(chunk);
			chunks.push(rem);
			current = quotient;
		}

		let capacity = match radix {
			10 => math::max_decimal_digits(self.bits()),
			_ => math::max_digits(self.bits(), radix),
		};
		let mut s = String::with_capacity(capacity);
		for (n, chunk) in chunks.iter().rev().enumerate() {
			let width = match n {
				0 => math::log(*chunk, radix as u64) + 1,
				_ => chunk_digits,
			};
			push_digits(&mut s, *chunk, radix, width);
		}
		s
	}

	pub(crate) fn shifted_left(self, shift: usize) -> Self {
		if shift >= BITS {
			return Self::ZERO;
		}
		let mut ret = [0u64; LIMBS];
		let word_shift = shift / WORD_BITS;
		let bit_shift = shift % WORD_BITS;

		// shift
		for i in word_shift..LIMBS {
			ret[i] = self.0[i - word_shift] << bit_shift;
		}
		// carry
		if bit_shift > 0 {
			for i in word_shift + 1..LIMBS {
				ret[i] |= self.0[i - 1 - word_shift] >> (WORD_BITS - bit_shift);
			}
		}
		ret[LIMBS - 1] &= Self::MASK;
		Uint(ret)
	}

	pub(crate) fn shifted_right(self, shift: usize) -> Self {
		if shift >= BITS {
			return Self::ZERO;
		}
		let mut ret = [0u64; LIMBS];
		let word_shift = shift / WORD_BITS;
		let bit_shift = shift % WORD_BITS;

		for i in word_shift..LIMBS {
			// shift
			ret[i - word_shift] |= self.0[i] >> bit_shift;
			// carry
			if bit_shift > 0 && i < LIMBS - 1 {
				ret[i - word_shift] |= self.0[i + 1] << (WORD_BITS - bit_shift);
			}
		}
		Uint(ret)
	}

	/// Quotient and remainder; `other` must be nonzero.
	pub(crate) fn div_rem(self, other: Self) -> (Self, Self) {
		debug_assert!(!other.is_zero());

		if other.0[1..].iter().all(|word| *word == 0) {
			let (quotient, rem) = self.div_rem_word(other.0[0]);
			return (quotient, Self::from_words(Some(rem)));
		}

		let my_bits = self.bits();
		let your_bits = other.bits();

		// Early return in case we are dividing by a larger number than us
		if my_bits < your_bits {
			return (Self::ZERO, self);
		}

		// Bitwise long division
		let mut shift = my_bits - your_bits;
		let mut rem = self;
		let mut divisor = other.shifted_left(shift);
		let mut quotient = Self::ZERO;
		loop {
			if rem >= divisor {
				quotient.set_bit(shift);
				rem = rem.wrapping_sub(divisor);
			}
			divisor = divisor.shifted_right(1);
			if shift == 0 {
				break;
			}
			shift -= 1;
		}
		(quotient, rem)
	}

	/// Division by a single nonzero word.
	fn div_rem_word(self, divisor: u64) -> (Self, u64) {
		let mut ret = [0u64; LIMBS];
		let mut rem = 0u64;
		for i in (0..LIMBS).rev() {
			let dividend = (rem as u128) << 64 | self.0[i] as u128;
			ret[i] = (dividend / divisor as u128) as u64;
			rem = (dividend % divisor as u128) as u64;
		}
		(Uint(ret), rem)
	}
}

impl_checked_ops!(Uint);
impl_arith_ops!(Uint);

impl<const BITS: usize, const LIMBS: usize> Uint<BITS, LIMBS> {
	/// Addition clamped to `MAX`.
	pub fn saturating_add(self, other: Self) -> Self {
		self.checked_add(other).unwrap_or(Self::MAX)
	}

	/// Subtraction clamped to zero.
	pub fn saturating_sub(self, other: Self) -> Self {
		self.checked_sub(other).unwrap_or(Self::ZERO)
	}

	/// Multiplication clamped to `MAX`.
	pub fn saturating_mul(self, other: Self) -> Self {
		self.checked_mul(other).unwrap_or(Self::MAX)
	}

	/// Write the value as `BITS / 8` big-endian bytes.
	///
	/// # Panics
	///
	/// When `bytes` is not exactly `ceil(BITS / 8)` long.
	pub fn to_big_endian(&self, bytes: &mut [u8]) {
		assert_eq!(bytes.len(), (BITS + 7) / 8);
		let len = bytes.len();
		for (i, byte) in bytes.iter_mut().enumerate() {
			*byte = self.byte(len - 1 - i);
		}
	}

	/// Write the value as `BITS / 8` little-endian bytes.
	///
	/// # Panics
	///
	/// When `bytes` is not exactly `ceil(BITS / 8)` long.
	pub fn to_little_endian(&self, bytes: &mut [u8]) {
		assert_eq!(bytes.len(), (BITS + 7) / 8);
		for (i, byte) in bytes.iter_mut().enumerate() {
			*byte = self.byte(i);
		}
	}

	/// Read big-endian bytes. Shorter input is zero extended, longer input
	/// keeps its low `BITS` bits.
	pub fn from_big_endian(bytes: &[u8]) -> Self {
		Self::from_words(words::pack_le_bytes(bytes.iter().rev().copied(), false))
	}

	/// Read little-endian bytes. Shorter input is zero extended, longer input
	/// keeps its low `BITS` bits.
	pub fn from_little_endian(bytes: &[u8]) -> Self {
		Self::from_words(words::pack_le_bytes(bytes.iter().copied(), false))
	}
}

fn push_digits(out: &mut String, mut value: u64, radix: u32, width: u32) {
	let mut buf = [b'0'; 64];
	let width = width as usize;
	for slot in buf[..width].iter_mut().rev() {
		*slot = DIGITS[(value % radix as u64) as usize];
		value /= radix as u64;
	}
	for digit in &buf[..width] {
		out.push(*digit as char);
	}
}

impl<const BITS: usize, const LIMBS: usize> Default for Uint<BITS, LIMBS> {
	fn default() -> Self {
		Self::ZERO
	}
}

impl<const BITS: usize, const LIMBS: usize> BitAnd for Uint<BITS, LIMBS> {
	type Output = Self;

	#[inline]
	fn bitand(self, other: Self) -> Self {
		let mut ret = [0u64; LIMBS];
		for i in 0..LIMBS {
			ret[i] = self.0[i] & other.0[i];
		}
		Uint(ret)
	}
}

impl<const BITS: usize, const LIMBS: usize> BitXor for Uint<BITS, LIMBS> {
	type Output = Self;

	#[inline]
	fn bitxor(self, other: Self) -> Self {
		let mut ret = [0u64; LIMBS];
		for i in 0..LIMBS {
			ret[i] = self.0[i] ^ other.0[i];
		}
		Uint(ret)
	}
}

impl<const BITS: usize, const LIMBS: usize> BitOr for Uint<BITS, LIMBS> {
	type Output = Self;

	#[inline]
	fn bitor(self, other: Self) -> Self {
		let mut ret = [0u64; LIMBS];
		for i in 0..LIMBS {
			ret[i] = self.0[i] | other.0[i];
		}
		Uint(ret)
	}
}

impl<const BITS: usize, const LIMBS: usize> Not for Uint<BITS, LIMBS> {
	type Output = Self;

	#[inline]
	fn not(self) -> Self {
		let mut ret = [0u64; LIMBS];
		for i in 0..LIMBS {
			ret[i] = !self.0[i];
		}
		ret[LIMBS - 1] &= Self::MASK;
		Uint(ret)
	}
}

impl<const BITS: usize, const LIMBS: usize> Ord for Uint<BITS, LIMBS> {
	fn cmp(&self, other: &Self) -> Ordering {
		for i in (0..LIMBS).rev() {
			match self.0[i].cmp(&other.0[i]) {
				Ordering::Equal => continue,
				ordering => return ordering,
			}
		}
		Ordering::Equal
	}
}

impl<const BITS: usize, const LIMBS: usize> PartialOrd for Uint<BITS, LIMBS> {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl<const BITS: usize, const LIMBS: usize> FromStr for Uint<BITS, LIMBS> {
	type Err = ParseIntError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		Self::from_str_radix(value, 10)
	}
}

impl<const BITS: usize, const LIMBS: usize> fmt::Debug for Uint<BITS, LIMBS> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		fmt::Display::fmt(self, f)
	}
}

impl<const BITS: usize, const LIMBS: usize> fmt::Display for Uint<BITS, LIMBS> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.pad_integral(true, "", &self.to_str_radix(10))
	}
}

impl<const BITS: usize, const LIMBS: usize> fmt::LowerHex for Uint<BITS, LIMBS> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.pad_integral(true, "0x", &self.to_str_radix(16))
	}
}

impl<const BITS: usize, const LIMBS: usize> fmt::UpperHex for Uint<BITS, LIMBS> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.pad_integral(true, "0x", &self.to_str_radix(16).to_uppercase())
	}
}

impl<const BITS: usize, const LIMBS: usize> fmt::Octal for Uint<BITS, LIMBS> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.pad_integral(true, "0o", &self.to_str_radix(8))
	}
}

impl<const BITS: usize, const LIMBS: usize> fmt::Binary for Uint<BITS, LIMBS> {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.pad_integral(true, "0b", &self.to_str_radix(2))
	}
}
