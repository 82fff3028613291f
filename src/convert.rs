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

//! Conversions between wide integers, primitive integers and `BigInt`.

use std::convert::TryFrom;

use num_bigint::BigInt;
use num_traits::ToPrimitive;

use crate::error::TryFromIntError;
use crate::int::Int;
use crate::uint::Uint;
use crate::words;

/// Any integer usable as the source of a width-changing conversion.
pub trait BinaryInteger: Copy {
	/// Whether `words` is a two's complement encoding.
	const SIGNED: bool;

	/// Iterator over the little-endian words of the value.
	type Words: Iterator<Item = u64>;

	/// Little-endian words of the value, two's complement for signed types.
	/// The last word carries the sign in its top bit.
	fn words(&self) -> Self::Words;

	/// Exact value as an arbitrary precision integer.
	fn to_big_int(&self) -> BigInt;
}

impl<const BITS: usize, const LIMBS: usize> BinaryInteger for Uint<BITS, LIMBS> {
	const SIGNED: bool = false;
	type Words = std::array::IntoIter<u64, LIMBS>;

	fn words(&self) -> Self::Words {
		IntoIterator::into_iter(self.into_limbs())
	}

	fn to_big_int(&self) -> BigInt {
		Uint::to_big_int(self)
	}
}

impl<const BITS: usize, const LIMBS: usize> BinaryInteger for Int<BITS, LIMBS> {
	const SIGNED: bool = true;
	type Words = std::array::IntoIter<u64, LIMBS>;

	fn words(&self) -> Self::Words {
		IntoIterator::into_iter(words::sign_extend(self.into_limbs(), BITS))
	}

	fn to_big_int(&self) -> BigInt {
		Int::to_big_int(self)
	}
}

macro_rules! impl_primitive {
	($($t: ty => $wide: ty, $to: ident, $signed: expr;)*) => {$(
		impl BinaryInteger for $t {
			const SIGNED: bool = $signed;
			type Words = std::array::IntoIter<u64, 2>;

			fn words(&self) -> Self::Words {
				let wide = *self as $wide as u128;
				IntoIterator::into_iter([wide as u64, (wide >> 64) as u64])
			}

			fn to_big_int(&self) -> BigInt {
				BigInt::from(*self)
			}
		}

		impl<const BITS: usize, const LIMBS: usize> TryFrom<$t> for Uint<BITS, LIMBS> {
			type Error = TryFromIntError;

			fn try_from(value: $t) -> Result<Self, Self::Error> {
				Self::exact_from(value).ok_or(TryFromIntError)
			}
		}

		impl<const BITS: usize, const LIMBS: usize> TryFrom<$t> for Int<BITS, LIMBS> {
			type Error = TryFromIntError;

			fn try_from(value: $t) -> Result<Self, Self::Error> {
				Self::exact_from(value).ok_or(TryFromIntError)
			}
		}

		impl<const BITS: usize, const LIMBS: usize> TryFrom<Uint<BITS, LIMBS>> for $t {
			type Error = TryFromIntError;

			fn try_from(value: Uint<BITS, LIMBS>) -> Result<Self, Self::Error> {
				value.to_big_int().$to().ok_or(TryFromIntError)
			}
		}

		impl<const BITS: usize, const LIMBS: usize> TryFrom<Int<BITS, LIMBS>> for $t {
			type Error = TryFromIntError;

			fn try_from(value: Int<BITS, LIMBS>) -> Result<Self, Self::Error> {
				value.to_big_int().$to().ok_or(TryFromIntError)
			}
		}
	)*}
}

impl_primitive! {
	u8 => u128, to_u8, false;
	u16 => u128, to_u16, false;
	u32 => u128, to_u32, false;
	u64 => u128, to_u64, false;
	u128 => u128, to_u128, false;
	usize => u128, to_usize, false;
	i8 => i128, to_i8, true;
	i16 => i128, to_i16, true;
	i32 => i128, to_i32, true;
	i64 => i128, to_i64, true;
	i128 => i128, to_i128, true;
	isize => i128, to_isize, true;
}

impl<const BITS: usize, const LIMBS: usize> From<Uint<BITS, LIMBS>> for BigInt {
	fn from(value: Uint<BITS, LIMBS>) -> Self {
		value.to_big_int()
	}
}

impl<const BITS: usize, const LIMBS: usize> From<Int<BITS, LIMBS>> for BigInt {
	fn from(value: Int<BITS, LIMBS>) -> Self {
		value.to_big_int()
	}
}

impl<'a, const BITS: usize, const LIMBS: usize> TryFrom<&'a BigInt> for Uint<BITS, LIMBS> {
	type Error = TryFromIntError;

	fn try_from(value: &'a BigInt) -> Result<Self, Self::Error> {
		Self::from_big_int(value).ok_or(TryFromIntError)
	}
}

impl<'a, const BITS: usize, const LIMBS: usize> TryFrom<&'a BigInt> for Int<BITS, LIMBS> {
	type Error = TryFromIntError;

	fn try_from(value: &'a BigInt) -> Result<Self, Self::Error> {
		Self::from_big_int(value).ok_or(TryFromIntError)
	}
}
