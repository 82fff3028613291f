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

macro_rules! overflowing {
	($op: expr, $overflow: expr) => (
		{
			let (overflow_x, overflow_overflow) = $op;
			$overflow |= overflow_overflow;
			overflow_x
		}
	);
	($op: expr) => (
		{
			let (overflow_x, _overflow_overflow) = $op;
			overflow_x
		}
	);
}

macro_rules! panic_on_overflow {
	($name: expr) => {
		if $name {
			panic!("arithmetic operation overflow")
		}
	}
}

/// `checked_*` and `wrapping_*` methods on top of the type's `overflowing_*`
/// methods.
macro_rules! impl_checked_ops {
	($name: ident) => {
		impl<const BITS: usize, const LIMBS: usize> $name<BITS, LIMBS> {
			/// Checked addition, `None` on overflow.
			pub fn checked_add(self, other: Self) -> Option<Self> {
				match self.overflowing_add(other) {
					(_, true) => None,
					(result, false) => Some(result),
				}
			}

			/// Checked subtraction, `None` on overflow.
			pub fn checked_sub(self, other: Self) -> Option<Self> {
				match self.overflowing_sub(other) {
					(_, true) => None,
					(result, false) => Some(result),
				}
			}

			/// Checked multiplication, `None` on overflow.
			pub fn checked_mul(self, other: Self) -> Option<Self> {
				match self.overflowing_mul(other) {
					(_, true) => None,
					(result, false) => Some(result),
				}
			}

			/// Checked division, `None` on overflow or division by zero.
			pub fn checked_div(self, other: Self) -> Option<Self> {
				match self.overflowing_div(other) {
					(_, true) => None,
					(result, false) => Some(result),
				}
			}

			/// Checked remainder, `None` on overflow or division by zero.
			pub fn checked_rem(self, other: Self) -> Option<Self> {
				match self.overflowing_rem(other) {
					(_, true) => None,
					(result, false) => Some(result),
				}
			}

			/// Checked negation, `None` on overflow.
			pub fn checked_neg(self) -> Option<Self> {
				match self.overflowing_neg() {
					(_, true) => None,
					(result, false) => Some(result),
				}
			}

			/// Checked exponentiation, `None` on overflow.
			pub fn checked_pow(self, exp: u32) -> Option<Self> {
				match self.overflowing_pow(exp) {
					(_, true) => None,
					(result, false) => Some(result),
				}
			}

			/// Wrapping (modular) addition.
			pub fn wrapping_add(self, other: Self) -> Self {
				overflowing!(self.overflowing_add(other))
			}

			/// Wrapping (modular) subtraction.
			pub fn wrapping_sub(self, other: Self) -> Self {
				overflowing!(self.overflowing_sub(other))
			}

			/// Wrapping (modular) multiplication.
			pub fn wrapping_mul(self, other: Self) -> Self {
				overflowing!(self.overflowing_mul(other))
			}

			/// Wrapping (modular) negation.
			pub fn wrapping_neg(self) -> Self {
				overflowing!(self.overflowing_neg())
			}

			/// Wrapping (modular) exponentiation.
			pub fn wrapping_pow(self, exp: u32) -> Self {
				overflowing!(self.overflowing_pow(exp))
			}
		}
	}
}

/// Trapping arithmetic operators on top of the type's `overflowing_*` methods,
/// plus the compound assignment forms.
macro_rules! impl_arith_ops {
	($name: ident) => {
		impl<const BITS: usize, const LIMBS: usize> ::std::ops::Add for $name<BITS, LIMBS> {
			type Output = Self;

			fn add(self, other: Self) -> Self {
				let (result, overflow) = self.overflowing_add(other);
				panic_on_overflow!(overflow);
				result
			}
		}

		impl<const BITS: usize, const LIMBS: usize> ::std::ops::Sub for $name<BITS, LIMBS> {
			type Output = Self;

			fn sub(self, other: Self) -> Self {
				let (result, overflow) = self.overflowing_sub(other);
				panic_on_overflow!(overflow);
				result
			}
		}

		impl<const BITS: usize, const LIMBS: usize> ::std::ops::Mul for $name<BITS, LIMBS> {
			type Output = Self;

			fn mul(self, other: Self) -> Self {
				let (result, overflow) = self.overflowing_mul(other);
				panic_on_overflow!(overflow);
				result
			}
		}

		impl<const BITS: usize, const LIMBS: usize> ::std::ops::Div for $name<BITS, LIMBS> {
			type Output = Self;

			fn div(self, other: Self) -> Self {
				assert!(!other.is_zero(), "attempt to divide by zero");
				let (result, overflow) = self.overflowing_div(other);
				panic_on_overflow!(overflow);
				result
			}
		}

		impl<const BITS: usize, const LIMBS: usize> ::std::ops::Rem for $name<BITS, LIMBS> {
			type Output = Self;

			fn rem(self, other: Self) -> Self {
				assert!(!other.is_zero(), "attempt to calculate the remainder with a divisor of zero");
				let (result, overflow) = self.overflowing_rem(other);
				panic_on_overflow!(overflow);
				result
			}
		}

		impl_arith_ops!(@assign $name, AddAssign, add_assign, Add, add);
		impl_arith_ops!(@assign $name, SubAssign, sub_assign, Sub, sub);
		impl_arith_ops!(@assign $name, MulAssign, mul_assign, Mul, mul);
		impl_arith_ops!(@assign $name, DivAssign, div_assign, Div, div);
		impl_arith_ops!(@assign $name, RemAssign, rem_assign, Rem, rem);
		impl_arith_ops!(@assign $name, BitAndAssign, bitand_assign, BitAnd, bitand);
		impl_arith_ops!(@assign $name, BitOrAssign, bitor_assign, BitOr, bitor);
		impl_arith_ops!(@assign $name, BitXorAssign, bitxor_assign, BitXor, bitxor);

		impl_arith_ops!(@shift $name, usize);
	};
	(@assign $name: ident, $assign: ident, $assign_fn: ident, $op: ident, $op_fn: ident) => {
		impl<const BITS: usize, const LIMBS: usize> ::std::ops::$assign for $name<BITS, LIMBS> {
			fn $assign_fn(&mut self, other: Self) {
				*self = ::std::ops::$op::$op_fn(*self, other);
			}
		}
	};
	(@shift $name: ident, $amount: ty) => {
		impl<const BITS: usize, const LIMBS: usize> ::std::ops::Shl<$amount> for $name<BITS, LIMBS> {
			type Output = Self;

			fn shl(self, shift: $amount) -> Self {
				self.shifted_left(shift as usize)
			}
		}

		impl<const BITS: usize, const LIMBS: usize> ::std::ops::Shr<$amount> for $name<BITS, LIMBS> {
			type Output = Self;

			fn shr(self, shift: $amount) -> Self {
				self.shifted_right(shift as usize)
			}
		}

		impl<const BITS: usize, const LIMBS: usize> ::std::ops::ShlAssign<$amount> for $name<BITS, LIMBS> {
			fn shl_assign(&mut self, shift: $amount) {
				*self = self.shifted_left(shift as usize);
			}
		}

		impl<const BITS: usize, const LIMBS: usize> ::std::ops::ShrAssign<$amount> for $name<BITS, LIMBS> {
			fn shr_assign(&mut self, shift: $amount) {
				*self = self.shifted_right(shift as usize);
			}
		}
	};
}
