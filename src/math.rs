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

//! Common math functions used when formatting.

/// Returns floor(log2(x)), zero for `x <= 1`.
pub fn log2(x: u64) -> u32 {
	if x <= 1 {
		return 0;
	}

	63 - x.leading_zeros()
}

/// Returns floor(log_radix(x)), zero for `x <= 1`.
pub fn log(mut x: u64, radix: u64) -> u32 {
	let mut n = 0;
	while x >= radix {
		x /= radix;
		n += 1;
	}
	n
}

/// Returns floor(log10(x)), zero for `x <= 1`.
pub fn log10(x: u64) -> u32 {
	log(x, 10)
}

/// Returns `base^exp`, `None` on overflow.
pub fn pow(base: u64, exp: u32) -> Option<u64> {
	let mut acc = 1u64;
	for _ in 0..exp {
		acc = acc.checked_mul(base)?;
	}
	Some(acc)
}

/// Upper bound of the number of digits of a `bits` wide value in `radix`.
pub fn max_digits(bits: usize, radix: u32) -> usize {
	if bits == 0 {
		return 1;
	}
	// each digit carries at least floor(log2(radix)) bits
	let per_digit = log2(radix as u64).max(1) as usize;
	(bits + per_digit - 1) / per_digit
}

/// Upper bound of the number of decimal digits of a `bits` wide value.
///
/// `1233 / 4096` slightly exceeds `log10(2)`.
pub fn max_decimal_digits(bits: usize) -> usize {
	bits * 1233 / 4096 + 1
}

/// Largest power of `radix` that fits a word, with its exponent.
///
/// Formatting divides by this chunk once per `digits` output characters.
pub fn word_chunk(radix: u32) -> (u64, u32) {
	let radix = radix as u64;
	let mut digits = 1;
	while pow(radix, digits + 1).is_some() {
		digits += 1;
	}
	let chunk = pow(radix, digits).unwrap_or(radix);
	(chunk, digits)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_log2() {
		assert_eq!(log2(0), 0);
		assert_eq!(log2(1), 0);
		assert_eq!(log2(2), 1);
		assert_eq!(log2(3), 1);
		assert_eq!(log2(16), 4);
		assert_eq!(log2(u64::MAX), 63);
	}

	#[test]
	fn test_log10() {
		assert_eq!(log10(0), 0);
		assert_eq!(log10(9), 0);
		assert_eq!(log10(10), 1);
		assert_eq!(log10(999), 2);
		assert_eq!(log10(u64::MAX), 19);
		assert_eq!(log(255, 16), 1);
		assert_eq!(log(256, 16), 2);
		assert_eq!(log(7, 2), 2);
	}

	#[test]
	fn test_pow() {
		assert_eq!(pow(10, 0), Some(1));
		assert_eq!(pow(10, 19), Some(10_000_000_000_000_000_000));
		assert_eq!(pow(10, 20), None);
		assert_eq!(pow(2, 63), Some(1 << 63));
		assert_eq!(pow(2, 64), None);
	}

	#[test]
	fn digit_bounds() {
		assert_eq!(max_decimal_digits(8), 3);
		assert_eq!(max_decimal_digits(64), 20);
		assert!(max_decimal_digits(256) >= 78);
		assert_eq!(max_digits(256, 16), 64);
		assert_eq!(max_digits(24, 2), 24);
		assert!(max_digits(24, 10) >= 8);
	}

	#[test]
	fn chunks() {
		assert_eq!(word_chunk(10), (10_000_000_000_000_000_000, 19));
		assert_eq!(word_chunk(16), (1 << 60, 15));
		assert_eq!(word_chunk(2), (1 << 63, 63));
		assert_eq!(word_chunk(8), (1 << 63, 21));
	}
}
