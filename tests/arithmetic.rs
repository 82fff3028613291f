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

//! Overflow detection checked against native integers and `BigInt`.

use std::convert::TryFrom;

use ethcore_wideint::prelude::*;
use num_bigint::BigInt;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ROUNDS: usize = 2000;

fn init_log() {
	let _ = env_logger::try_init();
}

#[test]
fn u8_matches_native_exhaustively() {
	init_log();
	for a in 0..=u8::MAX {
		for b in 0..=u8::MAX {
			let (x, y) = (U8::truncating_from(a), U8::truncating_from(b));
			let native = |(value, overflow): (u8, bool)| (U8::truncating_from(value), overflow);

			assert_eq!(x.overflowing_add(y), native(a.overflowing_add(b)), "{} + {}", a, b);
			assert_eq!(x.overflowing_sub(y), native(a.overflowing_sub(b)), "{} - {}", a, b);
			assert_eq!(x.overflowing_mul(y), native(a.overflowing_mul(b)), "{} * {}", a, b);
			if b == 0 {
				assert_eq!(x.overflowing_div(y), (x, true));
				assert_eq!(x.overflowing_rem(y), (x, true));
			} else {
				assert_eq!(x.overflowing_div(y), native(a.overflowing_div(b)), "{} / {}", a, b);
				assert_eq!(x.overflowing_rem(y), native(a.overflowing_rem(b)), "{} % {}", a, b);
			}
			assert_eq!(x.cmp(&y), a.cmp(&b));
		}
	}
}

#[test]
fn i8_matches_native_exhaustively() {
	init_log();
	for a in i8::MIN..=i8::MAX {
		for b in i8::MIN..=i8::MAX {
			let (x, y) = (I8::truncating_from(a), I8::truncating_from(b));
			let native = |(value, overflow): (i8, bool)| (I8::truncating_from(value), overflow);

			assert_eq!(x.overflowing_add(y), native(a.overflowing_add(b)), "{} + {}", a, b);
			assert_eq!(x.overflowing_sub(y), native(a.overflowing_sub(b)), "{} - {}", a, b);
			assert_eq!(x.overflowing_mul(y), native(a.overflowing_mul(b)), "{} * {}", a, b);
			if b == 0 {
				assert_eq!(x.overflowing_div(y), (x, true));
				assert_eq!(x.overflowing_rem(y), (x, true));
			} else {
				assert_eq!(x.overflowing_div(y), native(a.overflowing_div(b)), "{} / {}", a, b);
				assert_eq!(x.overflowing_rem(y), native(a.overflowing_rem(b)), "{} % {}", a, b);
			}
			assert_eq!(x.cmp(&y), a.cmp(&b));
		}
		let x = I8::truncating_from(a);
		assert_eq!(x.overflowing_neg(), (I8::truncating_from(a.wrapping_neg()), a == i8::MIN));
		assert_eq!(i8::try_from(x), Ok(a));
	}
}

#[test]
fn i16_matches_native_sampled() {
	init_log();
	for a in (i16::MIN..=i16::MAX).step_by(251) {
		for b in (i16::MIN..=i16::MAX).step_by(241).chain(vec![-1, 0, 1, i16::MAX]) {
			let (x, y) = (I16::truncating_from(a), I16::truncating_from(b));
			let native = |(value, overflow): (i16, bool)| (I16::truncating_from(value), overflow);

			assert_eq!(x.overflowing_add(y), native(a.overflowing_add(b)));
			assert_eq!(x.overflowing_sub(y), native(a.overflowing_sub(b)));
			assert_eq!(x.overflowing_mul(y), native(a.overflowing_mul(b)));
			if b != 0 {
				assert_eq!(x.overflowing_div(y), native(a.overflowing_div(b)));
				assert_eq!(x.overflowing_rem(y), native(a.overflowing_rem(b)));
			}
		}
	}
}

#[test]
fn u24_matches_masked_u64_sampled() {
	init_log();
	const MAX: u64 = 0xff_ffff;
	let wide = |(value, overflow): (u64, bool)| (U24::truncating_from(value), overflow);

	for a in (0..=MAX).step_by(65_521).chain(vec![MAX]) {
		for b in (0..=MAX).step_by(61_483).chain(vec![1, MAX]) {
			let (x, y) = (U24::truncating_from(a), U24::truncating_from(b));

			assert_eq!(x.overflowing_add(y), wide((a + b, a + b > MAX)));
			assert_eq!(x.overflowing_sub(y), wide((a.wrapping_sub(b), b > a)));
			assert_eq!(x.overflowing_mul(y), wide((a * b, a * b > MAX)));
			if b != 0 {
				assert_eq!(x.overflowing_div(y), wide((a / b, false)));
				assert_eq!(x.overflowing_rem(y), wide((a % b, false)));
			}
		}
	}
}

#[test]
fn u64_and_u128_match_native_randomized() {
	init_log();
	let mut rng = StdRng::seed_from_u64(64);
	for _ in 0..ROUNDS {
		let (a, b): (u64, u64) = (rng.gen::<u64>() >> rng.gen_range(0, 64), rng.gen::<u64>() >> rng.gen_range(0, 64));
		let (x, y) = (U64::truncating_from(a), U64::truncating_from(b));
		let native = |(value, overflow): (u64, bool)| (U64::truncating_from(value), overflow);
		assert_eq!(x.overflowing_add(y), native(a.overflowing_add(b)));
		assert_eq!(x.overflowing_sub(y), native(a.overflowing_sub(b)));
		assert_eq!(x.overflowing_mul(y), native(a.overflowing_mul(b)));
		if b != 0 {
			assert_eq!(x.overflowing_div(y), native(a.overflowing_div(b)));
			assert_eq!(x.overflowing_rem(y), native(a.overflowing_rem(b)));
		}

		let (a, b): (u128, u128) = (rng.gen::<u128>() >> rng.gen_range(0, 128), rng.gen::<u128>() >> rng.gen_range(0, 128));
		let (x, y) = (U128::truncating_from(a), U128::truncating_from(b));
		let native = |(value, overflow): (u128, bool)| (U128::truncating_from(value), overflow);
		assert_eq!(x.overflowing_add(y), native(a.overflowing_add(b)));
		assert_eq!(x.overflowing_sub(y), native(a.overflowing_sub(b)));
		assert_eq!(x.overflowing_mul(y), native(a.overflowing_mul(b)));
		if b != 0 {
			assert_eq!(x.overflowing_div(y), native(a.overflowing_div(b)));
			assert_eq!(x.overflowing_rem(y), native(a.overflowing_rem(b)));
		}
		assert_eq!(x.to_string(), a.to_string());
		assert_eq!(format!("{:x}", x), format!("{:x}", a));
		assert_eq!(x.leading_zeros(), a.leading_zeros());
		assert_eq!(x.trailing_zeros(), a.trailing_zeros());
	}
}

#[test]
fn i128_matches_native_randomized() {
	init_log();
	let mut rng = StdRng::seed_from_u64(128);
	for _ in 0..ROUNDS {
		let a = (rng.gen::<i128>()) >> rng.gen_range(0, 128);
		let b = (rng.gen::<i128>()) >> rng.gen_range(0, 128);
		let (x, y) = (I128::truncating_from(a), I128::truncating_from(b));
		let native = |(value, overflow): (i128, bool)| (I128::truncating_from(value), overflow);

		assert_eq!(x.overflowing_add(y), native(a.overflowing_add(b)));
		assert_eq!(x.overflowing_sub(y), native(a.overflowing_sub(b)));
		assert_eq!(x.overflowing_mul(y), native(a.overflowing_mul(b)));
		if b != 0 {
			assert_eq!(x.overflowing_div(y), native(a.overflowing_div(b)));
			assert_eq!(x.overflowing_rem(y), native(a.overflowing_rem(b)));
		}
		let shift = rng.gen_range(0, 128usize);
		assert_eq!(x >> shift, I128::truncating_from(a >> shift));
		assert_eq!(x << shift, I128::truncating_from(a << shift));
		assert_eq!(x.cmp(&y), a.cmp(&b));
		assert_eq!(x.to_string(), a.to_string());
	}
}

fn random_u256(rng: &mut StdRng) -> U256 {
	let value = U256::from_limbs([rng.gen(), rng.gen(), rng.gen(), rng.gen()]);
	value >> rng.gen_range(0, 256usize)
}

fn random_i256(rng: &mut StdRng) -> I256 {
	let value = I256::from_bits(random_u256(rng) >> 1);
	if rng.gen() { value.twos_complement() } else { value }
}

macro_rules! assert_matches_oracle {
	($ty: ident, $x: expr, $y: expr) => {{
		let (x, y) = ($x, $y);
		let (a, b) = (x.to_big_int(), y.to_big_int());
		let oracle = |value: BigInt| ($ty::from_big_int_truncating(&value), $ty::from_big_int(&value).is_none());

		assert_eq!(x.overflowing_add(y), oracle(&a + &b), "{} + {}", a, b);
		assert_eq!(x.overflowing_sub(y), oracle(&a - &b), "{} - {}", a, b);
		assert_eq!(x.overflowing_mul(y), oracle(&a * &b), "{} * {}", a, b);
		if !y.is_zero() {
			assert_eq!(x.overflowing_div(y), oracle(&a / &b), "{} / {}", a, b);
			assert_eq!(x.overflowing_rem(y).0, $ty::from_big_int_truncating(&(&a % &b)), "{} % {}", a, b);
		}
		assert_eq!(x.cmp(&y), a.cmp(&b));
	}}
}

#[test]
fn u256_matches_big_int_randomized() {
	init_log();
	let mut rng = StdRng::seed_from_u64(256);
	for _ in 0..ROUNDS {
		assert_matches_oracle!(U256, random_u256(&mut rng), random_u256(&mut rng));
	}
	assert_matches_oracle!(U256, U256::MAX, U256::MAX);
	assert_matches_oracle!(U256, U256::MAX, U256::ONE);
}

#[test]
fn i256_matches_big_int_randomized() {
	init_log();
	let mut rng = StdRng::seed_from_u64(-256i64 as u64);
	for _ in 0..ROUNDS {
		assert_matches_oracle!(I256, random_i256(&mut rng), random_i256(&mut rng));
	}
	assert_matches_oracle!(I256, I256::MIN, I256::MINUS_ONE);
	assert_matches_oracle!(I256, I256::MIN, I256::MIN);
	assert_matches_oracle!(I256, I256::MAX, I256::MAX);
}

#[test]
fn full_width_matches_big_int_randomized() {
	init_log();
	let mut rng = StdRng::seed_from_u64(512);
	let base = BigInt::from(1u8) << 256usize;
	for _ in 0..ROUNDS / 10 {
		let (x, y) = (random_u256(&mut rng), random_u256(&mut rng));
		let (high, low) = x.multiplied_full_width(y);
		let product = x.to_big_int() * y.to_big_int();
		assert_eq!(high.to_big_int() * &base + low.to_big_int(), product);

		if !y.is_zero() && high < y {
			let (quotient, rem) = y.dividing_full_width((high, low));
			assert_eq!(quotient, x);
			assert!(rem.is_zero());
		}

		let divisor = random_u256(&mut rng);
		let dividend = (random_u256(&mut rng), random_u256(&mut rng));
		let value = dividend.0.to_big_int() * &base + dividend.1.to_big_int();
		match divisor.checked_dividing_full_width(dividend) {
			Some((quotient, rem)) => {
				assert_eq!(quotient.to_big_int(), &value / divisor.to_big_int());
				assert_eq!(rem.to_big_int(), &value % divisor.to_big_int());
			}
			None => assert!(divisor.is_zero() || dividend.0 >= divisor),
		}
	}
}

macro_rules! random_value {
	($ty: ident, $rng: expr) => {{
		let rng: &mut StdRng = $rng;
		let words: Vec<u64> = (0..4).map(|_| rng.gen()).collect();
		$ty::from_words(words) >> rng.gen_range(0, $ty::BITS as usize)
	}}
}

macro_rules! check_oracle_at_width {
	($ty: ident) => {{
		let mut rng = StdRng::seed_from_u64(1000 + $ty::BITS as u64);
		for _ in 0..ROUNDS {
			assert_matches_oracle!($ty, random_value!($ty, &mut rng), random_value!($ty, &mut rng));
		}
		assert_matches_oracle!($ty, $ty::MAX, $ty::MAX);
		assert_matches_oracle!($ty, $ty::MAX, $ty::ONE);
		assert_matches_oracle!($ty, $ty::ZERO, $ty::MAX);
	}}
}

#[test]
fn unaligned_widths_match_big_int_randomized() {
	init_log();
	check_oracle_at_width!(U72);
	check_oracle_at_width!(U136);
	check_oracle_at_width!(U200);
	check_oracle_at_width!(I72);
	check_oracle_at_width!(I136);
	check_oracle_at_width!(I200);
	assert_matches_oracle!(I136, I136::MIN, I136::MINUS_ONE);
	assert_matches_oracle!(I200, I200::MIN, I200::MIN);
}

macro_rules! check_full_width_at_width {
	($ty: ident) => {{
		let mut rng = StdRng::seed_from_u64(2000 + $ty::BITS as u64);
		let base = BigInt::from(1u8) << ($ty::BITS as usize);
		for _ in 0..ROUNDS / 10 {
			let (x, y) = (random_value!($ty, &mut rng), random_value!($ty, &mut rng));
			let (high, low) = x.multiplied_full_width(y);
			let product = x.to_big_int() * y.to_big_int();
			assert_eq!(high.to_big_int() * &base + low.to_big_int(), product, "{} * {}", x, y);

			if !y.is_zero() {
				assert_eq!(y.checked_dividing_full_width((high, low)), Some((x, $ty::ZERO)), "{} / {}", product, y);
			}

			let divisor = random_value!($ty, &mut rng);
			let (high, low) = (random_value!($ty, &mut rng), random_value!($ty, &mut rng).to_bits());
			let value = high.to_big_int() * &base + low.to_big_int();
			match divisor.checked_dividing_full_width((high, low)) {
				Some((quotient, rem)) => {
					assert_eq!(quotient.to_big_int(), &value / divisor.to_big_int());
					assert_eq!(rem.to_big_int(), &value % divisor.to_big_int());
				}
				None => assert!(divisor.is_zero() || $ty::from_big_int(&(&value / divisor.to_big_int())).is_none()),
			}
		}
	}}
}

#[test]
fn signed_full_width_matches_big_int_randomized() {
	init_log();
	check_full_width_at_width!(I72);
	check_full_width_at_width!(I136);
	check_full_width_at_width!(I200);
	check_full_width_at_width!(I256);
}
