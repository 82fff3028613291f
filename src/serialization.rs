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

//! Serde support. Values serialize as `0x` prefixed hex strings; signed
//! values as the hex of their two's complement bits.

use std::cmp;
use std::fmt;
use std::str::FromStr;

use rustc_hex::ToHex;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::int::Int;
use crate::uint::Uint;

fn to_hex<const BITS: usize, const LIMBS: usize>(value: &Uint<BITS, LIMBS>) -> String {
	let mut bytes = vec![0u8; (BITS + 7) / 8];
	value.to_big_endian(&mut bytes);
	let len = cmp::max((value.bits() + 7) / 8, 1);
	let mut hex = "0x".to_owned();
	hex.push_str(&bytes[bytes.len() - len..].to_hex());
	hex
}

fn from_hex<const BITS: usize, const LIMBS: usize>(value: &str) -> Result<Uint<BITS, LIMBS>, &'static str> {
	let digits = &value[2..];
	// 0x + one digit per nibble
	if digits.is_empty() || digits.len() > (BITS + 3) / 4 {
		return Err("Invalid length.");
	}
	if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
		return Err("Invalid hex value.");
	}
	Uint::from_str_radix(digits, 16).map_err(|_| "Invalid hex value.")
}

fn is_hex(value: &str) -> bool {
	value.starts_with("0x") || value.starts_with("0X")
}

impl<const BITS: usize, const LIMBS: usize> Serialize for Uint<BITS, LIMBS> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where S: Serializer {
		serializer.serialize_str(&to_hex(self))
	}
}

impl<const BITS: usize, const LIMBS: usize> Serialize for Int<BITS, LIMBS> {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where S: Serializer {
		serializer.serialize_str(&to_hex(&self.to_bits()))
	}
}

struct UintVisitor<const BITS: usize, const LIMBS: usize>;

impl<'de, const BITS: usize, const LIMBS: usize> Visitor<'de> for UintVisitor<BITS, LIMBS> {
	type Value = Uint<BITS, LIMBS>;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		write!(formatter, "a 0x-prefixed hex or decimal string of a {} bit unsigned integer", BITS)
	}

	fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> where E: de::Error {
		if is_hex(value) {
			from_hex(value).map_err(E::custom)
		} else {
			Uint::from_str(value).map_err(|_| E::custom("Invalid decimal value."))
		}
	}
}

struct IntVisitor<const BITS: usize, const LIMBS: usize>;

impl<'de, const BITS: usize, const LIMBS: usize> Visitor<'de> for IntVisitor<BITS, LIMBS> {
	type Value = Int<BITS, LIMBS>;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		write!(formatter, "a 0x-prefixed hex or decimal string of a {} bit signed integer", BITS)
	}

	fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> where E: de::Error {
		if is_hex(value) {
			from_hex(value).map(Int::from_bits).map_err(E::custom)
		} else {
			Int::from_str(value).map_err(|_| E::custom("Invalid decimal value."))
		}
	}
}

impl<'de, const BITS: usize, const LIMBS: usize> Deserialize<'de> for Uint<BITS, LIMBS> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where D: Deserializer<'de> {
		deserializer.deserialize_str(UintVisitor::<BITS, LIMBS>)
	}
}

impl<'de, const BITS: usize, const LIMBS: usize> Deserialize<'de> for Int<BITS, LIMBS> {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where D: Deserializer<'de> {
		deserializer.deserialize_str(IntVisitor::<BITS, LIMBS>)
	}
}
