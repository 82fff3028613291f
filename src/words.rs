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

//! Word storage for fixed-width integers.
//!
//! Every wide integer keeps its value in `word_count(BITS)` little-endian
//! 64-bit words, with all bits at positions `>= BITS` cleared.

/// Number of bits in a machine word.
pub const WORD_BITS: usize = 64;

/// Number of words needed to hold `bits` bits.
pub const fn word_count(bits: usize) -> usize {
	(bits + WORD_BITS - 1) / WORD_BITS
}

/// Number of unused bits at the top of the most significant word.
pub const fn padding_bits(bits: usize) -> u32 {
	(word_count(bits) * WORD_BITS - bits) as u32
}

/// Mask of the bits of the most significant word that belong to the value.
pub const fn top_word_mask(bits: usize) -> u64 {
	u64::MAX >> padding_bits(bits)
}

/// Canonicalize `raw` into exactly `LIMBS` words for a `bits` wide value.
///
/// Shorter input is extended, with all-ones words if `signed` is set and the
/// last raw word has its top bit set, zeros otherwise. Longer input loses its
/// excess most significant words. The top word is always masked, so bits
/// above `bits` carried by in-range words are dropped as well.
pub fn normalize<I, const LIMBS: usize>(raw: I, bits: usize, signed: bool) -> [u64; LIMBS]
	where I: IntoIterator<Item = u64>
{
	debug_assert_eq!(LIMBS, word_count(bits));

	let mut ret = [0u64; LIMBS];
	let mut len = 0;
	let mut last = None;
	for word in raw.into_iter().take(LIMBS) {
		ret[len] = word;
		last = Some(word);
		len += 1;
	}

	if len < LIMBS {
		let negative = signed && last.map_or(false, |w| w >> (WORD_BITS - 1) == 1);
		let pad = if negative { u64::MAX } else { 0 };
		for word in ret[len..].iter_mut() {
			*word = pad;
		}
	}

	if LIMBS > 0 {
		ret[LIMBS - 1] &= top_word_mask(bits);
	}
	ret
}

/// Whether bit `bits - 1` of a canonical value is set.
pub fn sign_bit(limbs: &[u64], bits: usize) -> bool {
	let index = bits - 1;
	limbs[index / WORD_BITS] >> (index % WORD_BITS) & 1 == 1
}

/// Full-word view of a canonical signed value: the sign bit replicated
/// through the padding bits of the top word.
pub fn sign_extend<const LIMBS: usize>(mut limbs: [u64; LIMBS], bits: usize) -> [u64; LIMBS] {
	if LIMBS > 0 && sign_bit(&limbs, bits) {
		limbs[LIMBS - 1] |= !top_word_mask(bits);
	}
	limbs
}

/// Pack little-endian bytes into little-endian words.
///
/// A trailing partial word is filled with `0xff` when `signed` is set and
/// the last byte has its top bit set, with zeros otherwise.
pub fn pack_le_bytes<I>(bytes: I, signed: bool) -> Vec<u64> where I: IntoIterator<Item = u8> {
	let mut ret = Vec::new();
	let mut word = [0u8; 8];
	let mut len = 0;
	for byte in bytes {
		word[len] = byte;
		len += 1;
		if len == 8 {
			ret.push(u64::from_le_bytes(word));
			len = 0;
		}
	}
	if len > 0 {
		let fill = if signed && word[len - 1] & 0x80 != 0 { 0xff } else { 0 };
		for byte in word[len..].iter_mut() {
			*byte = fill;
		}
		ret.push(u64::from_le_bytes(word));
	}
	ret
}
