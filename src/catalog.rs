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

//! Concrete integer types for every contract ABI width.

use crate::int::Int;
use crate::uint::Uint;
use crate::words::word_count;

macro_rules! construct_widths {
	($(($unsigned: ident, $signed: ident, $bits: expr);)*) => {$(
		#[doc = concat!(stringify!($bits), " bit unsigned integer.")]
		pub type $unsigned = Uint<$bits, { word_count($bits) }>;
		#[doc = concat!(stringify!($bits), " bit signed integer.")]
		pub type $signed = Int<$bits, { word_count($bits) }>;
	)*}
}

construct_widths! {
	(U8, I8, 8);
	(U16, I16, 16);
	(U24, I24, 24);
	(U32, I32, 32);
	(U40, I40, 40);
	(U48, I48, 48);
	(U56, I56, 56);
	(U64, I64, 64);
	(U72, I72, 72);
	(U80, I80, 80);
	(U88, I88, 88);
	(U96, I96, 96);
	(U104, I104, 104);
	(U112, I112, 112);
	(U120, I120, 120);
	(U128, I128, 128);
	(U136, I136, 136);
	(U144, I144, 144);
	(U152, I152, 152);
	(U160, I160, 160);
	(U168, I168, 168);
	(U176, I176, 176);
	(U184, I184, 184);
	(U192, I192, 192);
	(U200, I200, 200);
	(U208, I208, 208);
	(U216, I216, 216);
	(U224, I224, 224);
	(U232, I232, 232);
	(U240, I240, 240);
	(U248, I248, 248);
	(U256, I256, 256);
}
