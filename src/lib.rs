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

//! Fixed-width signed and unsigned integers for every contract ABI width,
//! from 8 to 256 bits in steps of 8.
//!
//! ```rust
//! use ethcore_wideint::prelude::*;
//!
//! let x = U24::from_limbs([0xffff_ffff]);
//! assert_eq!(x.to_string(), "16777215");
//! assert_eq!(I8::MAX.overflowing_add(I8::ONE), (I8::MIN, true));
//! ```

#[macro_use]
extern crate log;

#[macro_use]
mod macros;

pub mod bridge;
pub mod catalog;
pub mod convert;
pub mod error;
pub mod int;
pub mod math;
pub mod uint;
pub mod words;

#[cfg(feature = "serialize")]
mod serialization;

pub use crate::catalog::*;
pub use crate::convert::BinaryInteger;
pub use crate::error::{ParseIntError, ParseIntErrorKind, TryFromIntError};
pub use crate::int::Int;
pub use crate::uint::Uint;

/// A prelude module for re-exporting all the types defined in this crate.
pub mod prelude {
	pub use crate::catalog::*;
	pub use crate::convert::BinaryInteger;
	pub use crate::error::{ParseIntError, ParseIntErrorKind, TryFromIntError};
	pub use crate::int::Int;
	pub use crate::uint::Uint;
}
