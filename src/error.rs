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

//! Conversion and parsing errors.

use derive_more::Display;

/// Reason a string could not be parsed into a wide integer.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ParseIntErrorKind {
	/// The string was empty, or held only a sign or prefix.
	#[display(fmt = "cannot parse integer from empty string")]
	Empty,
	/// A character is not a digit of the radix.
	#[display(fmt = "invalid digit found in string")]
	InvalidDigit,
	/// Radix outside `2..=36`.
	#[display(fmt = "radix {} is not in range 2..=36", _0)]
	InvalidRadix(u32),
	/// The number does not fit in the target type.
	#[display(fmt = "number does not fit in target type")]
	Overflow,
}

/// Error returned by `from_str_radix` and `FromStr`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "{}", kind)]
pub struct ParseIntError {
	kind: ParseIntErrorKind,
}

impl ParseIntError {
	pub(crate) fn new(kind: ParseIntErrorKind) -> Self {
		ParseIntError { kind }
	}

	/// Detailed cause of the failure.
	pub fn kind(&self) -> ParseIntErrorKind {
		self.kind
	}
}

impl std::error::Error for ParseIntError {}

impl From<ParseIntErrorKind> for ParseIntError {
	fn from(kind: ParseIntErrorKind) -> Self {
		ParseIntError::new(kind)
	}
}

/// Error returned when an exact integer conversion would lose information.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[display(fmt = "out of range integer conversion attempted")]
pub struct TryFromIntError;

impl std::error::Error for TryFromIntError {}
