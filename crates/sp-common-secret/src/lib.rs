// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Secret wrapper for credentials held by the page service.
//!
//! [`Secret<T>`] keeps a credential such as the admin auth secret out of logs
//! and config dumps:
//!
//! - `Debug`, `Display` and `Serialize` all render `[REDACTED]`
//! - the inner value is zeroized on drop
//! - reading the value needs an explicit [`Secret::expose`]
//! - [`SecretString::matches`] compares a presented credential in constant time
//!
//! ```
//! use sp_common_secret::SecretString;
//!
//! let secret = SecretString::new("s3cr3t".to_string());
//! assert_eq!(format!("{secret}"), "[REDACTED]");
//! assert!(secret.matches("s3cr3t"));
//! assert!(!secret.matches("guess"));
//! ```

use std::fmt;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Placeholder rendered in place of any secret value.
pub const REDACTED: &str = "[REDACTED]";

/// A value that must never be printed, logged or serialized.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct Secret<T>
where
	T: Zeroize,
{
	inner: T,
}

/// The common case: a secret string.
pub type SecretString = Secret<String>;

impl<T> Secret<T>
where
	T: Zeroize,
{
	pub fn new(inner: T) -> Self {
		Self { inner }
	}

	/// Access the inner value. Call sites opt in to seeing the secret.
	pub fn expose(&self) -> &T {
		&self.inner
	}
}

impl Secret<String> {
	/// Constant-time comparison against a caller-presented credential.
	///
	/// A length mismatch returns early; only the length is observable.
	pub fn matches(&self, candidate: &str) -> bool {
		let expected = self.inner.as_bytes();
		let candidate = candidate.as_bytes();
		if expected.len() != candidate.len() {
			return false;
		}
		expected.ct_eq(candidate).into()
	}

	pub fn is_empty(&self) -> bool {
		self.inner.is_empty()
	}
}

impl<T> Clone for Secret<T>
where
	T: Zeroize + Clone,
{
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
		}
	}
}

impl<T> fmt::Debug for Secret<T>
where
	T: Zeroize,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Secret").field(&REDACTED).finish()
	}
}

impl<T> fmt::Display for Secret<T>
where
	T: Zeroize,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl<T> PartialEq for Secret<T>
where
	T: Zeroize + PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.inner == other.inner
	}
}

impl<T> Eq for Secret<T> where T: Zeroize + Eq {}

#[cfg(feature = "serde")]
mod serde_impl {
	use super::{Secret, REDACTED};
	use serde::{Deserialize, Deserializer, Serialize, Serializer};
	use zeroize::Zeroize;

	impl<T> Serialize for Secret<T>
	where
		T: Zeroize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			serializer.serialize_str(REDACTED)
		}
	}

	impl<'de, T> Deserialize<'de> for Secret<T>
	where
		T: Deserialize<'de> + Zeroize,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			T::deserialize(deserializer).map(Secret::new)
		}
	}
}
