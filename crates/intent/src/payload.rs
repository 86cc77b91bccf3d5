//! Payload values and the bundle that carries them.

use std::any::Any;
use std::collections::BTreeMap;

use crate::error::{PayloadError, Result};


/// A primitive value a host can transport alongside a navigation request.
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadValue {
	/// Boolean value.
	Bool(bool),
	/// Integer value. Narrower integer types widen into this.
	Int(i64),
	/// Floating-point value.
	Float(f64),
	/// Single character.
	Char(char),
	/// String value.
	String(String),
	/// Ordered list of strings.
	StringList(Vec<String>),
}

impl PayloadValue {
	/// Returns the boolean value if this is a `Bool` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			PayloadValue::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the integer value if this is an `Int` variant.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			PayloadValue::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the float value if this is a `Float` variant.
	pub fn as_float(&self) -> Option<f64> {
		match self {
			PayloadValue::Float(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the string value if this is a `String` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			PayloadValue::String(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the type name of this value.
	pub fn type_name(&self) -> &'static str {
		match self {
			PayloadValue::Bool(_) => "bool",
			PayloadValue::Int(_) => "int",
			PayloadValue::Float(_) => "float",
			PayloadValue::Char(_) => "char",
			PayloadValue::String(_) => "string",
			PayloadValue::StringList(_) => "string-list",
		}
	}

	/// Converts a type-erased value into a payload value.
	///
	/// Returns `None` when the runtime type has no payload representation.
	pub fn from_any(value: &dyn Any) -> Option<Self> {
		macro_rules! try_downcast {
			($($ty:ty => $conv:expr),* $(,)?) => {
				$(
					if let Some(v) = value.downcast_ref::<$ty>() {
						return Some($conv(v));
					}
				)*
			};
		}

		try_downcast! {
			String => |v: &String| PayloadValue::String(v.clone()),
			&'static str => |v: &&str| PayloadValue::String((*v).to_owned()),
			i64 => |v: &i64| PayloadValue::Int(*v),
			i32 => |v: &i32| PayloadValue::Int(i64::from(*v)),
			i16 => |v: &i16| PayloadValue::Int(i64::from(*v)),
			i8 => |v: &i8| PayloadValue::Int(i64::from(*v)),
			u32 => |v: &u32| PayloadValue::Int(i64::from(*v)),
			u16 => |v: &u16| PayloadValue::Int(i64::from(*v)),
			u8 => |v: &u8| PayloadValue::Int(i64::from(*v)),
			bool => |v: &bool| PayloadValue::Bool(*v),
			f64 => |v: &f64| PayloadValue::Float(*v),
			f32 => |v: &f32| PayloadValue::Float(f64::from(*v)),
			char => |v: &char| PayloadValue::Char(*v),
			Vec<String> => |v: &Vec<String>| PayloadValue::StringList(v.clone()),
			PayloadValue => |v: &PayloadValue| v.clone(),
		}
		None
	}
}

macro_rules! impl_from_int {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for PayloadValue {
				fn from(v: $ty) -> Self {
					PayloadValue::Int(i64::from(v))
				}
			}
		)*
	};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<bool> for PayloadValue {
	fn from(v: bool) -> Self {
		PayloadValue::Bool(v)
	}
}

impl From<f32> for PayloadValue {
	fn from(v: f32) -> Self {
		PayloadValue::Float(f64::from(v))
	}
}

impl From<f64> for PayloadValue {
	fn from(v: f64) -> Self {
		PayloadValue::Float(v)
	}
}

impl From<char> for PayloadValue {
	fn from(v: char) -> Self {
		PayloadValue::Char(v)
	}
}

impl From<String> for PayloadValue {
	fn from(v: String) -> Self {
		PayloadValue::String(v)
	}
}

impl From<&str> for PayloadValue {
	fn from(v: &str) -> Self {
		PayloadValue::String(v.to_owned())
	}
}

impl From<Vec<String>> for PayloadValue {
	fn from(v: Vec<String>) -> Self {
		PayloadValue::StringList(v)
	}
}

/// Key-value container transported with a navigation request.
///
/// Keys are unique and a later write under the same key replaces the earlier
/// one. There is no removal; a bundle only grows until it is snapshotted into
/// a request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PayloadBundle {
	values: BTreeMap<String, PayloadValue>,
}

impl PayloadBundle {
	/// Creates an empty bundle.
	pub fn new() -> Self {
		Self::default()
	}

	/// Writes a typed value under `key`, replacing any previous value.
	pub fn put(&mut self, key: impl Into<String>, value: impl Into<PayloadValue>) {
		self.values.insert(key.into(), value.into());
	}

	/// Writes a type-erased value under `key`.
	///
	/// `type_name` is only used for the error message. The bundle is left
	/// untouched when the value is rejected.
	///
	/// # Errors
	///
	/// Returns [`PayloadError::UnsupportedValueKind`] if the runtime type of
	/// `value` has no payload representation.
	pub fn put_any(&mut self, key: impl Into<String>, value: &dyn Any, type_name: &'static str) -> Result<()> {
		let key = key.into();
		match PayloadValue::from_any(value) {
			Some(value) => {
				self.values.insert(key, value);
				Ok(())
			}
			None => Err(PayloadError::UnsupportedValueKind { key, type_name }),
		}
	}

	/// Returns the value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&PayloadValue> {
		self.values.get(key)
	}

	/// Returns true if a value is stored under `key`.
	pub fn contains_key(&self, key: &str) -> bool {
		self.values.contains_key(key)
	}

	/// Number of stored keys.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// Returns true if nothing has been written.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Iterates over entries in key order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &PayloadValue)> {
		self.values.iter().map(|(k, v)| (k.as_str(), v))
	}

	/// Returns an immutable copy for handing to the host.
	pub fn snapshot(&self) -> PayloadBundle {
		self.clone()
	}
}

impl<K, V> FromIterator<(K, V)> for PayloadBundle
where
	K: Into<String>,
	V: Into<PayloadValue>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut bundle = PayloadBundle::new();
		for (key, value) in iter {
			bundle.put(key, value);
		}
		bundle
	}
}
