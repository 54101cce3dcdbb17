//! Canonical encoders for the values that enter the Fiat-Shamir hash or the wire.
//!
//! Each value kind (integer, curve point, string) gets one field type. A field offers
//! two capability sets:
//! - [`ByteField`]: the canonical byte encoding consumed by the challenge hash
//! - [`SerializerField`]: the structured (JSON) form used on the wire

use core::marker::PhantomData;

use num_bigint::BigUint;
use serde_json::Value;

use crate::{Error, Group, Result};

/// Canonical byte encoding of a value.
pub trait ByteField {
    /// The value kind this field encodes.
    type Value;

    /// Encodes a value to its canonical bytes.
    fn to_bytes(&self, value: &Self::Value) -> Vec<u8>;

    /// Decodes a value from its canonical bytes.
    fn from_bytes(&self, bytes: &[u8]) -> Result<Self::Value>;
}

/// Structured wire encoding of a value.
pub trait SerializerField {
    /// The value kind this field encodes.
    type Value;

    /// Encodes a value to its wire form.
    fn serialize(&self, value: &Self::Value) -> Value;

    /// Decodes a value from its wire form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Deserialization`] if the wire form is missing pieces or malformed.
    fn deserialize(&self, data: &Value) -> Result<Self::Value>;
}

/// Unsigned big integers: minimal big-endian bytes, decimal string on the wire.
#[derive(Clone, Copy, Debug, Default)]
pub struct BigIntegerField;

impl ByteField for BigIntegerField {
    type Value = BigUint;

    fn to_bytes(&self, value: &BigUint) -> Vec<u8> {
        value.to_bytes_be()
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<BigUint> {
        Ok(BigUint::from_bytes_be(bytes))
    }
}

impl SerializerField for BigIntegerField {
    type Value = BigUint;

    fn serialize(&self, value: &BigUint) -> Value {
        Value::String(value.to_str_radix(10))
    }

    fn deserialize(&self, data: &Value) -> Result<BigUint> {
        match data {
            Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
                BigUint::parse_bytes(s.as_bytes(), 10).ok_or_else(|| {
                    Error::Deserialization(format!("Invalid decimal integer: {s:?}"))
                })
            }
            Value::Number(n) => n.as_u64().map(BigUint::from).ok_or_else(|| {
                Error::Deserialization(format!("Integer must be unsigned, got {n}"))
            }),
            other => Err(Error::Deserialization(format!(
                "Expected decimal integer, got {other}"
            ))),
        }
    }
}

/// Curve points: compressed SEC1 bytes, lowercase hex on the wire.
#[derive(Clone, Copy, Debug)]
pub struct PointField<G: Group>(PhantomData<G>);

impl<G: Group> PointField<G> {
    /// Creates a point field for group `G`.
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<G: Group> Default for PointField<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Group> ByteField for PointField<G> {
    type Value = G::Element;

    fn to_bytes(&self, value: &G::Element) -> Vec<u8> {
        G::element_to_bytes(value)
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<G::Element> {
        G::element_from_bytes(bytes)
    }
}

impl<G: Group> SerializerField for PointField<G> {
    type Value = G::Element;

    fn serialize(&self, value: &G::Element) -> Value {
        Value::String(hex::encode(self.to_bytes(value)))
    }

    fn deserialize(&self, data: &Value) -> Result<G::Element> {
        let encoded = data.as_str().ok_or_else(|| {
            Error::Deserialization(format!("Expected hex-encoded point, got {data}"))
        })?;
        let bytes = hex::decode(encoded)
            .map_err(|e| Error::Deserialization(format!("Invalid point hex: {e}")))?;
        self.from_bytes(&bytes)
            .map_err(|e| Error::Deserialization(e.to_string()))
    }
}

/// Strings: UTF-8 bytes, plain string on the wire.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringField;

impl StringField {
    /// Encodes a borrowed string without requiring an owned `String`.
    pub fn str_to_bytes(&self, value: &str) -> Vec<u8> {
        value.as_bytes().to_vec()
    }
}

impl ByteField for StringField {
    type Value = String;

    fn to_bytes(&self, value: &String) -> Vec<u8> {
        self.str_to_bytes(value)
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<String> {
        String::from_utf8(bytes.to_vec())
            .map_err(|e| Error::Deserialization(format!("Invalid UTF-8: {e}")))
    }
}

impl SerializerField for StringField {
    type Value = String;

    fn serialize(&self, value: &String) -> Value {
        Value::String(value.clone())
    }

    fn deserialize(&self, data: &Value) -> Result<String> {
        data.as_str()
            .map(str::to_owned)
            .ok_or_else(|| Error::Deserialization(format!("Expected string, got {data}")))
    }
}
