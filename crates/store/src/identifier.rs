//! Document identifier format checks
//!
//! Identifiers are the 24-character hexadecimal form of a MongoDB ObjectId.
//! Anything accepted from a client is checked here before a query is issued.

use bson::oid::ObjectId;
use chatline_common::{Error, Result};

/// Length of an identifier in its hexadecimal text form
pub const IDENTIFIER_LENGTH: usize = 24;

/// Whether `value` is a well-formed document identifier
pub fn is_valid_identifier(value: &str) -> bool {
    value.len() == IDENTIFIER_LENGTH && value.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Parse a client supplied identifier, naming the referenced `kind` on failure
pub fn parse_identifier(value: &str, kind: &str) -> Result<ObjectId> {
    if !is_valid_identifier(value) {
        return Err(Error::InvalidIdentifier(format!("Invalid {} id", kind)));
    }
    ObjectId::parse_str(value).map_err(|_| Error::InvalidIdentifier(format!("Invalid {} id", kind)))
}
