//! Logical outcome kinds and their priority order.
//!
//! Status values are compared by variant. The numeric code only matters at
//! the external boundary ([`Status::code`]) and to break ties inside the
//! failure class, where the higher code wins.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;

use super::OutcomeError;

/// Closed set of logical outcome kinds.
///
/// `Ord` follows merge priority rather than declaration order:
/// `Fault` > failure class > success class > `Unknown`.
///
/// # Examples
/// ```
/// use outcome::Status;
///
/// assert!(Status::Fault > Status::Forbidden);
/// assert!(Status::Forbidden > Status::Unauthorized);
/// assert_eq!(Status::NotExist.code(), 404);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ToSchema)]
pub enum Status {
    /// No status has been assigned yet.
    #[default]
    Unknown,
    /// The operation succeeded.
    Success,
    /// The requested content exists.
    Exist,
    /// The requested content does not exist.
    NotExist,
    /// The operation failed for a caller-visible reason.
    Failed,
    /// The caller is authenticated but not permitted.
    Forbidden,
    /// The caller is not authenticated.
    Unauthorized,
    /// The wrapped operation raised a fault.
    Fault,
}

impl Status {
    /// Every variant, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Unknown,
        Self::Success,
        Self::Exist,
        Self::NotExist,
        Self::Failed,
        Self::Forbidden,
        Self::Unauthorized,
        Self::Fault,
    ];

    /// Numeric code used at the external boundary.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::Unknown => 0,
            Self::Success => 200,
            Self::Exist => 202,
            Self::NotExist => 404,
            Self::Failed => 400,
            Self::Forbidden => 403,
            Self::Unauthorized => 401,
            Self::Fault => 500,
        }
    }

    /// Variant name as it appears on the wire.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Success => "Success",
            Self::Exist => "Exist",
            Self::NotExist => "NotExist",
            Self::Failed => "Failed",
            Self::Forbidden => "Forbidden",
            Self::Unauthorized => "Unauthorized",
            Self::Fault => "Fault",
        }
    }

    /// `Failed`, `Forbidden` or `Unauthorized`.
    #[must_use]
    pub const fn is_failure_class(self) -> bool {
        matches!(self, Self::Failed | Self::Forbidden | Self::Unauthorized)
    }

    /// `Success`, `Exist` or `NotExist`.
    #[must_use]
    pub const fn is_success_class(self) -> bool {
        matches!(self, Self::Success | Self::Exist | Self::NotExist)
    }

    /// `Exist` or `NotExist`.
    #[must_use]
    pub const fn is_content_class(self) -> bool {
        matches!(self, Self::Exist | Self::NotExist)
    }

    const fn tier(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::Success | Self::Exist | Self::NotExist => 1,
            Self::Failed | Self::Forbidden | Self::Unauthorized => 2,
            Self::Fault => 3,
        }
    }

    /// Compare two statuses by merge priority.
    ///
    /// Tiers decide first; inside a tier the numeric code breaks the tie.
    #[must_use]
    pub fn priority_cmp(self, other: Self) -> Ordering {
        self.tier()
            .cmp(&other.tier())
            .then_with(|| self.code().cmp(&other.code()))
    }

    /// Decode a status from its name, ignoring ASCII case.
    ///
    /// # Errors
    /// Returns [`OutcomeError::UnknownStatusName`] when `name` matches no
    /// variant.
    ///
    /// # Examples
    /// ```
    /// use outcome::Status;
    ///
    /// assert_eq!(Status::from_name("notexist"), Ok(Status::NotExist));
    /// assert!(Status::from_name("Pending").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self, OutcomeError> {
        Self::ALL
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| OutcomeError::UnknownStatusName {
                name: name.to_owned(),
            })
    }
}

impl PartialOrd for Status {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Status {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority_cmp(*other)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Status {
    type Err = OutcomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

struct StatusVisitor;

impl<'de> Visitor<'de> for StatusVisitor {
    type Value = Status;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a status name or null")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Status::from_name(value).map_err(E::custom)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Status::Unknown)
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Status::Unknown)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_str(Self)
    }
}

impl<'de> Deserialize<'de> for Status {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_option(StatusVisitor)
    }
}

#[cfg(test)]
mod tests;
