//! The value-carrying outcome container and its constructors.
//!
//! An [`Outcome`] is a flat value: a [`Status`], an optional message, an
//! optional [`Fault`], an optional external code override and an optional
//! payload. The combination algebra in [`crate::domain::combine`] never
//! mutates an outcome it is handed; the in-place setters and `append*`
//! helpers exist for building one up before that point.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{Fault, OutcomeError, Status};

const FAILURE_KINDS: &str = "Failed, Forbidden, Unauthorized";
const CONTENT_KINDS: &str = "Exist, NotExist";

/// Result of an operation together with its logical status.
///
/// # Examples
/// ```
/// use outcome::{Outcome, Status};
///
/// let found = Outcome::success(42).with_message("cached");
/// assert!(found.is_success());
/// assert_eq!(found.payload(), Some(&42));
///
/// let denied = Outcome::<u32>::failed_as(Status::Forbidden, Some("no access".to_owned()))
///     .expect("Forbidden is a failure kind");
/// assert_eq!(denied.status(), Status::Forbidden);
/// ```
pub struct Outcome<T> {
    status: Status,
    message: Option<String>,
    fault: Option<Fault>,
    external_code: Option<u16>,
    payload: Option<T>,
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Outcome<T> {
    /// An outcome with status [`Status::Unknown`] and nothing else set.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            status: Status::Unknown,
            message: None,
            fault: None,
            external_code: None,
            payload: None,
        }
    }

    /// Successful outcome carrying `payload`.
    #[must_use]
    pub fn success(payload: T) -> Self {
        let mut outcome = Self::empty();
        outcome.set_success(Some(payload), None);
        outcome
    }

    /// Successful outcome without a payload.
    #[must_use]
    pub fn success_empty() -> Self {
        let mut outcome = Self::empty();
        outcome.set_success(None, None);
        outcome
    }

    /// Successful outcome carrying `payload` and `message`.
    ///
    /// Explicit form of building an outcome from a `(value, message)` pair.
    #[must_use]
    pub fn from_value_with_message(payload: T, message: impl Into<String>) -> Self {
        let mut outcome = Self::empty();
        outcome.set_success(Some(payload), Some(message.into()));
        outcome
    }

    /// Outcome with status [`Status::Failed`] and `message`.
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: Status::Failed,
            message: Some(message.into()),
            ..Self::empty()
        }
    }

    /// Failure-class outcome of the given `kind`.
    ///
    /// # Errors
    /// Returns [`OutcomeError::InvalidStatusKind`] unless `kind` is
    /// `Failed`, `Forbidden` or `Unauthorized`.
    pub fn failed_as(kind: Status, message: Option<String>) -> Result<Self, OutcomeError> {
        let mut outcome = Self::empty();
        outcome.set_failed(message, kind)?;
        Ok(outcome)
    }

    /// Outcome carrying `fault` with status [`Status::Fault`].
    #[must_use]
    pub fn faulted(fault: impl Into<Fault>) -> Self {
        let mut outcome = Self::empty();
        outcome.set_fault(fault, None);
        outcome
    }

    /// Outcome carrying `fault` and an explanatory `message`.
    #[must_use]
    pub fn faulted_with_message(fault: impl Into<Fault>, message: impl Into<String>) -> Self {
        let mut outcome = Self::empty();
        outcome.set_fault(fault, Some(message.into()));
        outcome
    }

    /// Content-existence outcome of the given `kind`.
    ///
    /// # Errors
    /// Returns [`OutcomeError::InvalidStatusKind`] unless `kind` is `Exist`
    /// or `NotExist`.
    pub fn content(kind: Status, message: Option<String>) -> Result<Self, OutcomeError> {
        let mut outcome = Self::empty();
        outcome.set_content(kind, message)?;
        Ok(outcome)
    }

    /// Outcome with every field supplied and no status checks.
    #[must_use]
    pub const fn set(
        status: Status,
        payload: Option<T>,
        message: Option<String>,
        fault: Option<Fault>,
    ) -> Self {
        Self {
            status,
            message,
            fault,
            external_code: None,
            payload,
        }
    }

    /// Mark the outcome successful.
    pub fn set_success(&mut self, payload: Option<T>, message: Option<String>) -> &mut Self {
        self.status = Status::Success;
        self.payload = payload;
        self.message = message;
        self
    }

    /// Mark the outcome failed with a failure-class `kind`.
    ///
    /// # Errors
    /// Returns [`OutcomeError::InvalidStatusKind`] unless `kind` is
    /// `Failed`, `Forbidden` or `Unauthorized`. The outcome is left
    /// untouched on error.
    pub fn set_failed(
        &mut self,
        message: Option<String>,
        kind: Status,
    ) -> Result<&mut Self, OutcomeError> {
        if !kind.is_failure_class() {
            return Err(OutcomeError::invalid_kind("set_failed", kind, FAILURE_KINDS));
        }
        self.status = kind;
        self.message = message;
        Ok(self)
    }

    /// Attach `fault` and mark the outcome faulted.
    pub fn set_fault(&mut self, fault: impl Into<Fault>, message: Option<String>) -> &mut Self {
        self.status = Status::Fault;
        self.fault = Some(fault.into());
        self.message = message;
        self
    }

    /// Mark the outcome with a content-existence `kind`.
    ///
    /// # Errors
    /// Returns [`OutcomeError::InvalidStatusKind`] unless `kind` is `Exist`
    /// or `NotExist`. The outcome is left untouched on error.
    pub fn set_content(
        &mut self,
        kind: Status,
        message: Option<String>,
    ) -> Result<&mut Self, OutcomeError> {
        if !kind.is_content_class() {
            return Err(OutcomeError::invalid_kind("set_content", kind, CONTENT_KINDS));
        }
        self.status = kind;
        self.message = message;
        Ok(self)
    }

    /// Overwrite every field except the external code, without checks.
    pub fn set_all(
        &mut self,
        status: Status,
        payload: Option<T>,
        message: Option<String>,
        fault: Option<Fault>,
    ) -> &mut Self {
        self.status = status;
        self.payload = payload;
        self.message = message;
        self.fault = fault;
        self
    }

    /// Replace the message.
    pub fn set_message(&mut self, message: Option<String>) -> &mut Self {
        self.message = message;
        self
    }

    /// Append `message` to the current one.
    ///
    /// A missing or empty current message is replaced outright. Otherwise the
    /// two are joined with a single space, or directly when
    /// `join_with_space` is false.
    ///
    /// # Examples
    /// ```
    /// use outcome::Outcome;
    ///
    /// let mut outcome = Outcome::<()>::empty();
    /// outcome.append("user", true).append("missing", true).append("!", false);
    /// assert_eq!(outcome.message(), Some("user missing!"));
    /// ```
    pub fn append(&mut self, message: &str, join_with_space: bool) -> &mut Self {
        let current = self.message.get_or_insert_with(String::new);
        if join_with_space && !current.is_empty() {
            current.push(' ');
        }
        current.push_str(message);
        self
    }

    /// Append several messages as one space-joined batch.
    ///
    /// The batch is joined before it is appended, so empty entries keep
    /// their separators. An empty iterator leaves the message untouched.
    pub fn append_all<I, S>(&mut self, messages: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let batch: Vec<String> = messages
            .into_iter()
            .map(|message| message.as_ref().to_owned())
            .collect();
        if batch.is_empty() {
            return self;
        }
        self.append(&batch.join(" "), true)
    }

    /// Overwrite the status without any class checks.
    pub const fn append_status(&mut self, status: Status) -> &mut Self {
        self.status = status;
        self
    }

    /// Builder form of [`Outcome::set_message`].
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Override the code reported at the external boundary.
    ///
    /// The logical status is unchanged.
    #[must_use]
    pub const fn with_external_code(mut self, code: u16) -> Self {
        self.external_code = Some(code);
        self
    }

    /// Logical status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Human-readable message, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Captured fault, if any.
    #[must_use]
    pub const fn fault(&self) -> Option<&Fault> {
        self.fault.as_ref()
    }

    /// External code override, if one was set.
    #[must_use]
    pub const fn external_code(&self) -> Option<u16> {
        self.external_code
    }

    /// Whether an external code greater than zero was set.
    #[must_use]
    pub const fn has_custom_code(&self) -> bool {
        matches!(self.external_code, Some(code) if code > 0)
    }

    /// Borrow the payload, if any.
    #[must_use]
    pub const fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    /// Take the payload, discarding everything else.
    #[must_use]
    pub fn into_payload(self) -> Option<T> {
        self.payload
    }

    /// True when the status is exactly [`Status::Success`].
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == Status::Success
    }

    /// True when the status is [`Status::Fault`].
    #[must_use]
    pub fn has_fault(&self) -> bool {
        self.status == Status::Fault
    }

    /// Full rendering of the fault and its causes.
    ///
    /// See [`Fault::full_message`].
    #[must_use]
    pub fn full_fault_message(&self) -> Option<String> {
        self.fault.as_ref().map(Fault::full_message)
    }

    /// Transform the payload, keeping every other field.
    pub fn map_payload<U, F>(self, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        Outcome {
            status: self.status,
            message: self.message,
            fault: self.fault,
            external_code: self.external_code,
            payload: self.payload.map(f),
        }
    }

    /// Erase the payload type into JSON.
    ///
    /// # Errors
    /// Returns the serializer error when the payload cannot be represented
    /// as JSON.
    pub fn into_json_payload(self) -> Result<Outcome<Value>, serde_json::Error>
    where
        T: Serialize,
    {
        let payload = self.payload.map(serde_json::to_value).transpose()?;
        Ok(Outcome {
            status: self.status,
            message: self.message,
            fault: self.fault,
            external_code: self.external_code,
            payload,
        })
    }

    /// Split off the parts the combination algebra merges on.
    pub(crate) fn into_merge_parts(self) -> (Status, Option<String>, Option<Fault>) {
        (self.status, self.message, self.fault)
    }
}

impl<T> From<Fault> for Outcome<T> {
    fn from(fault: Fault) -> Self {
        Self::faulted(fault)
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Outcome<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Outcome")
            .field("status", &self.status)
            .field("message", &self.message)
            .field("fault", &self.fault)
            .field("external_code", &self.external_code)
            .field("payload", &self.payload)
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Outcome<T> {
    fn eq(&self, other: &Self) -> bool {
        self.status == other.status
            && self.message == other.message
            && self.external_code == other.external_code
            && self.fault == other.fault
            && self.payload == other.payload
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeEnvelopeRef<'a, T> {
    status: Status,
    message: Option<&'a str>,
    status_code: Option<u16>,
    data: Option<&'a T>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OutcomeEnvelope<T> {
    #[serde(default)]
    status: Status,
    message: Option<String>,
    status_code: Option<u16>,
    data: Option<T>,
}

/// Serializes as `{ "status", "message", "statusCode", "data" }`.
///
/// The fault is never part of the serialized form.
impl<T: Serialize> Serialize for Outcome<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        OutcomeEnvelopeRef {
            status: self.status,
            message: self.message.as_deref(),
            status_code: self.external_code,
            data: self.payload.as_ref(),
        }
        .serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Outcome<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let OutcomeEnvelope {
            status,
            message,
            status_code,
            data,
        } = OutcomeEnvelope::deserialize(deserializer)?;
        Ok(Self {
            status,
            message,
            fault: None,
            external_code: status_code,
            payload: data,
        })
    }
}
