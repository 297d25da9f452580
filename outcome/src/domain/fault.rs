//! Captured failure causes carried inside outcomes.

use std::error::Error as StdError;
use std::fmt;

/// A failure raised by a wrapped operation and carried as data.
///
/// `Fault` owns its error. Two faults compare equal when their messages are
/// equal; identity is never required.
///
/// # Examples
/// ```
/// use outcome::Fault;
///
/// let fault = Fault::msg("disk full");
/// assert_eq!(fault.message(), "disk full");
/// ```
pub struct Fault(Box<dyn StdError + Send + Sync + 'static>);

impl Fault {
    /// Wrap any error value.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Box::new(error))
    }

    /// Build a fault from a plain message.
    pub fn msg(message: impl Into<String>) -> Self {
        let message: String = message.into();
        Self(message.into())
    }

    /// Borrow the underlying error.
    #[must_use]
    pub fn as_error(&self) -> &(dyn StdError + Send + Sync + 'static) {
        self.0.as_ref()
    }

    /// Take back the underlying error.
    #[must_use]
    pub fn into_inner(self) -> Box<dyn StdError + Send + Sync + 'static> {
        self.0
    }

    /// The fault's own message, without causes.
    #[must_use]
    pub fn message(&self) -> String {
        self.0.to_string()
    }

    /// Render the fault and every nested cause, innermost last.
    ///
    /// Each entry is the error's debug form followed by its message on the
    /// next line. Entries are separated by a line break.
    ///
    /// # Examples
    /// ```
    /// use outcome::Fault;
    ///
    /// let text = Fault::msg("boom").full_message();
    /// assert!(text.ends_with("\nboom"));
    /// ```
    #[must_use]
    pub fn full_message(&self) -> String {
        let mut entries = Vec::new();
        let root: &(dyn StdError + 'static) = &*self.0;
        let mut current = Some(root);
        while let Some(error) = current {
            entries.push(format!("{error:?}\n{error}"));
            current = error.source();
        }
        entries.join("\n")
    }

    /// Number of errors in the cause chain, including this one.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self.0.source();
        while let Some(error) = current {
            depth += 1;
            current = error.source();
        }
        depth
    }
}

impl<E> From<E> for Fault
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl fmt::Debug for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl PartialEq for Fault {
    fn eq(&self, other: &Self) -> bool {
        self.message() == other.message()
    }
}

impl Eq for Fault {}
