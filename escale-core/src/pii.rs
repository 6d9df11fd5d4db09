use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// A passenger email that masks its mailbox in Debug and Display output.
///
/// Serialization passes the real value through because the reservation API
/// needs it; the wrapper exists to prevent accidental leakage through log
/// macros like tracing::info!("{:?}", request).
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct MaskedEmail(String);

impl MaskedEmail {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for MaskedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for MaskedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keep the domain so operators can still tell providers apart.
        match self.0.split_once('@') {
            Some((_, domain)) => write!(f, "****@{domain}"),
            None => write!(f, "********"),
        }
    }
}

impl Serialize for MaskedEmail {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl From<&str> for MaskedEmail {
    fn from(email: &str) -> Self {
        Self(email.to_string())
    }
}

impl From<String> for MaskedEmail {
    fn from(email: String) -> Self {
        Self(email)
    }
}
