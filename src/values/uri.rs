//! Validated URI value

use crate::error::{DcatError, DcatResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Characters that can never appear in a serializable IRI reference
const INVALID_URI_CHARS: &[char] = &['<', '>', '"', ' ', '{', '}', '|', '\\', '^', '`'];

/// Check a string against the forbidden character set
pub fn is_valid_uri(value: &str) -> bool {
    !value.contains(INVALID_URI_CHARS)
}

/// A URI that passed the well-formedness check
///
/// The check is deliberately lenient: any string free of the characters
/// `<`, `>`, `"`, space, `{`, `}`, `|`, `\`, `^` and backtick is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Uri(String);

impl Uri {
    /// Validate and wrap a URI string
    pub fn new(value: impl Into<String>) -> DcatResult<Self> {
        let value = value.into();
        if is_valid_uri(&value) {
            Ok(Self(value))
        } else {
            let message = format!("{} is not a valid URI", value);
            Err(DcatError::InvalidUri { value, message })
        }
    }

    /// Get the URI string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string
    pub fn into_string(self) -> String {
        self.0
    }

    /// Wrap a string already known to pass the check
    pub(crate) fn from_trusted(value: String) -> Self {
        debug_assert!(is_valid_uri(&value));
        Self(value)
    }

    /// Build a new URI by prefixing a scheme such as `mailto:`
    pub(crate) fn with_scheme(scheme: &str, value: &str) -> DcatResult<Self> {
        Self::new(format!("{}{}", scheme, value))
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Uri {
    type Err = DcatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Uri {
    type Error = DcatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Uri {
    type Error = DcatError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Uri> for String {
    fn from(uri: Uri) -> Self {
        uri.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_uri() {
        let uri = Uri::new("http://example.com/datasets/1").unwrap();
        assert_eq!(uri.as_str(), "http://example.com/datasets/1");
        assert_eq!(uri.to_string(), "http://example.com/datasets/1");
    }

    #[test]
    fn test_each_forbidden_char_rejected() {
        for c in INVALID_URI_CHARS {
            let candidate = format!("http://example.com/a{}b", c);
            match Uri::new(candidate.clone()) {
                Err(DcatError::InvalidUri { value, .. }) => assert_eq!(value, candidate),
                other => panic!("expected InvalidUri for {:?}, got {:?}", c, other),
            }
        }
    }

    #[test]
    fn test_space_in_path_rejected() {
        assert!(Uri::new("http://example.com/an invalid path").is_err());
    }

    #[test]
    fn test_lenient_forms_accepted() {
        // Relative references and schemes without authority pass
        assert!(Uri::new("mailto:someone@example.org").is_ok());
        assert!(Uri::new("tel:12345678").is_ok());
        assert!(Uri::new("relative/path").is_ok());
    }

    #[test]
    fn test_serde_validates() {
        let ok: Uri = serde_json::from_str("\"http://example.com/x\"").unwrap();
        assert_eq!(ok.as_str(), "http://example.com/x");
        assert!(serde_json::from_str::<Uri>("\"http://example.com/ x\"").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "\"http://example.com/x\"");
    }
}
