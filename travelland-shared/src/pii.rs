use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Produces a log-safe rendering of a value that identifies a person.
pub trait Redact {
    fn redacted(&self) -> String;
}

/// Emails keep the first character of the local part and the full domain,
/// e.g. `ana@x.com` becomes `a***@x.com`. Anything without an `@` is fully hidden.
impl Redact for str {
    fn redacted(&self) -> String {
        match self.split_once('@') {
            Some((local, domain)) => {
                let head: String = local.chars().take(1).collect();
                format!("{}***@{}", head, domain)
            }
            None => "********".to_string(),
        }
    }
}

impl Redact for String {
    fn redacted(&self) -> String {
        self.as_str().redacted()
    }
}

impl<T: Redact + ?Sized> Redact for &T {
    fn redacted(&self) -> String {
        (**self).redacted()
    }
}

/// Wrapper that redacts its value in `Debug`/`Display` so requester details
/// can be passed to `tracing` macros without leaking them.
/// Serialization still emits the real value; pages need it.
#[derive(Clone, Deserialize)]
pub struct Masked<T>(pub T);

impl<T: Redact> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Masked({})", self.0.redacted())
    }
}

impl<T: Redact> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.redacted())
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<T> Masked<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_keeps_domain() {
        assert_eq!(Masked("ana@x.com").to_string(), "a***@x.com");
        assert_eq!(format!("{:?}", Masked("ana@x.com".to_string())), "Masked(a***@x.com)");
    }

    #[test]
    fn test_non_email_is_hidden() {
        assert_eq!(Masked("not-an-email").to_string(), "********");
        assert_eq!(Masked("@x.com").to_string(), "***@x.com");
    }

    #[test]
    fn test_serialize_passes_through() {
        let json = serde_json::to_string(&Masked("ana@x.com")).unwrap();
        assert_eq!(json, "\"ana@x.com\"");
    }
}
