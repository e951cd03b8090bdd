use std::{fmt, str::FromStr};
use thiserror::Error;

/// A bare contact address like `priya@example.com`.
///
/// Mailbox syntax with a display name is not accepted, the
/// address is stored exactly as it is shown to sellers.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub const fn new_unchecked(address: String) -> Self {
        Self(address)
    }
    pub fn into_string(self) -> String {
        self.0
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Error)]
#[error("Invalid E-Mail address")]
pub struct EmailAddressParseError;

impl FromStr for EmailAddress {
    type Err = EmailAddressParseError;
    fn from_str(s: &str) -> Result<EmailAddress, Self::Err> {
        let s = s.trim();
        match mailparse::addrparse(s)
            .ok()
            .and_then(|list| list.extract_single_info())
        {
            Some(info) if info.display_name.is_none() && info.addr == s => Ok(Self(info.addr)),
            _ => Err(EmailAddressParseError),
        }
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
