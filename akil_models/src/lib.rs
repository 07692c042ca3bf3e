use std::ops::Deref;

use macros::nutype_string;

pub mod account;
pub mod job;
mod macros;
pub mod oauth2;
pub mod session;

nutype_string!(SearchTerm(validate(len_char_max = 256)));

/// Wrapper for values that must never end up in logs or debug output.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Sensitive<T>(pub T);

impl<T> std::fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[redacted]")
    }
}

impl<T> From<T> for Sensitive<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> Deref for Sensitive<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sensitive_debug_is_redacted() {
        let sensitive = Sensitive("hunter2");
        assert_eq!(format!("{sensitive:?}"), "[redacted]");
    }
}
