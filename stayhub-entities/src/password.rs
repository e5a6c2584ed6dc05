use std::fmt;

use pwhash::sha512_crypt;

pub use pwhash::error::Error as PasswordHashError;

/// A salted, one-way password hash.
///
/// The plaintext is dropped after hashing; the salt comes from the
/// caller's configuration and is never stored alongside the value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Password(String);

impl Password {
    /// Hash a plaintext password with an explicit salt.
    pub fn hash(plaintext: &str, salt: &str) -> Result<Self, PasswordHashError> {
        let setting = format!("$6${salt}$");
        let res = Self(sha512_crypt::hash_with(setting.as_str(), plaintext)?);
        debug_assert!(res.verify(plaintext));
        Ok(res)
    }

    pub fn verify(&self, plaintext: &str) -> bool {
        sha512_crypt::verify(plaintext, &self.0)
    }
}

// For hashes loaded back from a store.
impl From<String> for Password {
    fn from(from: String) -> Self {
        Self(from)
    }
}

impl From<Password> for String {
    fn from(from: Password) -> Self {
        from.0
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), std::fmt::Error> {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_hash_and_verify_password() {
        let input = "p^$$w%&7*{}";
        let password = Password::hash(input, "somesalt").unwrap();
        assert_ne!(password.as_ref(), input);
        assert!(!password.as_ref().contains(input));
        assert!(password.verify(input));
        assert!(!password.verify("something else"));
    }

    #[test]
    fn same_salt_same_hash() {
        let a = Password::hash("secret", "pepper").unwrap();
        let b = Password::hash("secret", "pepper").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_salt_different_hash() {
        let a = Password::hash("secret", "saltA").unwrap();
        let b = Password::hash("secret", "saltB").unwrap();
        assert_ne!(a, b);
    }
}
