use std::str::FromStr;

use stayhub_core::entities::Convenience;

/// Outcome of mapping a free-text token to a closed enumeration.
///
/// An unknown token is reported instead of silently swallowed, so
/// callers can log the fallback without the mapper hardcoding that
/// decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenMapping<T> {
    Mapped(T),
    DefaultedFrom(String),
}

impl<T: Default> TokenMapping<T> {
    pub fn value(self) -> T {
        match self {
            Self::Mapped(value) => value,
            Self::DefaultedFrom(_) => T::default(),
        }
    }
}

impl<T> TokenMapping<T> {
    pub fn is_defaulted(&self) -> bool {
        matches!(self, Self::DefaultedFrom(_))
    }
}

/// Maps a token to its enumeration value, tagging unknown tokens for
/// the caller to surface.
pub fn map_token<T: FromStr>(token: &str) -> TokenMapping<T> {
    match token.parse() {
        Ok(value) => TokenMapping::Mapped(value),
        Err(_) => TokenMapping::DefaultedFrom(token.to_owned()),
    }
}

/// Splits a `;`-joined convenience list, keeping known tokens in input
/// order and returning unknown ones separately. Conveniences are
/// decorative metadata, so unknown tokens are dropped, never an error.
pub fn map_conveniences(raw: &str) -> (Vec<Convenience>, Vec<String>) {
    let mut conveniences = Vec::new();
    let mut dropped = Vec::new();
    for token in raw.split(';').map(str::trim).filter(|t| !t.is_empty()) {
        match token.parse::<Convenience>() {
            Ok(convenience) => {
                if !conveniences.contains(&convenience) {
                    conveniences.push(convenience);
                }
            }
            Err(_) => dropped.push(token.to_owned()),
        }
    }
    (conveniences, dropped)
}
