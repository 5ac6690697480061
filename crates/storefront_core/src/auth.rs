//! Admin PIN and session-scoped login flag.
//!
//! This is a convenience gate, not a security boundary: the PIN is stored and compared as
//! plain text in the same browser.

use std::ops::RangeInclusive;

use crate::{error::PinError, persistence::JsonStore};

const SESSION_FLAG_VALUE: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Admin view state.
pub enum AuthState {
    /// Auth form visible, stock panel hidden.
    Unauthenticated,
    /// Stock panel visible, auth form hidden.
    Authenticated,
}

impl AuthState {
    /// `true` for [`AuthState::Authenticated`].
    pub const fn is_authenticated(self) -> bool {
        matches!(self, Self::Authenticated)
    }
}

/// Compares an entered PIN against the stored one. Empty entries never match.
pub fn verify_pin(stored: &str, entered: &str) -> bool {
    !entered.is_empty() && entered == stored
}

#[derive(Clone)]
/// PIN storage (persistent) plus the login flag (session scoped).
pub struct AdminAuth {
    persistent: JsonStore,
    session: JsonStore,
    pin_key: String,
    flag_key: String,
    pin_length: RangeInclusive<usize>,
}

impl AdminAuth {
    /// Creates the gate. `persistent` holds the PIN under `pin_key`; `session` holds the
    /// login flag under `flag_key`.
    pub fn new(
        persistent: JsonStore,
        session: JsonStore,
        pin_key: impl Into<String>,
        flag_key: impl Into<String>,
        pin_length: RangeInclusive<usize>,
    ) -> Self {
        Self {
            persistent,
            session,
            pin_key: pin_key.into(),
            flag_key: flag_key.into(),
            pin_length,
        }
    }

    /// Current state, derived from the session flag.
    pub fn state(&self) -> AuthState {
        if self.is_authenticated() {
            AuthState::Authenticated
        } else {
            AuthState::Unauthenticated
        }
    }

    /// Whether the admin logged in during this browser session.
    pub fn is_authenticated(&self) -> bool {
        self.session.read_text(&self.flag_key).as_deref() == Some(SESSION_FLAG_VALUE)
    }

    /// Whether any PIN has been stored.
    pub fn has_pin(&self) -> bool {
        self.stored_pin().is_some()
    }

    fn stored_pin(&self) -> Option<String> {
        self.persistent
            .read_text(&self.pin_key)
            .filter(|pin| !pin.is_empty())
    }

    /// Replaces the stored PIN with the trimmed `candidate`. No old-PIN confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`PinError::LengthOutOfRange`] (and stores nothing) when the trimmed candidate
    /// is outside the allowed length, or [`PinError::Store`] when the write fails.
    pub fn set_pin(&self, candidate: &str) -> Result<(), PinError> {
        let candidate = candidate.trim();
        if !self.pin_length.contains(&candidate.chars().count()) {
            return Err(PinError::LengthOutOfRange);
        }
        self.persistent.write_text(&self.pin_key, candidate)?;
        Ok(())
    }

    /// Checks the trimmed `entered` PIN and sets the session flag on a match.
    ///
    /// # Errors
    ///
    /// Returns [`PinError::NotSet`] when no PIN is stored, [`PinError::Mismatch`] when the
    /// entry differs, or [`PinError::Store`] when the flag cannot be written.
    pub fn login(&self, entered: &str) -> Result<AuthState, PinError> {
        let Some(stored) = self.stored_pin() else {
            return Err(PinError::NotSet);
        };
        if !verify_pin(&stored, entered.trim()) {
            return Err(PinError::Mismatch);
        }
        self.session
            .write_text(&self.flag_key, SESSION_FLAG_VALUE)?;
        Ok(AuthState::Authenticated)
    }
}
