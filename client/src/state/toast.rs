//! Inline notification state: message slots and auto-hide bookkeeping.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use std::time::Duration;

/// Default time a toast stays up before hiding itself.
pub const DEFAULT_TOAST_MS: u32 = 3000;

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Error,
    Warning,
    Success,
}

impl ToastKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Error => "toast toast--error",
            Self::Warning => "toast toast--warning",
            Self::Success => "toast toast--success",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Error => "✕",
            Self::Warning => "!",
            Self::Success => "✓",
        }
    }
}

/// A message slot owned by a page. Empty means hidden.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notice {
    message: Option<String>,
}

impl Notice {
    pub fn show(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
    }

    pub fn dismiss(&mut self) {
        self.message = None;
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }
}

/// Generation counter for the auto-hide timer.
///
/// A timer that fires with a stale token is ignored, so at most one pending
/// hide is live. [`AutoHide::observe`] only hands out a new token when the
/// visible text actually changes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AutoHide {
    generation: u64,
    shown: Option<String>,
}

impl AutoHide {
    /// Invalidate any pending timer and hand out a token for a new one.
    pub fn restart(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    /// Invalidate any pending timer.
    pub fn cancel(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    #[must_use]
    pub fn is_current(&self, token: u64) -> bool {
        self.generation == token
    }

    /// Record the message now on screen.
    ///
    /// Returns a token for a new timer when a different message becomes
    /// visible. Re-observing the same message keeps the pending timer; a
    /// hidden message cancels it.
    pub fn observe(&mut self, message: Option<&str>) -> Option<u64> {
        if self.shown.as_deref() == message {
            return None;
        }
        self.shown = message.map(str::to_owned);
        if self.shown.is_some() {
            Some(self.restart())
        } else {
            self.cancel();
            None
        }
    }
}

/// Delay before auto-hiding, or `None` when `duration_ms` is zero.
#[must_use]
pub fn auto_hide_delay(duration_ms: u32) -> Option<Duration> {
    (duration_ms > 0).then(|| Duration::from_millis(u64::from(duration_ms)))
}
