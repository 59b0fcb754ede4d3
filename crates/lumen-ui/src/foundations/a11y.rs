//! Development-time accessibility checks.
//!
//! Findings are advisory: they go to an [`AccessibilityAdvisor`] and never
//! change what a component renders.

use std::fmt;
use std::rc::Rc;

/// A developer-facing accessibility finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessibilityWarning {
    /// An icon button has no `aria-label`.
    MissingIconLabel {
        /// Component that raised the finding.
        component: &'static str,
    },
}

impl AccessibilityWarning {
    /// Component that raised the finding.
    #[must_use]
    pub const fn component(self) -> &'static str {
        match self {
            Self::MissingIconLabel { component } => component,
        }
    }

    /// Short machine-readable reason.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::MissingIconLabel { .. } => "missing_icon_label",
        }
    }

    /// Human-readable explanation.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingIconLabel { .. } => {
                "icon button rendered without an \"aria-label\"; screen readers have nothing to announce"
            }
        }
    }
}

impl fmt::Display for AccessibilityWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.component(), self.message())
    }
}

/// Returns the finding for a button with the given icon/label state.
#[must_use]
pub const fn audit_icon_label(
    component: &'static str,
    has_icon: bool,
    has_label: bool,
) -> Option<AccessibilityWarning> {
    if has_icon && !has_label {
        Some(AccessibilityWarning::MissingIconLabel { component })
    } else {
        None
    }
}

/// Receives accessibility findings.
pub trait AccessibilityAdvisor {
    /// Report one finding. Must not panic.
    fn warn(&self, warning: AccessibilityWarning);
}

/// Logs findings to the browser console on wasm and through `tracing` elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleAdvisor;

impl AccessibilityAdvisor for ConsoleAdvisor {
    fn warn(&self, warning: AccessibilityWarning) {
        #[cfg(target_arch = "wasm32")]
        gloo::console::warn!(warning.to_string());
        #[cfg(not(target_arch = "wasm32"))]
        tracing::warn!(
            component = warning.component(),
            reason = warning.code(),
            "{}",
            warning.message()
        );
    }
}

/// Drops every finding; used for release builds.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentAdvisor;

impl AccessibilityAdvisor for SilentAdvisor {
    fn warn(&self, _warning: AccessibilityWarning) {}
}

/// Shareable advisor handle suitable for component context.
#[derive(Clone)]
pub struct AdvisorHandle {
    inner: Rc<dyn AccessibilityAdvisor>,
}

impl AdvisorHandle {
    /// Wrap an advisor.
    #[must_use]
    pub fn new(advisor: Rc<dyn AccessibilityAdvisor>) -> Self {
        Self { inner: advisor }
    }

    /// Advisor that never reports.
    #[must_use]
    pub fn silent() -> Self {
        Self::new(Rc::new(SilentAdvisor))
    }

    /// Advisor that logs every finding.
    #[must_use]
    pub fn console() -> Self {
        Self::new(Rc::new(ConsoleAdvisor))
    }

    /// Run the icon-label audit and forward any finding.
    pub fn audit_icon_label(&self, component: &'static str, has_icon: bool, has_label: bool) {
        if let Some(warning) = audit_icon_label(component, has_icon, has_label) {
            self.inner.warn(warning);
        }
    }
}

impl Default for AdvisorHandle {
    /// Console advisor in debug builds, silent in release builds.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self::console()
        } else {
            Self::silent()
        }
    }
}

impl PartialEq for AdvisorHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for AdvisorHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdvisorHandle").finish_non_exhaustive()
    }
}
