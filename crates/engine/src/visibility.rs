//! The per-route visibility predicate.
//!
//! Rules are checked in a fixed order and the first one that applies decides
//! the outcome. Only the elevated-key and missing-capability outcomes are
//! worth telling an operator about; the others follow directly from the route
//! table or from the connection still being established.

use std::fmt;

use sidenav_types::{AccessFlags, CapabilityRequirement, CapabilitySnapshot, CapabilitySurface, RouteDescriptor};
use tracing::warn;

use crate::diagnostics::DiagnosticLog;

/// Why a route is left out of the general grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HiddenReason {
    /// The settings route is rendered in its own section.
    Settings,
    /// Marked hidden in the route table.
    Hidden,
    /// Needs at least one local account.
    NoAccounts,
    /// The backend is not connected and ready yet.
    NotReady,
    /// Needs the elevated key, which no local account holds.
    ElevatedKeyUnavailable,
    /// The backend lacks these capabilities.
    MissingCapabilities(Vec<CapabilityRequirement>),
}

impl HiddenReason {
    /// Whether this outcome should be reported once to the operator.
    pub fn is_reportable(&self) -> bool {
        matches!(self, Self::ElevatedKeyUnavailable | Self::MissingCapabilities(_))
    }
}

impl fmt::Display for HiddenReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Settings => f.write_str("rendered in the settings section"),
            Self::Hidden => f.write_str("hidden"),
            Self::NoAccounts => f.write_str("no accounts available"),
            Self::NotReady => f.write_str("api not connected"),
            Self::ElevatedKeyUnavailable => f.write_str("elevated key not available"),
            Self::MissingCapabilities(missing) => {
                let listed: Vec<String> = missing.iter().map(ToString::to_string).collect();
                write!(f, "not supported, {} not found", listed.join(", "))
            }
        }
    }
}

/// Outcome of evaluating one route against the current state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Excluded(HiddenReason),
}

impl Visibility {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Requirements in `needs` that the surface does not satisfy, in declaration order.
pub fn missing_capabilities<S: CapabilitySurface + ?Sized>(
    surface: &S,
    needs: &[CapabilityRequirement],
) -> Vec<CapabilityRequirement> {
    needs
        .iter()
        .filter(|requirement| !requirement.is_satisfied_by(surface))
        .cloned()
        .collect()
}

/// Evaluate a route without side effects.
pub fn evaluate<S: CapabilitySurface>(
    route: &RouteDescriptor,
    snapshot: &CapabilitySnapshot<S>,
    access: AccessFlags,
) -> Visibility {
    let display = &route.display;
    if route.is_settings() {
        return Visibility::Excluded(HiddenReason::Settings);
    }
    if display.hidden {
        return Visibility::Excluded(HiddenReason::Hidden);
    }
    if display.needs_accounts && !access.has_accounts {
        return Visibility::Excluded(HiddenReason::NoAccounts);
    }
    if display.is_api_independent() {
        return Visibility::Visible;
    }
    if !snapshot.is_usable() {
        return Visibility::Excluded(HiddenReason::NotReady);
    }
    if display.needs_sudo && !access.has_elevated_key {
        return Visibility::Excluded(HiddenReason::ElevatedKeyUnavailable);
    }

    let missing = missing_capabilities(&snapshot.surface, &display.needs_api);
    if missing.is_empty() {
        Visibility::Visible
    } else {
        Visibility::Excluded(HiddenReason::MissingCapabilities(missing))
    }
}

/// Evaluate a route and report reportable exclusions once per route name.
pub fn is_visible<S: CapabilitySurface>(
    route: &RouteDescriptor,
    snapshot: &CapabilitySnapshot<S>,
    access: AccessFlags,
    log: &mut DiagnosticLog,
) -> bool {
    match evaluate(route, snapshot, access) {
        Visibility::Visible => true,
        Visibility::Excluded(reason) => {
            if reason.is_reportable() {
                let message = format!("Disabling {}: {}", route.name, reason);
                if log.record_once(&route.name, message.as_str()) {
                    warn!(route = %route.name, reason = %reason, "{message}");
                }
            }
            false
        }
    }
}
