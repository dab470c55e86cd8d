//=========================================================================
// Bridge Errors
//=========================================================================
//
// Errors surfaced by the bridge core.
//
// Only structural failures are surfaced. Malformed key input, unmapped
// cursors and repeated finalization are all resolved locally with a
// documented default and never reach this type.
//
//=========================================================================

//=== BridgeError =========================================================

/// Errors returned by the widget's capability forwarding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// Neither the widget nor the renderer interactor exposes `name`.
    MissingCapability {
        /// Object the lookup was made on.
        target: &'static str,
        /// Requested capability name.
        name: String,
    },
}

impl BridgeError {
    pub(crate) fn missing(target: &'static str, name: impl Into<String>) -> Self {
        Self::MissingCapability {
            target,
            name: name.into(),
        }
    }
}

//--- Trait Implementations -----------------------------------------------

impl std::fmt::Display for BridgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCapability { target, name } => {
                write!(f, "{} has no attribute named {}", target, name)
            }
        }
    }
}

impl std::error::Error for BridgeError {}

//=========================================================================
// Unit Tests
//=========================================================================
