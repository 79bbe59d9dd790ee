use serde::{Deserialize, Serialize};

/// Page features a site can ask permission for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageFeature {
    PointerLock,
    Geolocation,
    Notifications,
    MediaAudioCapture,
    MediaVideoCapture,
    DesktopCapture,
}

/// Answer to a permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionDecision {
    Grant,
    Deny,
}

/// Which feature requests are granted while cursor lock is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PermissionPolicy {
    /// Every request is granted.
    #[default]
    GrantAll,
    PointerLockOnly,
    DenyAll,
}

/// Outcome of consulting the profile for an outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestDecision {
    Allow,
    Block,
}
