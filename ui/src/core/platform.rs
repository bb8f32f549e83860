//! Platform detection.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Native,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Native
        }
    }

    /// Whether viewport observation (and therefore scroll-triggered
    /// animation) is supported. The desktop webview has no
    /// `IntersectionObserver` bridge, so reveal wrappers there show their
    /// content at once.
    pub fn observes_viewport(self) -> bool {
        matches!(self, Self::Web)
    }
}

/// Current calendar year (UTC) for copyright lines.
pub fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}
