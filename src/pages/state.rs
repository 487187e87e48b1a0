//! Page Load State
//!
//! Every page walks the same machine: `Idle → Loading → Ready | Failed`,
//! re-entering `Loading` on the next user action or mount.

/// Messages shown to the admin. Failures never expose backend details.
pub mod messages {
    pub const BOOKING_CONFIRMED: &str = "Booking confirmed! We will contact you shortly.";
    pub const BOOKING_FAILED: &str = "Unable to complete booking. Please try again.";
    pub const BOOKING_INCOMPLETE: &str = "Please fill in all required fields.";
    pub const ROOMS_FAILED: &str = "Unable to load rooms";
    pub const UNAUTHORIZED: &str = "Unauthorized";
    pub const DASHBOARD_FAILED: &str = "Failed to fetch dashboard data";
    pub const PRICING_INCOMPLETE: &str = "Please select room and dates";
    pub const PRICING_FAILED: &str = "Unable to calculate price";
}

/// State of one asynchronously loaded value
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Default for LoadState<T> {
    fn default() -> Self {
        LoadState::Idle
    }
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Whether the first load has finished, successfully or not
    pub fn is_settled(&self) -> bool {
        matches!(self, LoadState::Ready(_) | LoadState::Failed(_))
    }

    /// The loaded value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            LoadState::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// The failure message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let idle: LoadState<u32> = LoadState::default();
        assert_eq!(idle, LoadState::Idle);
        assert!(idle.value().is_none());

        assert!(LoadState::<u32>::Loading.is_loading());
        assert_eq!(LoadState::Ready(5).value(), Some(&5));
        assert_eq!(
            LoadState::<u32>::Failed("nope".to_string()).error(),
            Some("nope")
        );
    }

    #[test]
    fn test_settled_only_after_load_finishes() {
        assert!(!LoadState::<u32>::Idle.is_settled());
        assert!(!LoadState::<u32>::Loading.is_settled());
        assert!(LoadState::Ready(1).is_settled());
        assert!(LoadState::<u32>::Failed("down".to_string()).is_settled());
    }
}
