//! Event subscription categories.

use bitflags::bitflags;

bitflags! {
    /// Event categories a client may subscribe to during identify.
    ///
    /// The protocol requires the identify message to carry a non-zero mask
    /// even when the client never consumes events. The mask travels on the
    /// wire as its raw integer value ([`EventSubscription::bits`]).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct EventSubscription: u32 {
        /// General server events.
        const GENERAL = 1 << 0;
        /// Configuration changes.
        const CONFIG = 1 << 1;
        /// Scene list and current-scene changes.
        const SCENES = 1 << 2;
        /// Input creation, removal, and settings changes.
        const INPUTS = 1 << 3;
        /// Transition changes.
        const TRANSITIONS = 1 << 4;
        /// Filter changes.
        const FILTERS = 1 << 5;
        /// Output state changes (capture, recording, replay).
        const OUTPUTS = 1 << 6;
        /// Scene item changes.
        const SCENE_ITEMS = 1 << 7;
        /// Media input playback events.
        const MEDIA_INPUTS = 1 << 8;
        /// Vendor-specific events.
        const VENDORS = 1 << 9;
        /// Every category.
        const ALL = (1 << 10) - 1;
    }
}

impl Default for EventSubscription {
    fn default() -> Self {
        Self::ALL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_every_category() {
        assert_eq!(EventSubscription::ALL.bits(), 1023);
        assert_eq!(EventSubscription::all(), EventSubscription::ALL);
    }

    #[test]
    fn default_subscribes_to_everything() {
        assert_eq!(EventSubscription::default(), EventSubscription::ALL);
    }

    #[test]
    fn masks_compose() {
        let mask = EventSubscription::GENERAL | EventSubscription::OUTPUTS;
        assert_eq!(mask.bits(), 0b100_0001);
        assert!(mask.contains(EventSubscription::OUTPUTS));
        assert!(!mask.contains(EventSubscription::SCENES));
    }
}
