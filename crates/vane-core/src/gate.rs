use crate::store::SettingsStore;

/// Whether badge emission is enabled. A missing setting or a failed lookup
/// reads as disabled; the badge must not reveal status unless the operator
/// switched it on.
pub fn badge_enabled(settings: &dyn SettingsStore) -> bool {
    settings.badge_enabled().unwrap_or(false)
}

/// Whether the revision suffix may be shown when a request asks for it.
/// Fails closed like [`badge_enabled`].
pub fn revision_enabled(settings: &dyn SettingsStore) -> bool {
    settings.revision_enabled().unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, VaneError};

    struct Fixed {
        badge: bool,
        revision: bool,
    }

    impl SettingsStore for Fixed {
        fn badge_enabled(&self) -> Result<bool> {
            Ok(self.badge)
        }
        fn revision_enabled(&self) -> Result<bool> {
            Ok(self.revision)
        }
    }

    /// Store whose lookups always fail, as an unreachable backend would.
    struct Broken;

    impl SettingsStore for Broken {
        fn badge_enabled(&self) -> Result<bool> {
            Err(VaneError::NotInitialized)
        }
        fn revision_enabled(&self) -> Result<bool> {
            Err(VaneError::NotInitialized)
        }
    }

    #[test]
    fn passes_through_store_values() {
        let on = Fixed {
            badge: true,
            revision: true,
        };
        assert!(badge_enabled(&on));
        assert!(revision_enabled(&on));

        let off = Fixed {
            badge: false,
            revision: false,
        };
        assert!(!badge_enabled(&off));
        assert!(!revision_enabled(&off));
    }

    #[test]
    fn lookup_failure_reads_as_disabled() {
        assert!(!badge_enabled(&Broken));
        assert!(!revision_enabled(&Broken));
    }
}
