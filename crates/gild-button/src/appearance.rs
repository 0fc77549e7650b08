//! Host appearance mode (light/dark).
//!
//! The control never queries process-global state: the host passes the
//! current appearance in via [`FlatButton::set_appearance`](crate::FlatButton::set_appearance)
//! and pushes a new value whenever the system theme changes. Hosts that want
//! to seed that value from the OS setting can use [`Appearance::detect`]
//! (behind the default `system-theme` feature).

/// The display theme the control resolves its colors against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Appearance {
    /// Light appearance (the default).
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

impl Appearance {
    /// Check if this is the light appearance.
    #[inline]
    pub fn is_light(self) -> bool {
        matches!(self, Appearance::Light)
    }

    /// Check if this is the dark appearance.
    #[inline]
    pub fn is_dark(self) -> bool {
        matches!(self, Appearance::Dark)
    }

    /// Detect the current system appearance.
    ///
    /// Reads the OS-wide dark/light preference. When the platform does not
    /// report a preference, light is assumed.
    ///
    /// # Platform Notes
    ///
    /// - **Windows**: `AppsUseLightTheme` registry key
    /// - **macOS**: `AppleInterfaceStyle` user defaults
    /// - **Linux**: XDG Desktop Portal `color-scheme` setting
    #[cfg(feature = "system-theme")]
    pub fn detect() -> Self {
        match dark_light::detect() {
            dark_light::Mode::Dark => Appearance::Dark,
            dark_light::Mode::Light | dark_light::Mode::Default => Appearance::Light,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert_eq!(Appearance::default(), Appearance::Light);
        assert!(Appearance::Light.is_light());
        assert!(!Appearance::Light.is_dark());
        assert!(Appearance::Dark.is_dark());
    }
}
