/// Marker class the styling rules key dark mode on.
pub const DARK_CLASS: &str = "dark";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub is_dark: bool,
}

impl ThemeState {
    pub const fn from_preference(is_dark: bool) -> Self {
        Self { is_dark }
    }

    pub fn toggle(&mut self) {
        self.is_dark = !self.is_dark;
    }

    /// Class for the element that scopes the theme. Empty in light mode.
    pub fn root_class(&self) -> &'static str {
        if self.is_dark { DARK_CLASS } else { "" }
    }

    pub fn toggle_label(&self) -> &'static str {
        if self.is_dark { "Switch to light mode" } else { "Switch to dark mode" }
    }
}

/// A value with one variant per theme, e.g. the light and dark logo.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Themed<T> {
    pub light: T,
    pub dark: T,
}

impl<T: Clone> Themed<T> {
    pub const fn new(light: T, dark: T) -> Self {
        Self { light, dark }
    }

    pub fn pick(&self, theme: ThemeState) -> T {
        if theme.is_dark { self.dark.clone() } else { self.light.clone() }
    }
}
