//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// Light/dark theme flag, provided once at the root.
///
/// Every view may read `is_dark`; `toggle` is the only writer.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub is_dark: ReadSignal<bool>,
    set_is_dark: WriteSignal<bool>,
}

impl ThemeContext {
    pub fn new(is_dark: (ReadSignal<bool>, WriteSignal<bool>)) -> Self {
        Self {
            is_dark: is_dark.0,
            set_is_dark: is_dark.1,
        }
    }

    /// Flip between light and dark
    pub fn toggle(&self) {
        self.set_is_dark.update(|dark| *dark = !*dark);
    }
}

/// Get the theme from context
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext should be provided")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_flips_the_only_theme_flag() {
        let owner = Owner::new();
        owner.set();

        let theme = ThemeContext::new(signal(false));
        theme.toggle();
        assert!(theme.is_dark.get_untracked());
        theme.toggle();
        assert!(!theme.is_dark.get_untracked());
    }
}
