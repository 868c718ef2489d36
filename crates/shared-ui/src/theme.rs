use dioxus::prelude::*;

/// Storage key the preferred theme is persisted under.
pub const THEME_STORAGE_KEY: &str = "acadix.theme";

/// Light/dark preference applied as a single `data-theme` flag on the
/// document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Key used for storage and the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a stored key, falling back to Light.
    pub fn from_key(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, ThemeMode::Dark)
    }
}

/// Process-wide theme preference store, provided once as context at the
/// application root.
///
/// All theme changes go through [`ThemeStore::set`] so the persisted value
/// and the document flag never diverge. Subscribing is reading the signal:
/// any component that reads `mode` re-renders on change.
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeStore {
    mode: Signal<ThemeMode>,
}

impl ThemeStore {
    pub fn new(initial: ThemeMode) -> Self {
        Self {
            mode: Signal::new(initial),
        }
    }

    /// Resolve the startup preference: persisted value first, then the OS
    /// `prefers-color-scheme`, defaulting to light.
    pub fn load() -> ThemeMode {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return ThemeMode::Light;
            };
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(stored)) = storage.get_item(THEME_STORAGE_KEY) {
                    return ThemeMode::from_key(&stored);
                }
            }
            if let Ok(Some(query)) = window.match_media("(prefers-color-scheme: dark)") {
                if query.matches() {
                    return ThemeMode::Dark;
                }
            }
            ThemeMode::Light
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            ThemeMode::Light
        }
    }

    pub fn current(&self) -> ThemeMode {
        (self.mode)()
    }

    /// Persist `mode` and flip the document-root flag, then notify readers.
    pub fn set(&mut self, mode: ThemeMode) {
        persist(mode);
        apply_document_flag(mode);
        self.mode.set(mode);
    }

    pub fn toggle(&mut self) {
        let next = self.current().toggled();
        self.set(next);
    }

    /// Re-apply the current mode to the document without changing it.
    /// Used once at shell mount so a restored preference takes effect.
    pub fn apply(&self) {
        apply_document_flag(self.current());
    }
}

/// Hook to access the theme store provided at the app root.
pub fn use_theme() -> ThemeStore {
    use_context::<ThemeStore>()
}

fn persist(mode: ThemeMode) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(THEME_STORAGE_KEY, mode.as_str());
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mode;
    }
}

fn apply_document_flag(mode: ThemeMode) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(root) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = root.set_attribute("data-theme", mode.as_str());
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = mode;
    }
}
