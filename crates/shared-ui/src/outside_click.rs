use dioxus::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Number of currently attached document-level dismiss listeners.
///
/// Attach and release must stay paired on every exit path; tests assert this
/// drains back to zero.
static ACTIVE_LISTENERS: AtomicUsize = AtomicUsize::new(0);

pub fn active_listener_count() -> usize {
    ACTIVE_LISTENERS.load(Ordering::SeqCst)
}

/// A document-level `pointerdown` listener that fires `on_outside` when the
/// event target is not inside any element matching `boundary_selector`.
///
/// The listener is registered on construction and removed on drop, so holding
/// the guard in component state ties its lifetime to "menu open": dropping it
/// on close or on component disposal releases the handler.
pub struct OutsideClickGuard {
    #[cfg(target_arch = "wasm32")]
    closure: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>,
    #[cfg(not(target_arch = "wasm32"))]
    on_outside: Box<dyn FnMut()>,
}

impl OutsideClickGuard {
    #[cfg(target_arch = "wasm32")]
    pub fn attach(
        boundary_selector: &'static str,
        mut on_outside: impl FnMut() + 'static,
    ) -> Option<Self> {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let document = web_sys::window()?.document()?;
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
            let inside = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest(boundary_selector).ok().flatten())
                .is_some();
            if !inside {
                on_outside();
            }
        });
        document
            .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())
            .ok()?;
        ACTIVE_LISTENERS.fetch_add(1, Ordering::SeqCst);
        Some(Self { closure })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn attach(
        boundary_selector: &'static str,
        on_outside: impl FnMut() + 'static,
    ) -> Option<Self> {
        let _ = boundary_selector;
        ACTIVE_LISTENERS.fetch_add(1, Ordering::SeqCst);
        Some(Self {
            on_outside: Box::new(on_outside),
        })
    }

    /// Deliver an outside pointerdown to this guard's handler. Off-wasm there
    /// is no document to listen on, so callers invoke the dismissal path
    /// directly.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn fire_outside(&mut self) {
        (self.on_outside)();
    }
}

impl Drop for OutsideClickGuard {
    fn drop(&mut self) {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                let _ = document.remove_event_listener_with_callback(
                    "pointerdown",
                    self.closure.as_ref().unchecked_ref(),
                );
            }
        }
        ACTIVE_LISTENERS.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Keep an [`OutsideClickGuard`] attached exactly while `open` is true.
///
/// The guard is also dropped when the owning component unmounts, covering
/// the "navigated away with the menu open" exit path.
pub fn use_outside_click(
    open: Memo<bool>,
    boundary_selector: &'static str,
    on_outside: Callback<()>,
) {
    let mut guard = use_signal(|| Option::<OutsideClickGuard>::None);

    use_effect(move || {
        if open() {
            if guard.peek().is_none() {
                guard.set(OutsideClickGuard::attach(boundary_selector, move || {
                    on_outside.call(())
                }));
            }
        } else if guard.peek().is_some() {
            guard.set(None);
        }
    });

    use_drop(move || {
        guard.set(None);
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // The listener count is process-global; keep these tests sequential.
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    #[test]
    fn guard_releases_listener_on_drop() {
        let _lock = LOCK.lock().unwrap();
        let before = active_listener_count();
        {
            let _guard = OutsideClickGuard::attach(".profile-menu", || {})
                .expect("attach always succeeds off-wasm");
            assert_eq!(active_listener_count(), before + 1);
        }
        assert_eq!(active_listener_count(), before);
    }

    #[test]
    fn outside_pointer_closes_only_its_own_overlay() {
        use crate::theme::ThemeMode;
        use shared_types::ExpansionState;
        use std::cell::Cell;
        use std::rc::Rc;

        let _lock = LOCK.lock().unwrap();

        // Surrounding shell state the dismissal must not touch.
        let mut expansion = ExpansionState::new();
        expansion.reveal(["academics", "finance"]);
        let theme = ThemeMode::Dark;

        let profile_open = Rc::new(Cell::new(true));
        let sidebar_open = Rc::new(Cell::new(true));

        let profile = profile_open.clone();
        let mut profile_guard =
            OutsideClickGuard::attach(".dropdown-menu", move || profile.set(false)).unwrap();
        let sidebar = sidebar_open.clone();
        let _sidebar_guard =
            OutsideClickGuard::attach(".sidebar", move || sidebar.set(false)).unwrap();

        profile_guard.fire_outside();

        assert!(!profile_open.get());
        assert!(sidebar_open.get());
        assert!(expansion.is_open("academics"));
        assert!(expansion.is_open("finance"));
        assert_eq!(expansion.open_count(), 2);
        assert_eq!(theme, ThemeMode::Dark);
    }

    #[test]
    fn nested_guards_release_in_any_order() {
        let _lock = LOCK.lock().unwrap();
        let before = active_listener_count();
        let first = OutsideClickGuard::attach(".a", || {}).unwrap();
        let second = OutsideClickGuard::attach(".b", || {}).unwrap();
        assert_eq!(active_listener_count(), before + 2);
        drop(first);
        assert_eq!(active_listener_count(), before + 1);
        drop(second);
        assert_eq!(active_listener_count(), before);
    }
}
