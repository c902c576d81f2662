//! Sidebar visibility state shared by the desktop rail, the mobile sheet,
//! the header, and the content region. One context instance is the single
//! source of truth, so no two surfaces can observe different snapshots.
//!
//! Three flags drive the presentation: `open` is the user's pinned
//! preference and the only field that persists, `hovered` widens the
//! collapsed rail while the pointer is over it, and `mobile_open` mounts
//! the overlay sheet on narrow viewports. Layout width follows the
//! derived `expanded` signal (`open || hovered`); `mobile_open` never
//! feeds into it.

pub(crate) mod storage;

use leptos::prelude::*;
use storage::PersistedSidebar;

#[derive(Clone, Copy)]
pub(crate) struct SidebarContext {
    open: RwSignal<bool>,
    hovered: RwSignal<bool>,
    mobile_open: RwSignal<bool>,
    expanded: Signal<bool>,
}

impl SidebarContext {
    fn new(initial: PersistedSidebar) -> Self {
        let open = RwSignal::new(initial.open);
        let hovered = RwSignal::new(false);
        let mobile_open = RwSignal::new(false);
        let expanded = Signal::derive(move || open.get() || hovered.get());
        Self {
            open,
            hovered,
            mobile_open,
            expanded,
        }
    }

    /// Effective desktop width: pinned open or transiently hover-expanded.
    pub fn expanded(&self) -> Signal<bool> {
        self.expanded
    }

    /// The pinned preference on its own, without the hover overlay.
    pub fn is_open(&self) -> Signal<bool> {
        self.open.into()
    }

    pub fn is_mobile_open(&self) -> Signal<bool> {
        self.mobile_open.into()
    }

    /// Flips the pinned preference and persists the new value. Persistence
    /// is fire-and-forget; a storage failure never blocks the transition.
    pub fn toggle(&self) {
        self.open.update(|open| *open = !*open);
        storage::store(PersistedSidebar {
            open: self.open.get_untracked(),
        });
    }

    /// Records pointer presence over the collapsed rail. Hovering is
    /// meaningless while pinned open, so that case is dropped to avoid
    /// redundant renders; clearing always applies.
    pub fn set_hovered(&self, hovered: bool) {
        if hovered && self.open.get_untracked() {
            return;
        }
        self.hovered.set(hovered);
    }

    pub fn open_mobile(&self) {
        self.mobile_open.set(true);
    }

    pub fn close_mobile(&self) {
        self.mobile_open.set(false);
    }

    pub fn toggle_mobile(&self) {
        self.mobile_open.update(|open| *open = !*open);
    }
}

/// Provides the sidebar context, hydrating the pinned state from storage.
#[component]
pub fn SidebarProvider(children: Children) -> impl IntoView {
    let sidebar = SidebarContext::new(storage::load());
    provide_context(sidebar);

    view! { {children()} }
}

/// Returns the shared sidebar context or a detached default one.
pub(crate) fn use_sidebar() -> SidebarContext {
    use_context::<SidebarContext>()
        .unwrap_or_else(|| SidebarContext::new(PersistedSidebar::default()))
}

#[cfg(test)]
mod tests {
    use super::SidebarContext;
    use super::storage::PersistedSidebar;
    use leptos::prelude::GetUntracked;

    fn collapsed() -> SidebarContext {
        SidebarContext::new(PersistedSidebar { open: false })
    }

    #[test]
    fn defaults_to_pinned_open() {
        let sidebar = SidebarContext::new(PersistedSidebar::default());
        assert!(sidebar.is_open().get_untracked());
        assert!(sidebar.expanded().get_untracked());
        assert!(!sidebar.is_mobile_open().get_untracked());
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let sidebar = collapsed();
        sidebar.toggle();
        assert!(sidebar.is_open().get_untracked());
        sidebar.toggle();
        assert!(!sidebar.is_open().get_untracked());
    }

    #[test]
    fn hover_expands_without_touching_pinned_state() {
        let sidebar = collapsed();
        assert!(!sidebar.expanded().get_untracked());

        sidebar.set_hovered(true);
        assert!(sidebar.expanded().get_untracked());
        assert!(!sidebar.is_open().get_untracked());

        sidebar.set_hovered(false);
        assert!(!sidebar.expanded().get_untracked());
        assert!(!sidebar.is_open().get_untracked());
    }

    #[test]
    fn hover_is_ignored_while_pinned_open() {
        let sidebar = SidebarContext::new(PersistedSidebar { open: true });
        sidebar.set_hovered(true);
        assert!(!sidebar.hovered.get_untracked());

        // Pin state changes while hovered: leave must still clear.
        let sidebar = collapsed();
        sidebar.set_hovered(true);
        sidebar.toggle();
        sidebar.set_hovered(false);
        assert!(!sidebar.hovered.get_untracked());
        assert!(sidebar.expanded().get_untracked());
    }

    #[test]
    fn mobile_sheet_is_independent_of_desktop_width() {
        let sidebar = collapsed();
        sidebar.open_mobile();
        assert!(sidebar.is_mobile_open().get_untracked());
        assert!(!sidebar.expanded().get_untracked());

        sidebar.toggle_mobile();
        assert!(!sidebar.is_mobile_open().get_untracked());

        sidebar.toggle_mobile();
        sidebar.close_mobile();
        assert!(!sidebar.is_mobile_open().get_untracked());
    }
}
