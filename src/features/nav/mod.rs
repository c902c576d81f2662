//! Static navigation registry and active-route matching for the sidebar.
//!
//! The registry is declared once and never mutated; render order follows
//! declaration order. Icons are Material Symbols names rendered through
//! the icon font.

/// The distinguished "home" destination. Everything else lives under it.
pub(crate) const DASHBOARD_ROOT: &str = "/dashboard";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NavItem {
    pub title: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct NavSection {
    /// Section heading shown while expanded; `None` for the primary group.
    pub label: Option<&'static str>,
    pub items: &'static [NavItem],
}

pub(crate) const MAIN_NAV_ITEMS: &[NavItem] = &[
    NavItem {
        title: "Home",
        href: DASHBOARD_ROOT,
        icon: "home",
    },
    NavItem {
        title: "Brands",
        href: "/dashboard/brands",
        icon: "apartment",
    },
    NavItem {
        title: "Stores",
        href: "/dashboard/stores",
        icon: "storefront",
    },
    NavItem {
        title: "Owners",
        href: "/dashboard/owners",
        icon: "group",
    },
    NavItem {
        title: "Orders",
        href: "/dashboard/orders",
        icon: "shopping_cart",
    },
    NavItem {
        title: "Analytics",
        href: "/dashboard/analytics",
        icon: "bar_chart",
    },
    NavItem {
        title: "Contents",
        href: "/dashboard/contents",
        icon: "article",
    },
];

pub(crate) const MARKETING_NAV_ITEMS: &[NavItem] = &[
    NavItem {
        title: "Campaigns",
        href: "/dashboard/marketing/campaigns",
        icon: "campaign",
    },
    NavItem {
        title: "Coupons",
        href: "/dashboard/marketing/coupons",
        icon: "confirmation_number",
    },
    NavItem {
        title: "Payments",
        href: "/dashboard/marketing/prepaid-cards",
        icon: "credit_card",
    },
];

pub(crate) const ADMIN_NAV_ITEMS: &[NavItem] = &[NavItem {
    title: "Admin Accounts",
    href: "/dashboard/admins",
    icon: "manage_accounts",
}];

/// Always-visible group pinned below the scrollable sections.
pub(crate) const BOTTOM_NAV_ITEMS: &[NavItem] = &[
    NavItem {
        title: "Notifications",
        href: "/dashboard/notifications",
        icon: "notifications",
    },
    NavItem {
        title: "Settings",
        href: "/dashboard/settings",
        icon: "settings",
    },
];

pub(crate) const NAV_SECTIONS: &[NavSection] = &[
    NavSection {
        label: None,
        items: MAIN_NAV_ITEMS,
    },
    NavSection {
        label: Some("Marketing"),
        items: MARKETING_NAV_ITEMS,
    },
    NavSection {
        label: Some("Administration"),
        items: ADMIN_NAV_ITEMS,
    },
];

/// Decides whether a nav item should be highlighted for the current path.
///
/// The dashboard root matches only on exact equality so the home entry
/// does not stay lit on every child page. Every other target also matches
/// its own subtree, but only across a path separator: `/dashboard/stores`
/// claims `/dashboard/stores/123` and not `/dashboard/storesArchive`.
/// Note that only the root is guarded this way; sibling targets where one
/// is a path-prefix of another would both match the deeper page.
pub(crate) fn is_active(current_path: &str, target: &str) -> bool {
    if target == DASHBOARD_ROOT {
        return current_path == DASHBOARD_ROOT;
    }
    current_path == target
        || current_path
            .strip_prefix(target)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::{BOTTOM_NAV_ITEMS, DASHBOARD_ROOT, NAV_SECTIONS, is_active};

    #[test]
    fn root_item_matches_only_exactly() {
        assert!(is_active("/dashboard", DASHBOARD_ROOT));
        assert!(!is_active("/dashboard/stores", DASHBOARD_ROOT));
        assert!(!is_active("/dashboard/marketing/coupons", DASHBOARD_ROOT));
        assert!(!is_active("/", DASHBOARD_ROOT));
    }

    #[test]
    fn non_root_item_matches_itself_and_children() {
        assert!(is_active("/dashboard/stores", "/dashboard/stores"));
        assert!(is_active("/dashboard/stores/123", "/dashboard/stores"));
        assert!(is_active(
            "/dashboard/marketing/coupons/new",
            "/dashboard/marketing/coupons"
        ));
    }

    #[test]
    fn prefix_match_requires_a_separator() {
        assert!(!is_active("/dashboard/storesArchive", "/dashboard/stores"));
        assert!(!is_active("/dashboard/store", "/dashboard/stores"));
    }

    #[test]
    fn unknown_path_activates_nothing() {
        let all_items = NAV_SECTIONS
            .iter()
            .flat_map(|section| section.items.iter())
            .chain(BOTTOM_NAV_ITEMS.iter());
        for item in all_items {
            assert!(
                !is_active("/totally/elsewhere", item.href),
                "{} should not be active",
                item.href
            );
        }
    }

    #[test]
    fn registry_covers_all_groups_in_order() {
        assert_eq!(NAV_SECTIONS.len(), 3);
        assert_eq!(NAV_SECTIONS[0].label, None);
        assert_eq!(NAV_SECTIONS[1].label, Some("Marketing"));
        assert_eq!(NAV_SECTIONS[2].label, Some("Administration"));
        assert_eq!(NAV_SECTIONS[0].items[0].href, DASHBOARD_ROOT);
        assert_eq!(BOTTOM_NAV_ITEMS.len(), 2);
    }
}
