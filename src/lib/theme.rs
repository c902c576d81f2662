//! Shared Tailwind class constants to keep table and card markup
//! consistent across the dashboard screens.

pub struct Theme;

impl Theme {
    /// Card container used by stat cards and list panels.
    pub const CARD: &'static str =
        "rounded-lg border border-gray-200 bg-white shadow-sm dark:border-gray-800 dark:bg-gray-900";

    /// Wrapper for full-width tables inside a card.
    pub const TABLE_WRAP: &'static str =
        "overflow-hidden rounded-lg border border-gray-200 bg-white shadow-sm dark:border-gray-800 dark:bg-gray-900";

    /// Header cell for data tables.
    pub const TH: &'static str =
        "px-6 py-3 text-left text-xs font-medium uppercase tracking-wider text-gray-500 dark:text-gray-400";

    /// Body cell for data tables.
    pub const TD: &'static str =
        "px-6 py-4 whitespace-nowrap text-sm text-gray-600 dark:text-gray-300";

    /// Emphasized first cell of a table row.
    pub const TD_PRIMARY: &'static str =
        "px-6 py-4 whitespace-nowrap text-sm font-medium text-gray-900 dark:text-white";

    /// Text input used by forms.
    pub const INPUT: &'static str =
        "h-11 w-full rounded-md border border-gray-300 bg-white px-3 text-sm text-gray-900 focus:border-gray-500 focus:outline-none dark:border-gray-700 dark:bg-gray-800 dark:text-white";

    /// Page subtitle below the header title block.
    pub const PAGE_DESC: &'static str = "text-sm text-gray-500 dark:text-gray-400";
}
