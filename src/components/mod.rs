//! Shared UI components exported for routes.

pub(crate) mod layout;
pub(crate) mod ui;

pub(crate) use ui::{Alert, AlertKind, Badge, BadgeTone, Button, ButtonVariant, Card};
