//! Shared frontend utilities for configuration, errors, formatting, and
//! theme constants. There is no backend behind this dashboard yet: every
//! screen renders fixture data held in its feature module, so these
//! helpers cover presentation concerns only.

pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod format;
pub(crate) mod theme;

pub(crate) const GIT_COMMIT_HASH: &str = match option_env!("SOBOK_ADMIN_GIT_SHA") {
    Some(sha) => sha,
    None => "unknown",
};

pub(crate) use errors::AppError;
