//! Demo login feature. There is no identity backend behind this build:
//! the client validates the form, waits one simulated round-trip, and
//! accepts any non-empty credentials. Keeping the flow behind this module
//! means the login route will not change shape once a real API lands.

pub(crate) mod client;
pub(crate) mod types;
