mod alert;
mod badge;
mod button;
mod card;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use badge::{Badge, BadgeTone};
pub(crate) use button::{Button, ButtonVariant};
pub(crate) use card::Card;
