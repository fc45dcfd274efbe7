//! Shared contact-message contract.
//!
//! This crate is the single source of truth for the shape of a contact-form
//! submission: the field constraints live here once and are enforced
//! identically by the HTTP boundary in `frontdesk-server` and the form layer
//! in `frontdesk-client`.  Everything in this crate is a pure check — no IO,
//! no clock, no store access.

pub mod api;
pub mod contact;
pub mod error;

pub use api::{ErrorResponse, MessageResponse, SubmitResponse};
pub use contact::{NewContactMessage, SERVICES};
pub use error::{FieldError, ValidationError};
