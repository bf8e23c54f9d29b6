//! # SIP Shared
//!
//! Wire types shared by the app servers and their browser front ends,
//! plus the HTML escaping used when a page is filled in on the server.

pub mod dto;
pub mod html;
pub mod response;

pub use response::{ErrorResponse, OkResponse, RedirectResponse};
