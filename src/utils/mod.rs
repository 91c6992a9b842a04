//! Helpers shared by the HTTP layer and background tasks.
//!
//! - [`response_sent`] - Signal fired once a response has been handed off

pub mod response_sent;
