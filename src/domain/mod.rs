//! Domain layer: entities and the contracts of external collaborators.
//!
//! # Architecture
//!
//! - [`entities`] - Alias lookups and device categories
//! - [`backend`] - Backend RPC contract ([`backend::LinkBackend`])
//! - [`signatures`] - User-agent signature database capability
//! - [`device_classifier`] - User-agent to [`entities::DeviceType`] mapping
//! - [`click_event`] - Classified click sent for analytics
//! - [`click_worker`] - Detached task recording a single click
//!
//! # Click Processing Flow
//!
//! 1. Redirect handler answers `302`
//! 2. [`click_worker::run_click_task`] waits until the response is done
//! 3. The user agent is classified into a [`entities::DeviceType`]
//! 4. The resulting [`click_event::ClickEvent`] is sent to the backend, failures are logged

pub mod backend;
pub mod click_event;
pub mod click_worker;
pub mod device_classifier;
pub mod entities;
pub mod signatures;
