//! Core types for the outreach engine
//!
//! This crate provides the data model shared across the workspace:
//! - Contact and campaign records, as supplied by the data layer
//! - Disposition catalog entries and the category lookup
//! - Automation rules with their trigger condition bags
//!
//! Everything here is a plain serde-serializable snapshot. The engine and
//! config crates read these types; nothing in this crate performs I/O.

pub mod automation;
pub mod campaign;
pub mod contact;
pub mod disposition;

pub use automation::{Automation, TagValue, TriggerConditions};
pub use campaign::Campaign;
pub use contact::Contact;
pub use disposition::{Disposition, DispositionCategory};
