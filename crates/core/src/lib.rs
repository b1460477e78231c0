// SPDX-License-Identifier: MIT

//!
//! *Part of the wider TimelineGrid project*
//!
//! This crate defines the basic datatypes used across the TimelineGrid project
//! (layout engine, command line driver), along with the calendar arithmetic
//! used to turn pairs of timestamps into whole numbers of calendar units.
//!
//! This crate aims to provide APIs for each type so that if a type is
//! instantiated, the developer can be sure it's valid.  Raw values coming from
//! storage (granularity codes, priorities, timestamp fields) are checked once,
//! at the point they are converted into these types.
//!

mod distance;
mod event;
mod granularity;
mod timestamp;
mod window;

pub use distance::*;
pub use event::*;
pub use granularity::*;
pub use timestamp::*;
pub use window::*;
