//! Day-by-day itinerary planning for Tripwise.
//!
//! This crate provides [`RotatingPlanner`], the default implementation of the
//! [`ItineraryPlanner`](tripwise_core::ItineraryPlanner) trait. Each day takes
//! up to [`MAX_ACTIVITIES_PER_DAY`] of the destination's activity templates,
//! starting where the previous day stopped and wrapping around the list.
//! Destinations without templates, including ids the catalog does not know,
//! get four generic activities instead.
//!
//! Identifiers come from an injected
//! [`IdGenerator`](tripwise_core::IdGenerator); the default issues UUID v4
//! strings.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod generic;
mod planner;

pub use generic::{GENERIC_ACTIVITY_COUNT, generic_activities};
pub use planner::{MAX_ACTIVITIES_PER_DAY, RotatingPlanner};
