//! EV charging station locator server.
//!
//! A web application that answers: "which charging stations are within
//! this distance of me, and which of them can I actually use?"
//!
//! Station data comes from a static dataset extract or the live KEPCO
//! open-data API; queries annotate each station with its great-circle
//! distance from a reference point and filter on categorical fields.

pub mod cache;
pub mod domain;
pub mod geo;
pub mod geocode;
pub mod ingest;
pub mod kepco;
pub mod query;
pub mod repository;
pub mod web;
