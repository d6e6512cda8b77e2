//! Bike-share API proxy.
//!
//! Fetches station metadata, availability and open/closed status from the
//! upstream bike-share API, reconciles them into one station map, and
//! serves that map through a small REST API and a CLI table.

pub mod config;
pub mod domain;
pub mod reconciler;
pub mod service;
pub mod table;
pub mod upstream;
pub mod web;

#[cfg(test)]
pub(crate) mod test_support;
