//! Smartwatch API - Headless content API for the smartwatch storefront
//!
//! Serves published posts and products (with brand enrichment) as JSON,
//! accepts authenticated stock decrements from the checkout flow, and
//! fires a build hook when a post is published.

pub mod adapters;
pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
