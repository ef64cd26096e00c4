//! Core library for the Lychee admin gateway.
//!
//! This crate exposes the configuration, backend gateway client, view-model
//! mapper, list controller, and HTTP proxy routes used by the admin
//! product-management screen.

pub mod config;
pub mod controller;
pub mod error;
pub mod gateway;
pub mod handlers;
pub mod mapper;
pub mod models;
pub mod util;
