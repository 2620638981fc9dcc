//! Core library exports for the WaveSight trend service.
//!
//! This crate exposes the trend submission domain, repositories, HTTP routes
//! and service layers used by the WaveSight web application. The `data`
//! feature builds only the reusable persistence/domain layer; the `server`
//! feature adds the full Actix-web surface.

#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "data")]
pub mod schema;

#[cfg(feature = "server")]
pub mod dto;
#[cfg(feature = "server")]
pub mod error_conversions;
#[cfg(feature = "server")]
pub mod forms;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "server")]
pub mod services;
