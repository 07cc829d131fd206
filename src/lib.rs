// SPDX-License-Identifier: MPL-2.0
//! `photonav` is a photo library viewer built with the Iced GUI framework.
//!
//! It shows the details of a selected photo (name, image, and tags), lets
//! the user browse and filter a photo library loaded from a TOML catalog or
//! a directory scan, and demonstrates internationalization with Fluent and
//! user preference management.

#![doc(html_root_url = "https://docs.rs/photonav/0.2.0")]

pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod library;
pub mod ui;
