// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`photo_details`] - Details pane for the selected photo
//! - [`library_panel`] - Sidebar listing the visible photos
//! - [`filter_bar`] - Search and tag filter controls
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod filter_bar;
pub mod library_panel;
pub mod photo_details;
pub mod styles;
