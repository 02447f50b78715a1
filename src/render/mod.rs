// Copyright 2025 the Planboard Authors
// SPDX-License-Identifier: Apache-2.0

//! Painting into layered vello scenes

pub mod basic;
pub mod layers;

pub use basic::{paint_arena, parse_color};
pub use layers::{LayerName, LayeredScene};
