// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Random sampling of expression trees for genetic programming

pub mod generator;

pub use generator::{GeneratorConfig, TreeGenerator};
