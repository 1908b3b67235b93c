// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Primitive catalog

pub mod primitives;

pub use primitives::{Primitive, PrimitiveCatalog, PrimitiveKind};
