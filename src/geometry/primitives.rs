// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Fitted geometric primitives
//!
//! Primitives are pure data: the parameters come from a shape-fitting step and
//! are carried along only so a run can name its terminals. No geometry is ever
//! evaluated here.

use crate::ast::TerminalSet;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Primitive type without parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    Plane,
    Sphere,
    Cylinder,
    Torus,
    Cone,
    Ellipsoid,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 6] = [
        PrimitiveKind::Plane,
        PrimitiveKind::Sphere,
        PrimitiveKind::Cylinder,
        PrimitiveKind::Torus,
        PrimitiveKind::Cone,
        PrimitiveKind::Ellipsoid,
    ];

    /// Lowercase identifier used in terminal names
    pub fn tag(&self) -> &'static str {
        match self {
            PrimitiveKind::Plane => "plane",
            PrimitiveKind::Sphere => "sphere",
            PrimitiveKind::Cylinder => "cylinder",
            PrimitiveKind::Torus => "torus",
            PrimitiveKind::Cone => "cone",
            PrimitiveKind::Ellipsoid => "ellipsoid",
        }
    }

    /// Number of numeric parameters a fitted row must carry
    pub fn parameter_count(&self) -> usize {
        match self {
            PrimitiveKind::Plane => 4,
            PrimitiveKind::Sphere => 4,
            PrimitiveKind::Cylinder => 7,
            PrimitiveKind::Torus => 8,
            PrimitiveKind::Cone => 7,
            PrimitiveKind::Ellipsoid => 9,
        }
    }
}

impl FromStr for PrimitiveKind {
    type Err = ();

    /// Case-insensitive lookup by type name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.tag() == lower)
            .ok_or(())
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A fitted primitive with its parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Primitive {
    Plane {
        normal: Vector3<f64>,
        dist: f64,
    },
    Sphere {
        center: Vector3<f64>,
        radius: f64,
    },
    Cylinder {
        axis_dir: Vector3<f64>,
        axis_pos: Vector3<f64>,
        radius: f64,
    },
    Torus {
        normal: Vector3<f64>,
        center: Vector3<f64>,
        rminor: f64,
        rmajor: f64,
    },
    Cone {
        axis_dir: Vector3<f64>,
        center: Vector3<f64>,
        angle: f64,
    },
    Ellipsoid {
        center: Vector3<f64>,
        radii: Vector3<f64>,
        /// Euler angles (theta, phi, psi)
        rotation: Vector3<f64>,
    },
}

impl Primitive {
    pub fn sphere(center: Vector3<f64>, radius: f64) -> Self {
        Self::Sphere { center, radius }
    }

    pub fn plane(normal: Vector3<f64>, dist: f64) -> Self {
        Self::Plane { normal, dist }
    }

    /// Build a primitive from a flat parameter row.
    ///
    /// Returns `None` when `params` does not hold exactly
    /// `kind.parameter_count()` values.
    pub fn from_parameters(kind: PrimitiveKind, params: &[f64]) -> Option<Self> {
        if params.len() != kind.parameter_count() {
            return None;
        }
        let v = |i: usize| Vector3::new(params[i], params[i + 1], params[i + 2]);

        let primitive = match kind {
            PrimitiveKind::Plane => Self::Plane {
                normal: v(0),
                dist: params[3],
            },
            PrimitiveKind::Sphere => Self::Sphere {
                center: v(0),
                radius: params[3],
            },
            PrimitiveKind::Cylinder => Self::Cylinder {
                axis_dir: v(0),
                axis_pos: v(3),
                radius: params[6],
            },
            PrimitiveKind::Torus => Self::Torus {
                normal: v(0),
                center: v(3),
                rminor: params[6],
                rmajor: params[7],
            },
            PrimitiveKind::Cone => Self::Cone {
                axis_dir: v(0),
                center: v(3),
                angle: params[6],
            },
            PrimitiveKind::Ellipsoid => Self::Ellipsoid {
                center: v(0),
                radii: v(3),
                rotation: v(6),
            },
        };
        Some(primitive)
    }

    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Self::Plane { .. } => PrimitiveKind::Plane,
            Self::Sphere { .. } => PrimitiveKind::Sphere,
            Self::Cylinder { .. } => PrimitiveKind::Cylinder,
            Self::Torus { .. } => PrimitiveKind::Torus,
            Self::Cone { .. } => PrimitiveKind::Cone,
            Self::Ellipsoid { .. } => PrimitiveKind::Ellipsoid,
        }
    }

    /// Lowercase type identifier, e.g. `"sphere"`
    pub fn type_tag(&self) -> &'static str {
        self.kind().tag()
    }
}

/// Ordered list of primitives read for one run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveCatalog {
    primitives: Vec<Primitive>,
}

impl PrimitiveCatalog {
    pub fn new(primitives: Vec<Primitive>) -> Self {
        Self { primitives }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter()
    }

    /// Derive terminal names: the type tag followed by the position of the
    /// primitive in the catalog. The index is shared across types, so
    /// `[sphere, sphere, plane]` yields `sphere0, sphere1, plane2`.
    pub fn terminals(&self) -> TerminalSet {
        TerminalSet::from_names(
            self.primitives
                .iter()
                .enumerate()
                .map(|(index, primitive)| format!("{}{}", primitive.type_tag(), index)),
        )
    }
}

impl FromIterator<Primitive> for PrimitiveCatalog {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
