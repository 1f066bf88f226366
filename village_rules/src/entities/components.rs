//! Component definitions for entities.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A point or direction in world space, measured in blocks.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    pub fn normalized(&self) -> Option<Self> {
        let len = self.length();
        if len <= f64::EPSILON {
            return None;
        }
        Some(Self::new(self.x / len, self.y / len, self.z / len))
    }

    pub fn offset(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

/// Axis-aligned collision box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl BoundingBox {
    /// Box of the given size standing on `feet` (centered horizontally).
    pub fn around(feet: Vec3, width: f64, height: f64) -> Self {
        let half = width / 2.0;
        Self {
            min: feet.offset(-half, 0.0, -half),
            max: feet.offset(half, height, half),
        }
    }

    /// Distance along a unit ray at which it enters this box, if it does so
    /// within `max_distance`. A ray starting inside the box hits at 0.
    pub fn ray_intersection(&self, origin: Vec3, direction: Vec3, max_distance: f64) -> Option<f64> {
        let mut t_enter = 0.0_f64;
        let mut t_exit = max_distance;

        let axes = [
            (origin.x, direction.x, self.min.x, self.max.x),
            (origin.y, direction.y, self.min.y, self.max.y),
            (origin.z, direction.z, self.min.z, self.max.z),
        ];

        for (o, d, lo, hi) in axes {
            if d.abs() <= f64::EPSILON {
                // Parallel to this slab: must already be inside it.
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }
            let t1 = (lo - o) / d;
            let t2 = (hi - o) / d;
            let (near, far) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            t_enter = t_enter.max(near);
            t_exit = t_exit.min(far);
            if t_enter > t_exit {
                return None;
            }
        }

        Some(t_enter)
    }
}

/// Arbitrary key-value data attached to an entity.
///
/// Survives world serialization and is carried over when an entity is
/// transformed into another (see `WorldState::cure`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersistentData {
    #[serde(default)]
    values: HashMap<String, serde_json::Value>,
}

impl PersistentData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether any value is stored under `key`.
    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Get the string stored under `key`. Non-string values read as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(|v| v.as_str())
    }

    /// Store a string under `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values
            .insert(key.into(), serde_json::Value::String(value.into()));
    }

    pub fn remove(&mut self, key: &str) -> Option<serde_json::Value> {
        self.values.remove(key)
    }

    /// Copy every entry of `other` into this store, overwriting on conflict.
    pub fn copy_from(&mut self, other: &PersistentData) {
        for (key, value) in &other.values {
            self.values.insert(key.clone(), value.clone());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}
