// Copyright 2025 the Pie Chart Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Icon lookup.
//!
//! Icons are opaque resources owned by the host. The engine only needs their
//! intrinsic size to keep the aspect ratio when scaling to a desired height.

use hashbrown::HashMap;

use crate::geometry::Size;

/// An opaque icon resource id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconId(pub u64);

impl IconId {
    /// Creates an icon id from a raw value.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Read-only access to icon resources.
///
/// Lookups may allocate, but must not observe or mutate engine state.
pub trait IconProvider {
    /// The intrinsic size of `icon`, or `None` if it is unknown.
    fn intrinsic_size(&self, icon: IconId) -> Option<Size>;
}

/// A provider that knows no icons.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoIcons;

impl IconProvider for NoIcons {
    fn intrinsic_size(&self, _icon: IconId) -> Option<Size> {
        None
    }
}

/// An in-memory icon table.
#[derive(Clone, Debug, Default)]
pub struct IconRegistry {
    sizes: HashMap<IconId, Size>,
}

impl IconRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) an icon's intrinsic size.
    pub fn insert(&mut self, icon: IconId, intrinsic: Size) -> Option<Size> {
        self.sizes.insert(icon, intrinsic)
    }

    /// Builder form of [`IconRegistry::insert`].
    pub fn with_icon(mut self, icon: IconId, intrinsic: Size) -> Self {
        self.insert(icon, intrinsic);
        self
    }

    /// Number of registered icons.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Returns `true` if no icons are registered.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

impl IconProvider for IconRegistry {
    fn intrinsic_size(&self, icon: IconId) -> Option<Size> {
        self.sizes.get(&icon).copied()
    }
}

/// Scales an icon to `height`, keeping its aspect ratio.
///
/// A missing icon, or one with no intrinsic height, has zero width.
pub fn icon_width(intrinsic: Option<Size>, height: f64) -> f64 {
    match intrinsic {
        Some(s) if s.height > 0.0 && s.width > 0.0 => height.max(0.0) * (s.width / s.height),
        _ => 0.0,
    }
}

/// [`icon_width`] for an optional icon looked up in `provider`.
pub fn resolve_icon_size(
    provider: &dyn IconProvider,
    icon: Option<IconId>,
    height: f64,
) -> Size {
    let width = icon_width(icon.and_then(|i| provider.intrinsic_size(i)), height);
    if width > 0.0 {
        Size::new(width, height.max(0.0))
    } else {
        Size::ZERO
    }
}
