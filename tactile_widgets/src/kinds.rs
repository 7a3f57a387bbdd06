// Copyright 2026 the Tactile Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Which widget kinds this build supports.

use tactile_region::RegionKind;

bitflags::bitflags! {
    /// A set of widget kinds.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct WidgetKinds: u8 {
        /// Tap-and-release buttons.
        const BUTTON = 0b0000_0001;
        /// Drag-and-track sliders.
        const SLIDER = 0b0000_0010;
    }
}

impl WidgetKinds {
    /// Kinds compiled into this build, as selected by the `button` and `slider` features.
    #[must_use]
    pub const fn compiled() -> Self {
        let mut kinds = Self::empty();
        if cfg!(feature = "button") {
            kinds = kinds.union(Self::BUTTON);
        }
        if cfg!(feature = "slider") {
            kinds = kinds.union(Self::SLIDER);
        }
        kinds
    }

    /// The kind a region tag stands for. Unknown tags map to the empty set.
    #[must_use]
    pub fn of_region(kind: RegionKind) -> Self {
        match kind {
            RegionKind::Button => Self::BUTTON,
            RegionKind::Slider => Self::SLIDER,
            _ => Self::empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiled_matches_features() {
        let kinds = WidgetKinds::compiled();
        assert_eq!(kinds.contains(WidgetKinds::BUTTON), cfg!(feature = "button"));
        assert_eq!(kinds.contains(WidgetKinds::SLIDER), cfg!(feature = "slider"));
        assert!(!kinds.is_empty());
    }

    #[test]
    fn region_tags_map_to_single_kinds() {
        assert_eq!(WidgetKinds::of_region(RegionKind::Button), WidgetKinds::BUTTON);
        assert_eq!(WidgetKinds::of_region(RegionKind::Slider), WidgetKinds::SLIDER);
    }
}
