// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use ultraviolet::DVec3;

/// An axis-aligned bounding box defined by two opposite corners (`min` and `max`).
/// `min.x <= max.x`, `min.y <= max.y`, `min.z <= max.z`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub min: DVec3,
    pub max: DVec3,
}

impl BoundingBox {
    /// Returns the smallest `BoundingBox` that would contain both `self` and `other`.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: DVec3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: DVec3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }

    /// Returns true if the provided `point` is inside this `BoundingBox`.
    /// Otherwise returns false.
    pub fn contains(&self, point: DVec3) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
            && self.min.z <= point.z
            && point.z <= self.max.z
    }

    /// Returns the geometric center of the box.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_encloses_both_operands() {
        let a = BoundingBox {
            min: DVec3::new(0.0, 0.0, 0.0),
            max: DVec3::new(1.0, 1.0, 1.0),
        };
        let b = BoundingBox {
            min: DVec3::new(-2.0, 0.5, 0.5),
            max: DVec3::new(0.5, 3.0, 0.5),
        };
        let u = a.union(&b);
        assert_eq!(u.min, DVec3::new(-2.0, 0.0, 0.0));
        assert_eq!(u.max, DVec3::new(1.0, 3.0, 1.0));
        assert!(u.contains(a.min) && u.contains(a.max));
        assert!(u.contains(b.min) && u.contains(b.max));
    }

    #[test]
    fn center_is_midpoint() {
        let b = BoundingBox {
            min: DVec3::zero(),
            max: DVec3::new(10.86, 10.86, 21.72),
        };
        assert_eq!(b.center(), DVec3::new(5.43, 5.43, 10.86));
    }

    #[test]
    fn contains_is_inclusive_at_the_boundary() {
        let b = BoundingBox {
            min: DVec3::zero(),
            max: DVec3::new(1.0, 1.0, 1.0),
        };
        assert!(b.contains(DVec3::zero()));
        assert!(b.contains(DVec3::new(1.0, 1.0, 1.0)));
        assert!(!b.contains(DVec3::new(1.0, 1.0, 1.0 + 1e-12)));
    }
}

// End of File
