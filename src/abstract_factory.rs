//! Abstract Factory: one factory object produces a whole family of shapes, so
//! swapping the factory swaps every shape the caller gets back.

use crate::error::PatternError;
use crate::transcript::Event;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

// =============================================================================
// Identity counter
// =============================================================================

/// Shared source of shape identities. Clones hand out from the same sequence.
#[derive(Debug, Clone, Default)]
pub struct ShapeIds {
    next: Arc<AtomicU64>,
}

impl ShapeIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(seed: u64) -> Self {
        Self {
            next: Arc::new(AtomicU64::new(seed)),
        }
    }

    /// Hands out the next id. The counter never wraps: once advancing it would
    /// overflow, every further call fails and `u64::MAX` itself is never issued.
    pub fn issue(&self) -> Result<u64, PatternError> {
        self.next
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |next| next.checked_add(1))
            .map_err(|last| PatternError::IdsExhausted { last })
    }

    /// Id the next shape will receive.
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

// =============================================================================
// Products
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Circle,
    Square,
    Ellipse,
    Rectangle,
}

impl ShapeKind {
    pub fn family(self) -> ShapeFamily {
        match self {
            ShapeKind::Circle | ShapeKind::Square => ShapeFamily::Simple,
            ShapeKind::Ellipse | ShapeKind::Rectangle => ShapeFamily::Robust,
        }
    }

    pub fn role(self) -> ShapeRole {
        match self {
            ShapeKind::Circle | ShapeKind::Ellipse => ShapeRole::Curved,
            ShapeKind::Square | ShapeKind::Rectangle => ShapeRole::Straight,
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ShapeKind::Circle => "circle",
            ShapeKind::Square => "square",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Rectangle => "rectangle",
        };
        f.write_str(label)
    }
}

pub trait Shape: fmt::Debug {
    fn id(&self) -> u64;
    fn kind(&self) -> ShapeKind;

    fn draw(&self) -> Event {
        Event::ShapeDrawn {
            kind: self.kind(),
            id: self.id(),
        }
    }
}

macro_rules! shape {
    ($name:ident, $kind:expr) => {
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            id: u64,
        }

        impl $name {
            pub fn new(ids: &ShapeIds) -> Result<Self, PatternError> {
                Ok(Self { id: ids.issue()? })
            }
        }

        impl Shape for $name {
            fn id(&self) -> u64 {
                self.id
            }

            fn kind(&self) -> ShapeKind {
                $kind
            }
        }
    };
}

shape!(Circle, ShapeKind::Circle);
shape!(Square, ShapeKind::Square);
shape!(Ellipse, ShapeKind::Ellipse);
shape!(Rectangle, ShapeKind::Rectangle);

// =============================================================================
// Factories
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeRole {
    Curved,
    Straight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeFamily {
    #[default]
    Simple,
    Robust,
}

impl ShapeFamily {
    pub fn factory(self, ids: ShapeIds) -> Box<dyn ShapeFactory> {
        match self {
            ShapeFamily::Simple => Box::new(SimpleShapeFactory::new(ids)),
            ShapeFamily::Robust => Box::new(RobustShapeFactory::new(ids)),
        }
    }
}

pub trait ShapeFactory {
    fn create_curved_instance(&self) -> Result<Box<dyn Shape>, PatternError>;
    fn create_straight_instance(&self) -> Result<Box<dyn Shape>, PatternError>;
    fn family(&self) -> ShapeFamily;

    fn create(&self, role: ShapeRole) -> Result<Box<dyn Shape>, PatternError> {
        let shape = match role {
            ShapeRole::Curved => self.create_curved_instance()?,
            ShapeRole::Straight => self.create_straight_instance()?,
        };
        debug!(?role, kind = %shape.kind(), id = shape.id(), "shape created");
        Ok(shape)
    }
}

#[derive(Debug, Clone)]
pub struct SimpleShapeFactory {
    ids: ShapeIds,
}

impl SimpleShapeFactory {
    pub fn new(ids: ShapeIds) -> Self {
        Self { ids }
    }
}

impl ShapeFactory for SimpleShapeFactory {
    fn create_curved_instance(&self) -> Result<Box<dyn Shape>, PatternError> {
        Ok(Box::new(Circle::new(&self.ids)?))
    }

    fn create_straight_instance(&self) -> Result<Box<dyn Shape>, PatternError> {
        Ok(Box::new(Square::new(&self.ids)?))
    }

    fn family(&self) -> ShapeFamily {
        ShapeFamily::Simple
    }
}

#[derive(Debug, Clone)]
pub struct RobustShapeFactory {
    ids: ShapeIds,
}

impl RobustShapeFactory {
    pub fn new(ids: ShapeIds) -> Self {
        Self { ids }
    }
}

impl ShapeFactory for RobustShapeFactory {
    fn create_curved_instance(&self) -> Result<Box<dyn Shape>, PatternError> {
        Ok(Box::new(Ellipse::new(&self.ids)?))
    }

    fn create_straight_instance(&self) -> Result<Box<dyn Shape>, PatternError> {
        Ok(Box::new(Rectangle::new(&self.ids)?))
    }

    fn family(&self) -> ShapeFamily {
        ShapeFamily::Robust
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn summary(shapes: &[Box<dyn Shape>]) -> Vec<(ShapeKind, u64)> {
        shapes.iter().map(|shape| (shape.kind(), shape.id())).collect()
    }

    #[test]
    fn test_simple_factory_curved_straight_curved() {
        let factory = SimpleShapeFactory::new(ShapeIds::new());
        let shapes = vec![
            factory.create_curved_instance().unwrap(),
            factory.create_straight_instance().unwrap(),
            factory.create_curved_instance().unwrap(),
        ];
        assert_eq!(
            summary(&shapes),
            vec![
                (ShapeKind::Circle, 0),
                (ShapeKind::Square, 1),
                (ShapeKind::Circle, 2),
            ]
        );
    }

    #[test]
    fn test_seeded_counter() {
        let factory = ShapeFamily::Robust.factory(ShapeIds::starting_at(40));
        let ids: Vec<u64> = (0..3).map(|_| factory.create(ShapeRole::Straight).unwrap().id()).collect();
        assert_eq!(ids, vec![40, 41, 42]);
    }

    #[test]
    fn test_counter_is_shared_across_factories() {
        let ids = ShapeIds::new();
        let simple = SimpleShapeFactory::new(ids.clone());
        let robust = RobustShapeFactory::new(ids.clone());

        assert_eq!(simple.create_curved_instance().unwrap().id(), 0);
        assert_eq!(robust.create_curved_instance().unwrap().id(), 1);
        assert_eq!(simple.create_straight_instance().unwrap().id(), 2);
        assert_eq!(ids.peek(), 3);
    }

    #[test]
    fn test_swapping_factory_swaps_whole_family() {
        let robust = RobustShapeFactory::new(ShapeIds::new());
        assert_eq!(robust.create_curved_instance().unwrap().kind(), ShapeKind::Ellipse);
        assert_eq!(robust.create_straight_instance().unwrap().kind(), ShapeKind::Rectangle);
        assert_eq!(robust.family(), ShapeFamily::Robust);
    }

    #[test]
    fn test_draw_is_idempotent() {
        let circle = Circle::new(&ShapeIds::starting_at(5)).unwrap();
        assert_eq!(circle.draw(), circle.draw());
        assert_eq!(circle.draw().to_string(), "circle 5: draw");
    }

    #[test]
    fn test_counter_stops_before_wrapping() {
        let factory = SimpleShapeFactory::new(ShapeIds::starting_at(u64::MAX - 2));
        assert_eq!(factory.create_curved_instance().unwrap().id(), u64::MAX - 2);
        assert_eq!(factory.create_straight_instance().unwrap().id(), u64::MAX - 1);

        let err = factory.create_curved_instance().unwrap_err();
        assert_eq!(err, PatternError::IdsExhausted { last: u64::MAX });
        assert!(factory.create_straight_instance().is_err());
    }

    #[test]
    fn test_seed_at_top_of_range_issues_nothing() {
        let ids = ShapeIds::starting_at(u64::MAX);
        assert!(ids.issue().is_err());
        assert_eq!(ids.peek(), u64::MAX);
    }

    #[test]
    fn test_kind_metadata() {
        assert_eq!(ShapeKind::Square.family(), ShapeFamily::Simple);
        assert_eq!(ShapeKind::Ellipse.role(), ShapeRole::Curved);
        assert_eq!(ShapeKind::Rectangle.to_string(), "rectangle");
    }

    fn role_strategy() -> impl Strategy<Value = ShapeRole> {
        prop_oneof![Just(ShapeRole::Curved), Just(ShapeRole::Straight)]
    }

    fn family_strategy() -> impl Strategy<Value = ShapeFamily> {
        prop_oneof![Just(ShapeFamily::Simple), Just(ShapeFamily::Robust)]
    }

    proptest! {
        #[test]
        fn test_ids_gapless_and_family_never_mixed(
            seed in 0u64..1_000_000,
            family in family_strategy(),
            roles in prop::collection::vec(role_strategy(), 0..40),
        ) {
            let factory = family.factory(ShapeIds::starting_at(seed));
            let shapes: Vec<Box<dyn Shape>> = roles.iter().map(|role| factory.create(*role).unwrap()).collect();

            for (offset, (shape, role)) in shapes.iter().zip(&roles).enumerate() {
                prop_assert_eq!(shape.id(), seed + offset as u64);
                prop_assert_eq!(shape.kind().family(), family);
                prop_assert_eq!(shape.kind().role(), *role);
            }
        }
    }
}
