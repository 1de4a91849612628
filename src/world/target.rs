use std::fmt;

use crate::objects::Sprite;
use crate::shapes::ShapeKind;

/// One argument to [`Collider::hit`](crate::world::Collider::hit): a single
/// sprite or a group of sprites.
#[derive(Debug)]
pub enum Target<'a> {
    One(&'a mut Sprite),
    Group(&'a mut [Sprite]),
}

impl Target<'_> {
    pub fn kind(&self) -> TargetKind {
        match self {
            Target::One(sprite) => sprite.kind().into(),
            Target::Group(_) => TargetKind::Group,
        }
    }
}

impl<'a> From<&'a mut Sprite> for Target<'a> {
    fn from(sprite: &'a mut Sprite) -> Self {
        Target::One(sprite)
    }
}

impl<'a> From<&'a mut [Sprite]> for Target<'a> {
    fn from(group: &'a mut [Sprite]) -> Self {
        Target::Group(group)
    }
}

impl<'a> From<&'a mut Vec<Sprite>> for Target<'a> {
    fn from(group: &'a mut Vec<Sprite>) -> Self {
        Target::Group(group.as_mut_slice())
    }
}

/// What kind of thing a [`Target`] is, as seen by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetKind {
    Circle,
    Rectangle,
    Point,
    Group,
}

impl From<ShapeKind> for TargetKind {
    fn from(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Circle => TargetKind::Circle,
            ShapeKind::Rectangle => TargetKind::Rectangle,
            ShapeKind::Point => TargetKind::Point,
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TargetKind::Circle => "circle",
            TargetKind::Rectangle => "rectangle",
            TargetKind::Point => "point",
            TargetKind::Group => "group",
        };
        f.write_str(name)
    }
}
