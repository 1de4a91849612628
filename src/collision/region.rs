use crate::collision::outcome::Region;
use crate::math::Vec2;
use crate::objects::Geometry;

/// Classifies a circle centre into one of the nine regions around `rect`.
///
/// Corner regions start `corner_bias` pixels beyond the rectangle's side
/// edges, so a centre just past a corner still counts as a flat-edge hit.
pub fn classify_region(center: Vec2, rect: &Geometry, corner_bias: f64) -> Region {
    let left = rect.left();
    let right = rect.right();

    if center.y < rect.top() {
        if center.x < left - corner_bias {
            Region::TopLeft
        } else if center.x > right + corner_bias {
            Region::TopRight
        } else {
            Region::TopMiddle
        }
    } else if center.y > rect.bottom() {
        if center.x < left - corner_bias {
            Region::BottomLeft
        } else if center.x > right + corner_bias {
            Region::BottomRight
        } else {
            Region::BottomMiddle
        }
    } else if center.x < left {
        Region::LeftMiddle
    } else if center.x > right {
        Region::RightMiddle
    } else {
        Region::Inside
    }
}
