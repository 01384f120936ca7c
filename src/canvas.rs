/*
 * Canvas Module
 *
 * The simulation lives in canvas space: origin at the top-left corner, +y
 * pointing down, one unit per logical pixel. nannou draws in window space
 * with the origin at the centre and +y pointing up. This module converts
 * between the two using the window rectangle that is current this frame.
 */

use nannou::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Canvas {
    pub rect: Rect,
}

impl Canvas {
    pub fn new(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn size(&self) -> Vec2 {
        self.rect.wh()
    }

    // Canvas space -> window space
    pub fn to_screen(&self, point: Point2) -> Point2 {
        pt2(self.rect.left() + point.x, self.rect.top() - point.y)
    }

    // Window space -> canvas space
    pub fn from_screen(&self, point: Point2) -> Point2 {
        pt2(point.x - self.rect.left(), self.rect.top() - point.y)
    }
}
