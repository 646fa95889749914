//! Sprite component and the rectangle geometry it carries.
//!
//! A [`Sprite`] places an entity on screen: an axis-aligned destination
//! rectangle, the texture to draw into it and a rotation angle in degrees.
//! The rectangle is also the entity's collision shape and the reference for
//! its "center", which tracking and shooting aim from.

use bevy_ecs::prelude::Component;

/// Axis-aligned rectangle in screen units. `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Center point (position plus half extent).
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// AABB overlap test. Touching edges do not count as an intersection,
    /// and an empty rectangle never intersects anything.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    /// A rectangle with no positive area. Negative sizes count as empty.
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }
}

/// Which of the shared textures a sprite is drawn with.
///
/// Textures are loaded once by the backend and only referenced here, so the
/// key is a plain copyable tag rather than a handle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SpriteTexture {
    Player,
    Bullet,
    Asteroid,
}

/// Visual placement and orientation of an entity.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Sprite {
    pub rect: Rect,
    pub texture: SpriteTexture,
    /// Clockwise rotation in degrees, about the rectangle's center.
    pub angle: f32,
}

impl Sprite {
    pub fn new(rect: Rect, texture: SpriteTexture, angle: f32) -> Self {
        Self {
            rect,
            texture,
            angle,
        }
    }

    pub fn center(&self) -> (f32, f32) {
        self.rect.center()
    }
}
