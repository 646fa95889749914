//! raylib windowing and rendering backend.
//!
//! Everything the simulation needs from the platform goes through
//! [`RaylibBackend`]: window creation, input polling, the pointer position,
//! frame timing, texture loading and sprite drawing. Textures are loaded
//! once at startup and released when the backend is dropped.

use bevy_ecs::prelude::Entity;
use log::{info, warn};
use raylib::prelude::*;
use rustc_hash::FxHashMap;
use std::path::Path;

use crate::components::sprite::{Sprite, SpriteTexture};
use crate::events::input::{InputEvent, Key};
use crate::resources::gameconfig::GameConfig;

/// raylib keys the game listens to, paired with their backend-neutral key.
const BINDINGS: [(KeyboardKey, Key); 10] = [
    (KeyboardKey::KEY_UP, Key::Up),
    (KeyboardKey::KEY_DOWN, Key::Down),
    (KeyboardKey::KEY_LEFT, Key::Left),
    (KeyboardKey::KEY_RIGHT, Key::Right),
    (KeyboardKey::KEY_W, Key::W),
    (KeyboardKey::KEY_A, Key::A),
    (KeyboardKey::KEY_S, Key::S),
    (KeyboardKey::KEY_D, Key::D),
    (KeyboardKey::KEY_SPACE, Key::Space),
    (KeyboardKey::KEY_LEFT_SHIFT, Key::LeftShift),
];

pub struct RaylibBackend {
    // Must drop before `rl`.
    textures: FxHashMap<SpriteTexture, Texture2D>,
    rl: RaylibHandle,
    thread: RaylibThread,
}

impl RaylibBackend {
    /// Open the window and load every texture named in `config`.
    pub fn new(config: &GameConfig) -> Result<Self, String> {
        let (mut rl, thread) = raylib::init()
            .size(config.window_width as i32, config.window_height as i32)
            .title(&config.title)
            .build();
        rl.set_target_fps(config.target_fps);
        // Disable ESC to exit
        rl.set_exit_key(None);

        let mut textures = FxHashMap::default();
        for (key, path) in [
            (SpriteTexture::Player, &config.player_texture),
            (SpriteTexture::Bullet, &config.bullet_texture),
            (SpriteTexture::Asteroid, &config.asteroid_texture),
        ] {
            let texture = load_texture(&mut rl, &thread, path)?;
            textures.insert(key, texture);
        }
        info!(
            "Window {}x{} open, {} textures loaded",
            config.window_width,
            config.window_height,
            textures.len()
        );

        Ok(RaylibBackend {
            textures,
            rl,
            thread,
        })
    }

    /// Events since the previous call. Window close is reported as
    /// [`InputEvent::Quit`].
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        if self.rl.window_should_close() {
            events.push(InputEvent::Quit);
        }
        for (raylib_key, key) in BINDINGS {
            if self.rl.is_key_pressed(raylib_key) {
                events.push(InputEvent::key_down(key));
            }
            if self.rl.is_key_released(raylib_key) {
                events.push(InputEvent::key_up(key));
            }
        }
        events
    }

    pub fn pointer_position(&self) -> (f32, f32) {
        let mouse = self.rl.get_mouse_position();
        (mouse.x, mouse.y)
    }

    /// Seconds since the previous frame.
    pub fn frame_time(&self) -> f32 {
        self.rl.get_frame_time()
    }

    /// Clear, draw every sprite rotated about its center, and present.
    pub fn draw(&mut self, sprites: &[(Entity, Sprite)]) {
        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(Color::WHITE);

        for (_, sprite) in sprites {
            let Some(texture) = self.textures.get(&sprite.texture) else {
                continue;
            };
            let src = Rectangle {
                x: 0.0,
                y: 0.0,
                width: texture.width as f32,
                height: texture.height as f32,
            };
            let (cx, cy) = sprite.center();
            let dest = Rectangle {
                x: cx,
                y: cy,
                width: sprite.rect.w,
                height: sprite.rect.h,
            };
            let origin = Vector2 {
                x: sprite.rect.w / 2.0,
                y: sprite.rect.h / 2.0,
            };
            d.draw_texture_pro(texture, src, dest, origin, sprite.angle, Color::WHITE);
        }
    }
}

fn load_texture(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    path: &Path,
) -> Result<Texture2D, String> {
    let texture = rl
        .load_texture(thread, &path.to_string_lossy())
        .map_err(|e| format!("Unable to load texture {}: {}", path.display(), e))?;
    if texture.width == 0 || texture.height == 0 {
        warn!("Texture {} is empty", path.display());
    }
    Ok(texture)
}
