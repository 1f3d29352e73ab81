// Gallery state and the per-frame update.
//
// `Gallery` owns the tiles, the pointer state, the activation reference and
// any in-flight reset tweens. The DOM layer only forwards events into it and
// copies `visuals()` onto the tile elements after each `tick`.

use crate::activation::{Activation, ClickOutcome};
use crate::config::GalleryConfig;
use crate::input::PointerState;
use crate::projection::{ambient_opacity, ambient_scale, depth_z_index, Rotation, TileVisual};
use crate::sphere::{generate_tiles, Tile};
use crate::transition::{ResetTween, TweenValues};
use anyhow::Result;

pub struct Gallery {
    tiles: Vec<Tile>,
    pointer: PointerState,
    activation: Activation,
    visuals: Vec<TileVisual>,
    resets: Vec<Option<ResetTween>>,
}

impl Gallery {
    pub fn new(config: &GalleryConfig) -> Result<Self> {
        config.validate()?;
        let tiles = generate_tiles(config);
        let visuals = tiles
            .iter()
            .map(|t| TileVisual::ambient(Rotation::IDENTITY.apply(t.base)))
            .collect();
        let resets = vec![None; tiles.len()];
        Ok(Self {
            tiles,
            pointer: PointerState::default(),
            activation: Activation::Idle,
            visuals,
            resets,
        })
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Styles written by the most recent tick, indexed like `tiles()`.
    pub fn visuals(&self) -> &[TileVisual] {
        &self.visuals
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn is_resetting(&self) -> bool {
        self.resets.iter().any(Option::is_some)
    }

    pub fn on_pointer_move(
        &mut self,
        client_x: f64,
        client_y: f64,
        viewport_w: f64,
        viewport_h: f64,
    ) {
        self.pointer.track(client_x, client_y, viewport_w, viewport_h);
    }

    pub fn on_tile_click(&mut self, tile: usize) -> ClickOutcome {
        if tile >= self.tiles.len() {
            return ClickOutcome::Unchanged;
        }
        let outcome = self.activation.click_tile(tile);
        if let ClickOutcome::Deactivated(_) = outcome {
            self.start_reset();
        }
        outcome
    }

    pub fn on_document_click(&mut self) -> ClickOutcome {
        let outcome = self.activation.click_outside();
        if let ClickOutcome::Deactivated(_) = outcome {
            self.start_reset();
        }
        outcome
    }

    /// Tween every tile from the style it last showed back to ambient styling.
    fn start_reset(&mut self) {
        for (reset, visual) in self.resets.iter_mut().zip(&self.visuals) {
            *reset = Some(ResetTween::new(TweenValues {
                scale: visual.scale,
                opacity: visual.opacity,
                blur_px: visual.blur_px,
            }));
        }
    }

    /// One display frame. Must not block; `dt_sec` only advances reset tweens,
    /// pointer smoothing is a fixed step per frame.
    pub fn tick(&mut self, dt_sec: f64) {
        self.pointer.smooth();
        let rotation = Rotation::from_pointer(self.pointer.current_x, self.pointer.current_y);
        let active = self.activation.active();

        for ((tile, visual), reset) in self
            .tiles
            .iter()
            .zip(self.visuals.iter_mut())
            .zip(self.resets.iter_mut())
        {
            let p = rotation.apply(tile.base);

            // Tweens keep running under an activation; the activated branch
            // simply overwrites them.
            // The tween settles on this frame's ambient opacity, so the
            // hand-off to the idle branch is continuous.
            let tween = reset.as_mut().map(|t| {
                t.advance(dt_sec);
                t.values_toward(TweenValues::settled(ambient_opacity(p.z)))
            });
            if matches!(reset, Some(t) if t.finished()) {
                *reset = None;
            }

            *visual = match (active, tween) {
                (Some(a), _) if a == tile.index => TileVisual::activated(p),
                (Some(_), _) => TileVisual::dimmed(p),
                // Transform scale follows depth during the reset; only
                // opacity and blur come from the tween.
                (None, Some(v)) => TileVisual {
                    translate: p,
                    scale: ambient_scale(p.z),
                    opacity: v.opacity,
                    blur_px: v.blur_px,
                    z_index: depth_z_index(p.z),
                },
                (None, None) => TileVisual::ambient(p),
            };
        }
    }
}
