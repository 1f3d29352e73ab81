/// Which tile, if any, is currently activated. Holds an index into the
/// gallery's tile array rather than a reference to the tile.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    #[default]
    Idle,
    Active(usize),
}

/// What a click did to the activation state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    Activated(usize),
    /// Activation cleared; the caller starts the reset transition.
    Deactivated(usize),
    Unchanged,
}

impl Activation {
    #[inline]
    pub fn active(&self) -> Option<usize> {
        match *self {
            Activation::Idle => None,
            Activation::Active(i) => Some(i),
        }
    }

    #[inline]
    pub fn is_active(&self, tile: usize) -> bool {
        *self == Activation::Active(tile)
    }

    /// Click landing on `tile`. The event never reaches the document handler.
    ///
    /// A click on a different tile while one is active leaves the active tile
    /// in place; there is no direct tile-to-tile switch.
    pub fn click_tile(&mut self, tile: usize) -> ClickOutcome {
        match *self {
            Activation::Idle => {
                *self = Activation::Active(tile);
                ClickOutcome::Activated(tile)
            }
            Activation::Active(current) if current == tile => {
                *self = Activation::Idle;
                ClickOutcome::Deactivated(tile)
            }
            Activation::Active(_) => ClickOutcome::Unchanged,
        }
    }

    /// Click anywhere outside the tiles.
    pub fn click_outside(&mut self) -> ClickOutcome {
        match *self {
            Activation::Idle => ClickOutcome::Unchanged,
            Activation::Active(current) => {
                *self = Activation::Idle;
                ClickOutcome::Deactivated(current)
            }
        }
    }
}
