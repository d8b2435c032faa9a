#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pos {
    pub x: u16,
    pub y: u16,
}

impl Pos {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Converts signed widget coordinates, rejecting anything left of or
    /// above the origin.
    pub fn from_signed(x: i32, y: i32) -> Option<Self> {
        let x = u16::try_from(x).ok()?;
        let y = u16::try_from(y).ok()?;
        Some(Self { x, y })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub w: u16,
    pub h: u16,
}

impl Size {
    pub const fn new(w: u16, h: u16) -> Self {
        Self { w, h }
    }
}

/// A widget dimension: either a fixed number of cells or "fill the screen".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Extent {
    #[default]
    Auto,
    Cells(u16),
}

impl Extent {
    /// Resolves against the screen dimension at the time of the call. Later
    /// screen resizes do not affect an already resolved value.
    pub fn resolve(self, screen: u16) -> u16 {
        match self {
            Extent::Auto => screen,
            Extent::Cells(n) => n,
        }
    }
}

impl From<u16> for Extent {
    fn from(n: u16) -> Self {
        Extent::Cells(n)
    }
}

/// A clip rectangle in signed screen coordinates. Widgets may compute
/// positions left of or above the screen; those cells are simply dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: u16,
    pub h: u16,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: u16, h: u16) -> Self {
        Self { x, y, w, h }
    }

    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    pub fn right(&self) -> i32 {
        self.x + self.w as i32
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h as i32
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        if self.is_empty() {
            return false;
        }
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrinks the rectangle by `n` cells on every side.
    pub fn shrink(self, n: u16) -> Rect {
        Rect::new(
            self.x + n as i32,
            self.y + n as i32,
            self.w.saturating_sub(n.saturating_mul(2)),
            self.h.saturating_sub(n.saturating_mul(2)),
        )
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/geom.rs"]
mod tests;
