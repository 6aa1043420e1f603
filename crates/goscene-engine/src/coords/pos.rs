/// 2D integer coordinate pair.
///
/// Plain value type: copies are independent and there are no invariants
/// beyond storage.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Coords {
    x: i32,
    y: i32,
}

impl Coords {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    #[inline]
    pub const fn x(self) -> i32 {
        self.x
    }

    #[inline]
    pub const fn y(self) -> i32 {
        self.y
    }

    #[inline]
    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }
}

impl From<(i32, i32)> for Coords {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
