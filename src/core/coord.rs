use std::ops::Mul;

/// A signed (row, col) offset between two squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Step {
    pub dr: i32,
    pub dc: i32,
}

impl Step {
    #[inline]
    pub const fn new(dr: i32, dc: i32) -> Self {
        Self { dr, dc }
    }
}

impl Mul<i32> for Step {
    type Output = Step;

    #[inline]
    fn mul(self, rhs: i32) -> Step {
        Step {
            dr: self.dr * rhs,
            dc: self.dc * rhs,
        }
    }
}

/// The two diagonals leading toward increasing rows.
pub const DOWN_DIAGONALS: [Step; 2] = [Step { dr: 1, dc: -1 }, Step { dr: 1, dc: 1 }];

/// The two diagonals leading toward decreasing rows.
pub const UP_DIAGONALS: [Step; 2] = [Step { dr: -1, dc: -1 }, Step { dr: -1, dc: 1 }];

/// All four diagonal unit steps.
pub const DIAGONALS: [Step; 4] = [
    Step { dr: -1, dc: -1 },
    Step { dr: -1, dc: 1 },
    Step { dr: 1, dc: -1 },
    Step { dr: 1, dc: 1 },
];
