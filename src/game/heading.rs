/// Cardinal direction a snake crawls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    East,
    West,
    North,
    South,
}

impl Heading {
    /// Returns the heading exactly opposite to this one
    pub fn opposite(&self) -> Heading {
        match self {
            Heading::East => Heading::West,
            Heading::West => Heading::East,
            Heading::North => Heading::South,
            Heading::South => Heading::North,
        }
    }

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Heading) -> bool {
        other == self.opposite()
    }

    /// Returns the two headings at right angles to this one
    pub fn perpendiculars(&self) -> [Heading; 2] {
        match self {
            Heading::East | Heading::West => [Heading::North, Heading::South],
            Heading::North | Heading::South => [Heading::East, Heading::West],
        }
    }

    /// Returns the delta (dx, dy) for moving one cell in this heading.
    /// Rows grow downward, so North is negative y.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Heading::East => (1, 0),
            Heading::West => (-1, 0),
            Heading::North => (0, -1),
            Heading::South => (0, 1),
        }
    }
}

/// A requested heading change for the next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Turn to a specific heading
    Turn(Heading),
    /// Keep crawling in the current heading
    Keep,
}

impl From<Heading> for Intent {
    fn from(heading: Heading) -> Self {
        Intent::Turn(heading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_headings() {
        assert_eq!(Heading::East.opposite(), Heading::West);
        assert_eq!(Heading::West.opposite(), Heading::East);
        assert_eq!(Heading::North.opposite(), Heading::South);
        assert_eq!(Heading::South.opposite(), Heading::North);

        assert!(Heading::East.is_opposite(Heading::West));
        assert!(Heading::North.is_opposite(Heading::South));
        assert!(!Heading::East.is_opposite(Heading::North));
        assert!(!Heading::East.is_opposite(Heading::East));
    }

    #[test]
    fn test_heading_delta() {
        assert_eq!(Heading::East.delta(), (1, 0));
        assert_eq!(Heading::West.delta(), (-1, 0));
        assert_eq!(Heading::North.delta(), (0, -1));
        assert_eq!(Heading::South.delta(), (0, 1));
    }

    #[test]
    fn test_perpendiculars() {
        assert_eq!(Heading::East.perpendiculars(), [Heading::North, Heading::South]);
        assert_eq!(Heading::West.perpendiculars(), [Heading::North, Heading::South]);
        assert_eq!(Heading::North.perpendiculars(), [Heading::East, Heading::West]);
        assert_eq!(Heading::South.perpendiculars(), [Heading::East, Heading::West]);

        for heading in [Heading::East, Heading::West, Heading::North, Heading::South] {
            for perpendicular in heading.perpendiculars() {
                assert!(!heading.is_opposite(perpendicular));
                assert_ne!(heading, perpendicular);
            }
        }
    }
}
