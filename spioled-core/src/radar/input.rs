//! Joystick input

use spioled_hal::AnalogInput;

/// One of the four directions the player can walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    North,
    South,
    East,
    West,
}

/// Classify a pair of readings
///
/// Outside the dead band X picks east or west, then Y, if also outside,
/// overrides it with north or south. Low Y is north.
pub fn direction_from(x: u16, y: u16, centre: u16, deadband: u16) -> Option<Direction> {
    let lo = centre.saturating_sub(deadband);
    let hi = centre.saturating_add(deadband);

    let mut dir = None;
    if x < lo {
        dir = Some(Direction::West);
    } else if x > hi {
        dir = Some(Direction::East);
    }
    if y < lo {
        dir = Some(Direction::North);
    } else if y > hi {
        dir = Some(Direction::South);
    }
    dir
}

/// Two-axis analog joystick
pub struct Joystick<X, Y> {
    x: X,
    y: Y,
    deadband: u16,
}

impl<X, Y> Joystick<X, Y>
where
    X: AnalogInput,
    Y: AnalogInput,
{
    pub fn new(x: X, y: Y, deadband: u16) -> Self {
        Self { x, y, deadband }
    }

    /// Sample both axes
    pub fn read(&mut self) -> Option<Direction> {
        let x = self.x.read();
        let y = self.y.read();
        direction_from(x, y, self.x.centre(), self.deadband)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(u16);

    impl AnalogInput for Fixed {
        fn read(&mut self) -> u16 {
            self.0
        }
    }

    #[test]
    fn test_centre_is_none() {
        assert_eq!(direction_from(2048, 2048, 2048, 512), None);
        assert_eq!(direction_from(1536, 2560, 2048, 512), None);
    }

    #[test]
    fn test_axes() {
        assert_eq!(direction_from(100, 2048, 2048, 512), Some(Direction::West));
        assert_eq!(direction_from(4000, 2048, 2048, 512), Some(Direction::East));
        assert_eq!(direction_from(2048, 100, 2048, 512), Some(Direction::North));
        assert_eq!(direction_from(2048, 4000, 2048, 512), Some(Direction::South));
    }

    #[test]
    fn test_y_overrides_x() {
        assert_eq!(direction_from(0, 4095, 2048, 512), Some(Direction::South));
        assert_eq!(direction_from(4095, 0, 2048, 512), Some(Direction::North));
    }

    #[test]
    fn test_joystick_reads_both_channels() {
        let mut js = Joystick::new(Fixed(3000), Fixed(2048), 512);
        assert_eq!(js.read(), Some(Direction::East));
    }
}
