//! Playfield entities

use libm::{atan2f, sqrtf};

/// Degrees per radian
pub const RAD_TO_DEG: f32 = 57.295_78;

/// The radar's position on the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Player {
    pub x: i32,
    pub y: i32,
}

/// Something the sweep can find
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Target {
    pub x: i32,
    pub y: i32,
    /// Degrees clockwise from east as seen from the player, `[0, 360)`
    pub bearing: f32,
    /// Distance from the player
    pub range: f32,
    /// Echo radius, 1..=3
    pub size: i32,
    /// Still on the playfield; false once gathered
    pub active: bool,
    /// Walking close enables the range rings
    pub rings: bool,
    /// Walking close enables the axes
    pub axes: bool,
    /// Walking close extends the game, once
    pub time: bool,
}

impl Target {
    pub fn new(x: i32, y: i32, size: i32) -> Self {
        Self {
            x,
            y,
            bearing: 0.0,
            range: 0.0,
            size,
            active: true,
            rings: false,
            axes: false,
            time: false,
        }
    }

    /// Recompute bearing and range from `player`
    pub fn locate(&mut self, player: Player) {
        let dx = (self.x - player.x) as f32;
        let dy = (self.y - player.y) as f32;

        let mut bearing = atan2f(dy, dx) * RAD_TO_DEG;
        if bearing < 0.0 {
            bearing += 360.0;
        }
        self.bearing = bearing;
        self.range = sqrtf(dx * dx + dy * dy);
    }

    /// Angular distance from `angle` degrees, across the 0/360 seam
    pub fn bearing_offset(&self, angle: i32) -> f32 {
        let d = libm::fabsf(self.bearing - angle as f32) % 360.0;
        if d > 180.0 {
            360.0 - d
        } else {
            d
        }
    }
}

/// A fading blip where the sweep found a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Echo {
    /// Screen position at the time of detection
    pub x: i32,
    pub y: i32,
    /// Frames left; 0 is a free slot
    pub age: i32,
    pub radius: i32,
}

impl Echo {
    pub fn is_live(&self) -> bool {
        self.age > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn near(a: f32, b: f32) -> bool {
        libm::fabsf(a - b) < 0.01
    }

    #[test]
    fn test_bearing_quadrants() {
        let p = Player { x: 100, y: 100 };
        let mut t = Target::new(110, 100, 1);
        t.locate(p);
        assert!(near(t.bearing, 0.0));
        assert!(near(t.range, 10.0));

        // Screen y grows downwards, so "south" is 90 degrees
        t.y = 110;
        t.x = 100;
        t.locate(p);
        assert!(near(t.bearing, 90.0));

        t.y = 90;
        t.locate(p);
        assert!(near(t.bearing, 270.0));

        t.x = 97;
        t.y = 96;
        t.locate(p);
        assert!(near(t.range, 5.0));
        assert!(t.bearing > 180.0 && t.bearing < 270.0);
    }

    #[test]
    fn test_bearing_offset_wraps() {
        let mut t = Target::new(0, 0, 1);
        t.bearing = 358.0;
        assert!(near(t.bearing_offset(3), 5.0));
        assert!(near(t.bearing_offset(357), 1.0));
        t.bearing = 2.0;
        assert!(near(t.bearing_offset(357), 5.0));
        assert!(near(t.bearing_offset(180), 178.0));
    }
}
