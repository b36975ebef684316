//! Segment vocabulary and per-style geometry
//!
//! A digit cell is [`DIGIT_PITCH`] pixels wide and [`DIGIT_HEIGHT`] tall.
//! Segments A to G are the classic seven; H is the short spur used by the
//! open-topped 4; I to N are the corner dots only the LED dot-matrix style
//! can light; DP and CN sit in the gap to the right of the digit.
//!
//! ```text
//!   I  A  J
//!   F     B
//!   N  G  K H
//!   E     C
//!   M  D  L DP
//! ```

use spioled_protocol::Style;

/// X of the rightmost column of segments B and C
pub const SEGMENT_WIDTH: i32 = 15;

/// Y of the Panaplex G segment, slightly above half way
pub const MID_Y: i32 = 13;

/// Horizontal distance between digit cells
pub const DIGIT_PITCH: i32 = SEGMENT_WIDTH + 6;

/// Height of a digit cell
pub const DIGIT_HEIGHT: i32 = 32;

const RIGHT: i32 = SEGMENT_WIDTH;
const MID: i32 = MID_Y;

/// One addressable segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Segment {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    /// Decimal point
    DP,
    /// Colon
    CN,
}

impl Segment {
    /// Every segment, in bit order
    pub const ALL: [Segment; 16] = [
        Segment::A,
        Segment::B,
        Segment::C,
        Segment::D,
        Segment::E,
        Segment::F,
        Segment::G,
        Segment::H,
        Segment::I,
        Segment::J,
        Segment::K,
        Segment::L,
        Segment::M,
        Segment::N,
        Segment::DP,
        Segment::CN,
    ];

    const fn bit(self) -> u16 {
        1 << self as u8
    }
}

/// A set of segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SegmentSet(u16);

impl SegmentSet {
    pub const EMPTY: Self = Self(0);

    /// Build a set from a list of segments
    pub const fn of(segments: &[Segment]) -> Self {
        let mut bits = 0;
        let mut i = 0;
        while i < segments.len() {
            bits |= segments[i].bit();
            i += 1;
        }
        Self(bits)
    }

    pub const fn contains(self, seg: Segment) -> bool {
        self.0 & seg.bit() != 0
    }

    pub const fn with(self, seg: Segment) -> Self {
        Self(self.0 | seg.bit())
    }

    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Segments in bit order
    pub fn iter(self) -> impl Iterator<Item = Segment> {
        Segment::ALL.into_iter().filter(move |s| self.contains(*s))
    }
}

use Segment::*;

const DIGITS: [SegmentSet; 16] = [
    SegmentSet::of(&[A, B, C, D, E, F, K, N]),
    SegmentSet::of(&[B, C, J, K, L]),
    SegmentSet::of(&[A, B, D, E, G, I, L, M]),
    SegmentSet::of(&[A, B, C, D, G, I, M]),
    SegmentSet::of(&[B, C, F, G, H, I, J, K, L]),
    SegmentSet::of(&[A, C, D, F, G, I, J, M]),
    SegmentSet::of(&[A, C, D, E, F, G, J, N]),
    SegmentSet::of(&[A, B, C, F, I, J, K, L]),
    SegmentSet::of(&[A, B, C, D, E, F, G]),
    SegmentSet::of(&[A, B, C, D, F, G, K, M]),
    SegmentSet::of(&[A, B, C, E, F, G, K, L, M, N]),
    SegmentSet::of(&[C, D, E, F, G]),
    SegmentSet::of(&[A, D, E, F, J, L, N]),
    SegmentSet::of(&[B, C, D, E, G]),
    SegmentSet::of(&[A, D, E, F, G, I, J, L, M, N]),
    SegmentSet::of(&[A, E, F, G, I, J, M, N]),
];

/// Segments lit for hex digit `d`; only the low nibble is used
pub fn digit_segments(d: u8) -> SegmentSet {
    DIGITS[(d & 0x0f) as usize]
}

/// One drawing step, relative to the left edge of the digit cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stroke {
    /// Horizontal run, inclusive
    H { x1: i32, x2: i32, y: i32 },
    /// Vertical run, inclusive
    V { x: i32, y1: i32, y2: i32 },
    /// 3x3 LED on the dot-matrix grid, 4 pixels apart, 3 rows down
    Dot { col: i32, row: i32 },
}

const fn h(x1: i32, x2: i32, y: i32) -> Stroke {
    Stroke::H { x1, x2, y }
}

const fn v(x: i32, y1: i32, y2: i32) -> Stroke {
    Stroke::V { x, y1, y2 }
}

const fn dot(col: i32, row: i32) -> Stroke {
    Stroke::Dot { col, row }
}

mod panaplex {
    use super::*;

    pub const A: &[Stroke] = &[h(0, RIGHT, 0), h(0, RIGHT, 1)];
    pub const B: &[Stroke] = &[v(RIGHT, 0, MID), v(RIGHT - 1, 0, MID)];
    pub const C: &[Stroke] = &[v(RIGHT, MID, 31), v(RIGHT - 1, MID, 31)];
    pub const D: &[Stroke] = &[h(0, RIGHT, 31), h(0, RIGHT, 30)];
    pub const E: &[Stroke] = &[v(0, MID, 31), v(1, MID, 31)];
    pub const F: &[Stroke] = &[v(0, 0, MID), v(1, 0, MID)];
    pub const G: &[Stroke] = &[h(0, RIGHT, MID), h(0, RIGHT, MID + 1)];
    pub const H: &[Stroke] = &[h(RIGHT, RIGHT + 3, MID), h(RIGHT, RIGHT + 3, MID + 1)];
    pub const CN: &[Stroke] = &[
        h(RIGHT + 2, RIGHT + 3, 9),
        h(RIGHT + 2, RIGHT + 3, 10),
        h(RIGHT + 2, RIGHT + 3, 17),
        h(RIGHT + 2, RIGHT + 3, 18),
    ];
}

mod dots {
    use super::*;

    pub const A: &[Stroke] = &[dot(1, 0), dot(2, 0)];
    pub const B: &[Stroke] = &[dot(3, 1), dot(3, 2)];
    pub const C: &[Stroke] = &[dot(3, 4), dot(3, 5)];
    pub const D: &[Stroke] = &[dot(1, 6), dot(2, 6)];
    pub const E: &[Stroke] = &[dot(0, 4), dot(0, 5)];
    pub const F: &[Stroke] = &[dot(0, 1), dot(0, 2)];
    pub const G: &[Stroke] = &[dot(1, 3), dot(2, 3)];
    pub const H: &[Stroke] = &[dot(4, 3)];
    pub const I: &[Stroke] = &[dot(0, 0)];
    pub const J: &[Stroke] = &[dot(3, 0)];
    pub const K: &[Stroke] = &[dot(3, 3)];
    pub const L: &[Stroke] = &[dot(3, 6)];
    pub const M: &[Stroke] = &[dot(0, 6)];
    pub const N: &[Stroke] = &[dot(0, 3)];
    pub const DP: &[Stroke] = &[dot(4, 6)];
    pub const CN: &[Stroke] = &[dot(4, 2), dot(4, 4)];
}

mod bar {
    use super::*;

    pub const A: &[Stroke] = &[h(3, RIGHT - 3, 0), h(3, RIGHT - 3, 1), h(3, RIGHT - 3, 2)];
    pub const B: &[Stroke] = &[v(RIGHT, 3, 14), v(RIGHT - 1, 3, 14), v(RIGHT - 2, 3, 14)];
    pub const C: &[Stroke] = &[v(RIGHT, 18, 28), v(RIGHT - 1, 18, 28), v(RIGHT - 2, 18, 28)];
    pub const D: &[Stroke] = &[h(3, RIGHT - 3, 31), h(3, RIGHT - 3, 30), h(3, RIGHT - 3, 29)];
    pub const E: &[Stroke] = &[v(0, 18, 28), v(1, 18, 28), v(2, 18, 28)];
    pub const F: &[Stroke] = &[v(0, 3, 14), v(1, 3, 14), v(2, 3, 14)];
    pub const G: &[Stroke] = &[h(3, RIGHT - 3, 15), h(3, RIGHT - 3, 16), h(3, RIGHT - 3, 17)];
    pub const H: &[Stroke] = &[
        h(RIGHT + 1, RIGHT + 3, 15),
        h(RIGHT + 1, RIGHT + 3, 16),
        h(RIGHT + 1, RIGHT + 3, 17),
    ];
}

mod vfd {
    use super::*;

    pub const A: &[Stroke] = &[h(1, RIGHT - 1, 0), h(2, RIGHT - 2, 1), h(3, RIGHT - 3, 2)];
    pub const B: &[Stroke] = &[v(RIGHT, 1, 13), v(RIGHT - 1, 2, 14), v(RIGHT - 2, 3, 13)];
    pub const C: &[Stroke] = &[v(RIGHT, 19, 30), v(RIGHT - 1, 18, 29), v(RIGHT - 2, 19, 28)];
    pub const D: &[Stroke] = &[h(1, RIGHT - 1, 31), h(2, RIGHT - 2, 30), h(3, RIGHT - 3, 29)];
    pub const E: &[Stroke] = &[v(0, 17, 30), v(1, 18, 29), v(2, 19, 28)];
    pub const F: &[Stroke] = &[v(0, 1, 15), v(1, 2, 14), v(2, 3, 13)];
    pub const G: &[Stroke] = &[h(2, RIGHT - 2, 15), h(1, RIGHT - 1, 16), h(2, RIGHT - 2, 17)];
    pub const H: &[Stroke] = &[
        h(RIGHT, RIGHT + 3, 15),
        h(RIGHT - 1, RIGHT + 3, 16),
        h(RIGHT, RIGHT + 3, 17),
    ];
}

/// Square point and colon shared by every style without its own
mod gap {
    use super::*;

    pub const DP: &[Stroke] = &[
        h(RIGHT + 2, RIGHT + 4, 29),
        h(RIGHT + 2, RIGHT + 4, 30),
        h(RIGHT + 2, RIGHT + 4, 31),
    ];
    pub const CN: &[Stroke] = &[
        h(RIGHT + 2, RIGHT + 4, 11),
        h(RIGHT + 2, RIGHT + 4, 12),
        h(RIGHT + 2, RIGHT + 4, 13),
        h(RIGHT + 2, RIGHT + 4, 19),
        h(RIGHT + 2, RIGHT + 4, 20),
        h(RIGHT + 2, RIGHT + 4, 21),
    ];
}

/// Strokes that draw `seg` in `style`; empty where the style has no such
/// segment
pub fn geometry(style: Style, seg: Segment) -> &'static [Stroke] {
    match (style, seg) {
        (Style::LedDot, seg) => match seg {
            A => dots::A,
            B => dots::B,
            C => dots::C,
            D => dots::D,
            E => dots::E,
            F => dots::F,
            G => dots::G,
            H => dots::H,
            I => dots::I,
            J => dots::J,
            K => dots::K,
            L => dots::L,
            M => dots::M,
            N => dots::N,
            DP => dots::DP,
            CN => dots::CN,
        },
        (_, DP) => gap::DP,
        (Style::Panaplex, CN) => panaplex::CN,
        (_, CN) => gap::CN,
        (Style::Panaplex, seg) => match seg {
            A => panaplex::A,
            B => panaplex::B,
            C => panaplex::C,
            D => panaplex::D,
            E => panaplex::E,
            F => panaplex::F,
            G => panaplex::G,
            H => panaplex::H,
            _ => &[],
        },
        (Style::LedBar, seg) => match seg {
            A => bar::A,
            B => bar::B,
            C => bar::C,
            D => bar::D,
            E => bar::E,
            F => bar::F,
            G => bar::G,
            H => bar::H,
            _ => &[],
        },
        (Style::Vfd, seg) => match seg {
            A => vfd::A,
            B => vfd::B,
            C => vfd::C,
            D => vfd::D,
            E => vfd::E,
            F => vfd::F,
            G => vfd::G,
            H => vfd::H,
            _ => &[],
        },
        // Petrol digits come from the atlas
        (Style::PetrolStation, _) => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eight_is_exactly_a_to_g() {
        assert_eq!(digit_segments(8), SegmentSet::of(&[A, B, C, D, E, F, G]));
    }

    #[test]
    fn test_one_has_no_top_bar() {
        assert!(!digit_segments(1).contains(A));
        assert!(digit_segments(1).contains(B));
        assert!(digit_segments(1).contains(C));
    }

    #[test]
    fn test_only_four_uses_spur() {
        for d in 0..16 {
            assert_eq!(digit_segments(d).contains(H), d == 4, "digit {d}");
        }
    }

    #[test]
    fn test_digit_map_ignores_high_nibble() {
        assert_eq!(digit_segments(0x1b), digit_segments(0xb));
    }

    #[test]
    fn test_no_digit_uses_point_or_colon() {
        for d in 0..16 {
            let set = digit_segments(d);
            assert!(!set.contains(DP) && !set.contains(CN));
        }
    }

    #[test]
    fn test_corner_dots_only_in_led_dot() {
        for style in [Style::Panaplex, Style::LedBar, Style::Vfd] {
            for seg in [I, J, K, L, M, N] {
                assert!(geometry(style, seg).is_empty());
            }
            for seg in [A, B, C, D, E, F, G, H, DP, CN] {
                assert!(!geometry(style, seg).is_empty());
            }
        }
        for seg in Segment::ALL {
            assert!(!geometry(Style::LedDot, seg).is_empty());
        }
    }

    #[test]
    fn test_petrol_borrows_bar_point_and_colon() {
        assert!(geometry(Style::PetrolStation, A).is_empty());
        assert_eq!(geometry(Style::PetrolStation, DP), geometry(Style::LedBar, DP));
        assert_eq!(geometry(Style::PetrolStation, CN), geometry(Style::LedBar, CN));
    }

    #[test]
    fn test_strokes_stay_inside_cell() {
        for style in Style::ALL {
            for seg in Segment::ALL {
                for s in geometry(style, seg) {
                    let (x1, x2, y1, y2) = match *s {
                        Stroke::H { x1, x2, y } => (x1, x2, y, y),
                        Stroke::V { x, y1, y2 } => (x, x, y1, y2),
                        Stroke::Dot { col, row } => {
                            (col * 4, col * 4 + 2, row * 4 + 3, row * 4 + 5)
                        }
                    };
                    assert!(x1 >= 0 && x2 < DIGIT_PITCH, "{style:?} {seg:?}");
                    assert!(y1 >= 0 && y2 < DIGIT_HEIGHT, "{style:?} {seg:?}");
                }
            }
        }
    }

    #[test]
    fn test_set_iter_in_bit_order() {
        let set = SegmentSet::EMPTY.with(CN).with(A).with(G);
        let mut it = set.iter();
        assert_eq!(it.next(), Some(A));
        assert_eq!(it.next(), Some(G));
        assert_eq!(it.next(), Some(CN));
        assert_eq!(it.next(), None);
        assert_eq!(set.len(), 3);
    }
}
