//! Primitive topologies and their vertex count rules.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// How a run of vertices is assembled into primitives.
///
/// The discriminants are the corresponding OpenGL / WebGL enum values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Topology {
    Points = 0,
    Lines = 1,
    LineLoop = 2,
    LineStrip = 3,
    Triangles = 4,
    TriangleStrip = 5,
    TriangleFan = 6,
}

impl Topology {
    pub const ALL: [Topology; 7] = [
        Topology::Points,
        Topology::Lines,
        Topology::LineLoop,
        Topology::LineStrip,
        Topology::Triangles,
        Topology::TriangleStrip,
        Topology::TriangleFan,
    ];

    /// Returns the OpenGL enum value of this topology.
    #[inline]
    pub fn gl_enum(self) -> u32 {
        self as u32
    }

    pub fn name(self) -> &'static str {
        match self {
            Topology::Points => "points",
            Topology::Lines => "lines",
            Topology::LineLoop => "line-loop",
            Topology::LineStrip => "line-strip",
            Topology::Triangles => "triangles",
            Topology::TriangleStrip => "triangle-strip",
            Topology::TriangleFan => "triangle-fan",
        }
    }

    /// Returns how many of `pending` vertices form complete primitives under this topology.
    ///
    /// The remaining `pending - retained(pending)` trailing vertices cannot be drawn and get
    /// discarded when the run is committed. A return value of 0 means nothing is drawable.
    ///
    /// # Examples
    ///
    /// ```
    /// # use vecdraw::topology::Topology;
    /// assert_eq!(Topology::Triangles.retained(5), 3);
    /// assert_eq!(Topology::Lines.retained(5), 4);
    /// assert_eq!(Topology::LineStrip.retained(1), 0);
    /// assert_eq!(Topology::TriangleFan.retained(2), 0);
    /// assert_eq!(Topology::Points.retained(1), 1);
    /// ```
    pub fn retained(self, pending: usize) -> usize {
        match self {
            Topology::Points => pending,
            Topology::Lines => pending - pending % 2,
            Topology::LineLoop | Topology::LineStrip if pending >= 2 => pending,
            Topology::Triangles => pending - pending % 3,
            Topology::TriangleStrip | Topology::TriangleFan if pending >= 3 => pending,
            Topology::LineLoop
            | Topology::LineStrip
            | Topology::TriangleStrip
            | Topology::TriangleFan => 0,
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
#[error("unknown primitive topology '{0}' (expected one of points, lines, line-loop, line-strip, triangles, triangle-strip, triangle-fan)")]
pub struct UnknownTopology(String);

/// Parses either the kebab-case name or the numeric OpenGL enum value.
impl FromStr for Topology {
    type Err = UnknownTopology;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Topology::ALL
            .into_iter()
            .find(|t| t.name() == s || s.parse::<u32>().ok() == Some(t.gl_enum()))
            .ok_or_else(|| UnknownTopology(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        for t in Topology::ALL {
            assert_eq!(t.name().parse::<Topology>().unwrap(), t);
            assert_eq!(t.gl_enum().to_string().parse::<Topology>().unwrap(), t);
        }
        assert_eq!("4".parse::<Topology>().unwrap(), Topology::Triangles);
        assert!("quads".parse::<Topology>().is_err());
        assert!("7".parse::<Topology>().is_err());
        assert!("".parse::<Topology>().is_err());
    }

    #[test]
    fn retained_counts() {
        for pending in 0..20 {
            assert_eq!(Topology::Points.retained(pending), pending);

            let lines = Topology::Lines.retained(pending);
            assert_eq!(lines % 2, 0);
            assert!(pending - lines < 2);

            let triangles = Topology::Triangles.retained(pending);
            assert_eq!(triangles % 3, 0);
            assert!(pending - triangles < 3);

            for strip in [Topology::LineStrip, Topology::LineLoop] {
                let kept = strip.retained(pending);
                assert_eq!(kept, if pending >= 2 { pending } else { 0 });
            }
            for fan in [Topology::TriangleStrip, Topology::TriangleFan] {
                let kept = fan.retained(pending);
                assert_eq!(kept, if pending >= 3 { pending } else { 0 });
            }
        }
    }
}
