//! Recorded input events, replayed against a [`Session`].
//!
//! A script is a text file with one event per line. Blank lines and everything after a `#` are
//! ignored.
//!
//! ```text
//! resize 800 600
//! mode triangles
//! click 10 10
//! click 200 10
//! click 100 180
//! color 0 128 255
//! random
//! reset
//! ```

use std::{fmt, str::FromStr};

use anyhow::{anyhow, bail, Context};

use crate::{color::Color, session::Session, topology::Topology};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// The window was resized to the given width and height.
    Resize(u32, u32),
    /// The canvas was clicked at the given pixel position.
    Click(f32, f32),
    /// A different drawing mode was selected.
    Mode(Topology),
    /// The color sliders were moved.
    Color(Color),
    /// The "random color" button was pressed.
    Random,
    /// The "reset" button was pressed.
    Reset,
}

impl Event {
    /// Returns whether the drawing is redrawn after this event.
    ///
    /// Resizing and selecting a mode only take effect on the next redraw.
    pub fn redraws(&self) -> bool {
        match self {
            Event::Resize(..) | Event::Mode(_) => false,
            Event::Click(..) | Event::Color(_) | Event::Random | Event::Reset => true,
        }
    }

    /// Runs the handler for this event.
    pub fn apply(self, session: &mut Session, rng: &mut fastrand::Rng) {
        match self {
            Event::Resize(w, h) => session.resize(w, h),
            Event::Click(x, y) => session.click(x, y),
            Event::Mode(mode) => session.select_mode(mode),
            Event::Color(color) => session.set_color(color),
            Event::Random => session.randomize_color(rng),
            Event::Reset => session.reset(),
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Resize(w, h) => write!(f, "resize {w} {h}"),
            Event::Click(x, y) => write!(f, "click {x} {y}"),
            Event::Mode(mode) => write!(f, "mode {mode}"),
            Event::Color(c) => write!(f, "color {} {} {}", c.r(), c.g(), c.b()),
            Event::Random => f.write_str("random"),
            Event::Reset => f.write_str("reset"),
        }
    }
}

fn args<const N: usize, T: FromStr>(words: &[&str]) -> anyhow::Result<[T; N]>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let parsed = words
        .iter()
        .map(|word| {
            word.parse::<T>()
                .with_context(|| format!("invalid argument '{word}'"))
        })
        .collect::<anyhow::Result<Vec<T>>>()?;
    parsed
        .try_into()
        .map_err(|_| anyhow!("expected {N} arguments, got {}", words.len()))
}

impl FromStr for Event {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = s.split_whitespace().collect();
        let Some((&command, rest)) = words.split_first() else {
            bail!("empty event");
        };

        let event = match command {
            "resize" => {
                let [w, h] = args::<2, u32>(rest)?;
                Event::Resize(w, h)
            }
            "click" => {
                let [x, y] = args::<2, f32>(rest)?;
                if !x.is_finite() || !y.is_finite() {
                    bail!("click position must be finite");
                }
                Event::Click(x, y)
            }
            "mode" => {
                let [mode] = args::<1, Topology>(rest)?;
                Event::Mode(mode)
            }
            "color" => {
                let [r, g, b] = args::<3, u8>(rest)?;
                Event::Color(Color::from_rgb8(r, g, b))
            }
            "random" => {
                args::<0, u8>(rest)?;
                Event::Random
            }
            "reset" => {
                args::<0, u8>(rest)?;
                Event::Reset
            }
            _ => bail!("unknown event '{command}'"),
        };
        Ok(event)
    }
}

/// Parses a script into its list of events.
pub fn parse(src: &str) -> anyhow::Result<Vec<Event>> {
    let mut events = Vec::new();
    for (i, line) in src.lines().enumerate() {
        let line = match line.split_once('#') {
            Some((before, _comment)) => before,
            None => line,
        };
        if line.trim().is_empty() {
            continue;
        }

        let event = line
            .parse()
            .with_context(|| format!("line {}: `{}`", i + 1, line.trim()))?;
        events.push(event);
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_script() {
        let events = parse(
            "
            # set up
            resize 800 600
            mode triangle-fan   # trailing comment
            click 10 20.5

            color 0 128 255
            random
            reset
            mode 1
            ",
        )
        .unwrap();
        assert_eq!(
            events,
            [
                Event::Resize(800, 600),
                Event::Mode(Topology::TriangleFan),
                Event::Click(10.0, 20.5),
                Event::Color(Color::from_rgb8(0, 128, 255)),
                Event::Random,
                Event::Reset,
                Event::Mode(Topology::Lines),
            ]
        );
    }

    #[test]
    fn errors_name_the_line() {
        let err = parse("reset\nclick 1\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"), "{err:#}");

        assert!(parse("color 256 0 0").is_err());
        assert!(parse("mode quads").is_err());
        assert!(parse("random 1").is_err());
        assert!(parse("click NaN 0").is_err());
        assert!(parse("undo").is_err());
    }

    #[test]
    fn display_parses_back() {
        for event in [
            Event::Resize(3, 4),
            Event::Click(1.5, -2.0),
            Event::Mode(Topology::LineLoop),
            Event::Color(Color::GREEN),
            Event::Random,
            Event::Reset,
        ] {
            assert_eq!(event.to_string().parse::<Event>().unwrap(), event);
        }
    }

    #[test]
    fn apply_follows_handlers() {
        let mut session = Session::new(16, (100, 100));
        let mut rng = fastrand::Rng::with_seed(0);
        for event in parse("mode lines\nclick 0 0\ncolor 0 0 255\nresize 50 80").unwrap() {
            event.apply(&mut session, &mut rng);
        }
        assert_eq!(session.mode(), Topology::Lines);
        assert_eq!(session.recorder().pending_len(), 1);
        assert_eq!(session.color(), Color::BLUE);
        assert_eq!(session.canvas_side(), 50);
        assert!(!Event::Mode(Topology::Points).redraws());
        assert!(Event::Click(0.0, 0.0).redraws());
    }
}
