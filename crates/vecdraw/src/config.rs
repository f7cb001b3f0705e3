//! Settings read from the environment.

use std::{
    env::{self, VarError},
    mem,
};

use anyhow::{bail, Context};
use vecdraw_linalg::Vec4f;

use crate::recorder::{DEFAULT_CAPACITY, SWATCH};

const CAPACITY_VAR: &str = "VECDRAW_BUFFER_CAPACITY";
const CANVAS_VAR: &str = "VECDRAW_CANVAS_SIZE";

const DEFAULT_CANVAS_SIZE: (u32, u32) = (512, 512);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of vertices the vertex and color buffers have room for.
    pub buffer_capacity: usize,
    /// Initial canvas width and height in pixels, before any resize event.
    pub canvas_size: (u32, u32),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            buffer_capacity: DEFAULT_CAPACITY,
            canvas_size: DEFAULT_CANVAS_SIZE,
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|name| env::var(name))
    }

    /// Reads the configuration using `lookup` to resolve variable names.
    pub fn from_lookup(lookup: impl Fn(&str) -> Result<String, VarError>) -> anyhow::Result<Self> {
        let buffer_capacity = match lookup(CAPACITY_VAR) {
            Ok(v) => {
                let capacity = v
                    .trim()
                    .parse::<usize>()
                    .with_context(|| format!("invalid value set for `{CAPACITY_VAR}`: '{v}'"))?;
                if capacity < SWATCH.len() {
                    bail!(
                        "invalid value set for `{CAPACITY_VAR}`: buffer must hold at least {} vertices",
                        SWATCH.len()
                    );
                }
                // The color buffer has the widest elements.
                let fits = capacity
                    .checked_mul(mem::size_of::<Vec4f>())
                    .map_or(false, |bytes| bytes <= isize::MAX as usize);
                if !fits {
                    bail!(
                        "invalid value set for `{CAPACITY_VAR}`: {capacity} vertices do not fit into memory"
                    );
                }
                capacity
            }
            Err(VarError::NotPresent) => DEFAULT_CAPACITY,
            Err(VarError::NotUnicode(s)) => {
                bail!(
                    "invalid value set for `{CAPACITY_VAR}`: {}",
                    s.to_string_lossy()
                )
            }
        };

        let canvas_size = match lookup(CANVAS_VAR) {
            Ok(v) => parse_size(&v)
                .with_context(|| format!("invalid value set for `{CANVAS_VAR}`: '{v}'"))?,
            Err(VarError::NotPresent) => DEFAULT_CANVAS_SIZE,
            Err(VarError::NotUnicode(s)) => {
                bail!(
                    "invalid value set for `{CANVAS_VAR}`: {}",
                    s.to_string_lossy()
                )
            }
        };

        let config = Self {
            buffer_capacity,
            canvas_size,
        };
        log::debug!("{config:?}");
        Ok(config)
    }
}

/// Parses a `WIDTHxHEIGHT` pair of nonzero pixel counts.
fn parse_size(s: &str) -> anyhow::Result<(u32, u32)> {
    let Some((w, h)) = s.trim().split_once(['x', 'X']) else {
        bail!("expected `WIDTHxHEIGHT`");
    };
    let w: u32 = w.parse().context("invalid width")?;
    let h: u32 = h.parse().context("invalid height")?;
    if w == 0 || h == 0 {
        bail!("canvas size must be nonzero");
    }
    Ok((w, h))
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned().ok_or(VarError::NotPresent))
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.buffer_capacity, 100_000);
        assert_eq!(config.canvas_size, (512, 512));
    }

    #[test]
    fn overrides() {
        let config = config(&[(CAPACITY_VAR, "64"), (CANVAS_VAR, "800x600")]).unwrap();
        assert_eq!(config.buffer_capacity, 64);
        assert_eq!(config.canvas_size, (800, 600));
    }

    #[test]
    fn invalid_values() {
        assert!(config(&[(CAPACITY_VAR, "lots")]).is_err());
        assert!(config(&[(CAPACITY_VAR, "2")]).is_err());
        assert!(config(&[(CAPACITY_VAR, usize::MAX.to_string().as_str())]).is_err());
        assert!(config(&[(CAPACITY_VAR, (usize::MAX / 16).to_string().as_str())]).is_err());
        assert!(config(&[(CANVAS_VAR, "800")]).is_err());
        assert!(config(&[(CANVAS_VAR, "0x600")]).is_err());
        assert!(config(&[(CANVAS_VAR, "-1x600")]).is_err());
    }
}
