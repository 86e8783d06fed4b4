//! Host configuration: environment variables, overridden by CLI flags.
//!
//! | variable              | flag                 | meaning                              |
//! |-----------------------|----------------------|--------------------------------------|
//! | `BLOCKFALL_SEED`      | `--seed <n>`         | RNG seed (default: system clock)     |
//! | `BLOCKFALL_EVENT_LOG` | `--event-log <path>` | JSONL event log (unset: disabled)    |
//! | `BLOCKFALL_BELL`      | `--bell`             | ring the terminal bell on clears/end |

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

pub const ENV_SEED: &str = "BLOCKFALL_SEED";
pub const ENV_EVENT_LOG: &str = "BLOCKFALL_EVENT_LOG";
pub const ENV_BELL: &str = "BLOCKFALL_BELL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: u32,
    pub event_log: Option<String>,
    pub bell: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            event_log: None,
            bell: false,
        }
    }
}

impl Config {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(ENV_SEED)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let event_log = lookup(ENV_EVENT_LOG)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let bell = lookup(ENV_BELL)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            seed,
            event_log,
            bell,
        }
    }

    /// Apply command-line flags (program name already stripped).
    pub fn apply_args(mut self, args: &[String]) -> Result<Self> {
        let mut i = 0usize;
        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    self.seed = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                }
                "--event-log" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --event-log"))?;
                    if v.trim().is_empty() {
                        return Err(anyhow!("empty --event-log path"));
                    }
                    self.event_log = Some(v.clone());
                }
                "--bell" => self.bell = true,
                other => return Err(anyhow!("unknown argument: {}", other)),
            }
            i += 1;
        }
        Ok(self)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
