//! Session settings for the interactive game.

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Side played by the random engine; `None` for two human players.
    pub ai_side: Option<Color>,
    pub ai_seed: Option<u64>,
    /// Pause before the engine replies. Purely cosmetic.
    pub ai_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ai_side: Some(Color::Black),
            ai_seed: None,
            ai_delay_ms: 500,
        }
    }
}

impl GameConfig {
    /// Reads `--no-ai`, `--ai-white`, `--seed N` and `--delay-ms N`.
    pub fn from_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--no-ai" => config.ai_side = None,
                "--ai-white" => config.ai_side = Some(Color::White),
                "--seed" => {
                    let value = args.next().ok_or("--seed needs a value")?;
                    config.ai_seed = Some(
                        value
                            .parse()
                            .map_err(|_| format!("Invalid seed: {value}"))?,
                    );
                }
                "--delay-ms" => {
                    let value = args.next().ok_or("--delay-ms needs a value")?;
                    config.ai_delay_ms = value
                        .parse()
                        .map_err(|_| format!("Invalid delay: {value}"))?;
                }
                other => return Err(format!("Unknown argument: {other}")),
            }
        }

        Ok(config)
    }
}
