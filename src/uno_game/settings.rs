use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Console UNO: deal a table of 2-4 players and play by label or color.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "uno", version)]
pub struct Settings {
    /// Seed for the deck shuffle. Omit for a fresh random game.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Cards a player picks up when they have nothing to place.
    #[arg(long, default_value_t = 0)]
    pub draw_on_no_move: usize,

    /// Print game events as JSON lines instead of prose.
    #[arg(long)]
    pub json_events: bool,
}

impl Settings {
    /// The single random source for the whole session.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => {
                log::debug!("Seeding shuffle with {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_defaults() {
        let settings = Settings::try_parse_from(["uno"]).unwrap();
        assert_eq!(settings.seed, None);
        assert_eq!(settings.draw_on_no_move, 0);
        assert!(!settings.json_events);
    }

    #[test]
    fn test_parse_flags() {
        let settings = Settings::try_parse_from([
            "uno",
            "--seed",
            "99",
            "--draw-on-no-move",
            "2",
            "--json-events",
        ])
        .unwrap();
        assert_eq!(settings.seed, Some(99));
        assert_eq!(settings.draw_on_no_move, 2);
        assert!(settings.json_events);
    }

    #[test]
    fn test_seeded_rng_is_repeatable() {
        let settings = Settings {
            seed: Some(5),
            ..Settings::default()
        };
        let a: u64 = settings.rng().random();
        let b: u64 = settings.rng().random();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rejects_unknown_flag() {
        assert!(Settings::try_parse_from(["uno", "--players", "9"]).is_err());
    }
}
