//! Startup configuration shared by the demo front ends.
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;

/// How the counter's state is owned.
///
/// Exactly one strategy is used per run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// A reference-identity model hoisted into scoped state by a
    /// `ViewModelWrapper` and read from the context.
    #[default]
    Wrapped,
    /// An immutable snapshot owned by the parent view and handed to the
    /// counter view as a copy.
    Value,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Strategy::Wrapped => "wrapped",
            Strategy::Value => "value",
        })
    }
}

#[derive(Clone, Debug, Default, clap::Args, Serialize)]
pub struct DemoConfig {
    /// Counter ownership strategy.
    #[arg(long, value_enum, default_value_t = Strategy::Wrapped)]
    pub strategy: Strategy,

    /// Seed for the random number generator. Uses entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}

impl DemoConfig {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
