use {
    std::str::FromStr,
    tracing::{
        Level, Metadata, Subscriber, level_filters::LevelFilter, metadata::ParseLevelFilterError,
    },
    tracing_subscriber::{Layer, layer::Context},
};

/// Crates whose `INFO` messages are demoted to `DEBUG`.
const NOISY_TARGETS: &[&str] = &["hyper", "reqwest", "alloy"];

/// A custom tracing subscriber filter that suppresses messages from the HTTP
/// and RPC client crates.
///
/// These libraries log every request and connection they make, which drowns
/// out the progress of the deployment itself.
pub struct CustomLevelFilter {
    max_level: LevelFilter,
}

impl CustomLevelFilter {
    fn allows(&self, target: &str, level: Level) -> bool {
        // Suppress messages from the noisy crates that are lower than DEBUG
        // level. `alloy` also matches its sub-crates, e.g. `alloy_provider`.
        if NOISY_TARGETS.iter().any(|noisy| target.starts_with(noisy)) {
            let effective_level = if level < Level::DEBUG {
                Level::DEBUG
            } else {
                level
            };

            effective_level <= self.max_level
        } else {
            level <= self.max_level
        }
    }
}

impl<S> Layer<S> for CustomLevelFilter
where
    S: Subscriber,
{
    fn enabled(&self, metadata: &Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.allows(metadata.target(), *metadata.level())
    }
}

impl FromStr for CustomLevelFilter {
    type Err = ParseLevelFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let max_level = s.parse()?;

        Ok(Self { max_level })
    }
}

// ----------------------------------- tests -----------------------------------
