use tinychat_types::{
    DEFAULT_MAX_LENGTH, DEFAULT_TEMPERATURE, MAX_LENGTH_MAX, MAX_LENGTH_MIN, TEMPERATURE_MAX,
    TEMPERATURE_MIN,
};

/// Generation controls forwarded with every send.
#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub max_length: u32,
    pub temperature: f32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl GenerationSettings {
    /// Set the reply length budget from a raw control value.
    ///
    /// Unparsable input falls back to the default; parsable input is
    /// clamped to the range the server accepts.
    pub fn set_max_length(&mut self, raw: &str) {
        self.max_length = raw
            .trim()
            .parse::<u32>()
            .map(|value| value.clamp(MAX_LENGTH_MIN, MAX_LENGTH_MAX))
            .unwrap_or(DEFAULT_MAX_LENGTH);
    }

    /// Set the sampling temperature from a raw control value, with the
    /// same fallback-then-clamp behavior as [`Self::set_max_length`].
    pub fn set_temperature(&mut self, raw: &str) {
        self.temperature = raw
            .trim()
            .parse::<f32>()
            .map(|value| value.clamp(TEMPERATURE_MIN, TEMPERATURE_MAX))
            .unwrap_or(DEFAULT_TEMPERATURE);
    }
}
