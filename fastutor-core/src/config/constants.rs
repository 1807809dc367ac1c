/// Model ID constants
pub mod models {
    pub mod openai {
        pub const DEFAULT_MODEL: &str = "gpt-4";
    }
}

/// Sampling defaults for every generation call
pub mod generation {
    pub const DEFAULT_TEMPERATURE: f32 = 0.5;
    /// Zero leaves the completion length to the service
    pub const DEFAULT_MAX_TOKENS: u32 = 0;
}

/// Message role constants to avoid hardcoding strings
pub mod message_roles {
    pub const SYSTEM: &str = "system";
    pub const USER: &str = "user";
    pub const ASSISTANT: &str = "assistant";
}

/// URL constants for API endpoints
pub mod urls {
    pub const OPENAI_API_BASE: &str = "https://api.openai.com/v1";
}

/// Environment variable names
pub mod env_vars {
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
}

/// File and directory names used for configuration lookup
pub mod files {
    pub const CONFIG_FILE: &str = "fastutor.toml";
    pub const CONFIG_DIR: &str = ".fastutor";
    pub const SECRETS_FILE: &str = "secrets.toml";
}
