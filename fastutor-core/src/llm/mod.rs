//! # LLM Integration Layer
//!
//! A single OpenAI-compatible chat-completion provider sits behind the
//! [`LLMProvider`] trait, and [`LlmGateway`] turns a composed
//! [`PromptPair`](crate::prompts::PromptPair) into generated text.
//!
//! ```rust,no_run
//! use fastutor_core::config::LlmConfig;
//! use fastutor_core::llm::{LlmGateway, ProviderGateway};
//! use fastutor_core::prompts::PromptPair;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let gateway = ProviderGateway::openai(&LlmConfig::default(), std::env::var("OPENAI_API_KEY")?);
//! let text = gateway
//!     .generate(&PromptPair {
//!         role_instruction: "You are an expert in Islamic Finance standards.".into(),
//!         task_instruction: "What is Murabaha?".into(),
//!     })
//!     .await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

pub mod gateway;
pub mod provider;
pub mod providers;

pub use gateway::{LlmGateway, ProviderGateway};
pub use provider::{LLMError, LLMProvider, LLMRequest, LLMResponse};
pub use providers::OpenAIProvider;
