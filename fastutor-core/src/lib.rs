//! # fastutor-core - Runtime for fastutor
//!
//! `fastutor-core` powers the fastutor terminal tutor for AAOIFI financial
//! accounting standards. It bundles the standards content, the bilingual
//! prompt templates, the chat-completion gateway and per-session state.
//!
//! ## Architecture Overview
//!
//! - `content/`: the five standards (FAS 4, 7, 10, 28, 32), their worked
//!   examples and the glossary, in English and Arabic.
//! - `prompts/`: typed prompt requests and the parallel English/Arabic
//!   templates for explaining, grading and answering questions.
//! - `llm/`: the OpenAI-compatible provider and the [`LlmGateway`] trait.
//! - `session/`: session memory and the per-user [`Session`] context.
//! - `tutor`: the orchestration of the three model-backed operations.
//! - `ui/`: page routing, the bilingual string table, markdown and spinners.
//! - `config/`: `fastutor.toml` loading and API key resolution.
//!
//! ## Quickstart
//!
//! ```rust,ignore
//! use fastutor_core::{Language, ProviderGateway, Session, StandardId, Tutor};
//! use fastutor_core::config::{ApiKeySources, ConfigManager, get_api_key};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ConfigManager::load()?.into_config();
//!     let api_key = get_api_key(&ApiKeySources::default())?;
//!     let tutor = Tutor::new(Box::new(ProviderGateway::openai(&config.llm, api_key)));
//!
//!     let mut session = Session::start(Language::English);
//!     let text = tutor.explain(&mut session, StandardId::Fas10).await?;
//!     println!("{text}");
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod language;
pub mod llm;
pub mod prompts;
pub mod session;
pub mod tutor;
pub mod ui;

pub use content::{ContentStore, Example, GlossaryTerm, Standard, StandardId};
pub use error::{FasError, Result};
pub use language::{Language, Localized};
pub use llm::{LLMError, LlmGateway, ProviderGateway};
pub use prompts::{PromptComposer, PromptPair, PromptRequest};
pub use session::{Session, SessionMemory, SessionRecord};
pub use tutor::{Tutor, TutorialOutcome};
