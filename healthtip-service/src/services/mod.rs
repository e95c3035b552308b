pub mod providers;

pub use providers::{CompletionProvider, GenerationParams, ProviderError};
