//! Convenience re-exports for common use.

pub use crate::config::CodesmithConfig;
pub use crate::error::{CodesmithError, Result};
pub use crate::generator::CodeGenerator;
pub use crate::models::GeminiModel;
pub use crate::provider::GenerationProvider;
pub use crate::session::{Favorites, HistoryBuffer, RequestId, SessionContext, HISTORY_CAPACITY};
pub use crate::types::{
    CodeStyle, CodeType, Framework, GenerationOptions, HistoryRecord, IndentStyle, Language,
    ModelSettings,
};
