pub mod declaration;
pub mod error;
pub mod job;

pub use declaration::{Declaration, DeclarationKind, SourceUnit};
pub use error::{DocError, Result, ResultExt};
pub use job::{Job, TemplateCategory};
