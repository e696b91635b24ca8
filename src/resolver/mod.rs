pub mod progress;
pub mod reaction_resolver;

pub use progress::{NoProgress, ProgressReporter};
pub use reaction_resolver::{ReactionResolver, ResolveError};
