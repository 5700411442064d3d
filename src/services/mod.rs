pub mod discovery;
pub mod providers;
pub mod ranker;
pub mod recorder;
pub mod scorer;
pub mod sources;
pub mod user;

pub use discovery::Discovery;
pub use providers::{CatalogProvider, TmdbClient};
pub use ranker::{rank, rank_with_store, RankedItem};
pub use recorder::{record_interaction, record_interaction_weighted};
pub use scorer::score;
pub use sources::{SourceManager, StreamingSource, SOURCES};
pub use user::UserService;
