//! cinematch — personalized catalog browsing for streaming front ends.
//!
//! The crate bundles four concerns a streaming UI needs behind one library:
//!
//! - a preference-weighted recommendation engine: user interactions
//!   accumulate per-category weights (genre, language, decade, rating
//!   bucket) which score and rank candidate titles
//!   ([`services::recorder`], [`services::scorer`], [`services::ranker`]);
//! - a metadata catalog client for TMDB with a mockable provider trait
//!   ([`services::providers`]) and a browsing facade that degrades failed
//!   calls to empty result pages ([`services::discovery`]);
//! - a streaming-source table resolving playback embed URLs
//!   ([`services::sources`]);
//! - durable client-local JSON state for the profile, interaction log,
//!   session, watch history, favorites and settings ([`store`],
//!   [`services::user`]).
//!
//! Nothing here runs a server: consumers embed the library and drive it from
//! their own event loop.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod store;

/// Installs a `RUST_LOG`-driven tracing subscriber
///
/// Opt-in helper for binaries and tests embedding the library; calling it
/// more than once is harmless.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
