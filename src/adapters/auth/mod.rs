//! Authentication adapters.
//!
//! Implementations of the `TokenStore` port:
//!
//! - `in_memory_token_store` - Process-lifetime holder for the OAuth token

mod in_memory_token_store;

pub use in_memory_token_store::InMemoryTokenStore;
