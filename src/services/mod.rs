// Service exports
pub mod cache;
pub mod memory;
pub mod store;
pub mod supabase;

pub use cache::{JobCache, CacheKey, CacheStats};
pub use memory::InMemoryStore;
pub use store::{JobStore, StoreError};
pub use supabase::{SupabaseClient, SupabaseTables};
