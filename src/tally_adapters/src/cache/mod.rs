pub mod listing_cache;

pub use listing_cache::ListingCache;
