mod cache_compaction;

pub use cache_compaction::CacheCompactionJob;
