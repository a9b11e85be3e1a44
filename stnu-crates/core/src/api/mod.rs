pub(crate) mod dc_status_cache;
pub(crate) mod stnu;

pub use dc_status_cache::CacheStatistics;
pub use dc_status_cache::DcStatusCache;
pub use stnu::Stnu;
