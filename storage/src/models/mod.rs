//! Business directory models.

mod business_filter;
mod business_record;
mod directory_stats;

pub use business_filter::BusinessFilter;
pub use business_record::{
    normalize_text, BusinessListing, BusinessRecord, BusinessStatus, NewBusiness,
};
pub use directory_stats::{DirectoryStats, KeywordCount, RecentBusiness};
