pub mod model;
pub mod queries;
pub mod repository;

pub use model::{AcceptedBid, BidState, BidSubmission, Item, ItemListing, ItemSummary, NewItem};
pub use repository::{ItemRepository, PgItemRepository};
