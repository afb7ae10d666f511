//! Trip planning: from form input to the shaped views of one itinerary.

pub mod itinerary;
pub mod parsing;
pub mod presentation;
pub mod projection;
pub mod prompt;
pub mod request;
pub mod session;

pub use presentation::{ChartBar, MapPoint, Presentation};
pub use request::{BudgetTier, DEFAULT_DAYS, Interest, MAX_DAYS, MIN_DAYS, TripRequest};
pub use session::TripPlanner;
