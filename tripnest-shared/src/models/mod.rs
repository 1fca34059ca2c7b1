pub mod accounts;
pub mod directory;
pub mod package;

pub use accounts::{ContactMessage, PublicUser, UserAccount};
pub use directory::{Agent, AgentContact, Destination, DestinationCategory, Hotel, Membership, Testimonial};
pub use package::{Category, TourPackage, UnknownCategory, PRICE_ON_REQUEST};
