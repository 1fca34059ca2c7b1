pub mod models;
pub mod pii;

pub use models::{
    Agent, AgentContact, Category, ContactMessage, Destination, DestinationCategory, Hotel,
    Membership, PublicUser, Testimonial, TourPackage, UnknownCategory, UserAccount, PRICE_ON_REQUEST,
};
pub use pii::Masked;
