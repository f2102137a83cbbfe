//! Sell offers placed on a trading hall.

pub mod model;

pub use model::{CreateOffer, Offer, OfferResponse, PatchOffer};
