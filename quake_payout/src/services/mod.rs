//! Pricing services built on top of the payout algorithms.
//!
//! - [`portfolio`]: burning cost per insured location, isolating failures

pub mod portfolio;

pub use portfolio::{
    price_events, price_location, price_portfolio, InsuredLocation, LocationFailure, LocationQuote,
    PortfolioReport,
};
