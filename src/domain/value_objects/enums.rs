//! # Domain Enums
//!
//! Classification enums shared across aggregates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of transaction a listing or deal is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    /// Outright sale.
    #[default]
    Sale,

    /// Monthly rental.
    Rent,

    /// Long-term lease.
    Lease,

    /// Sale by auction.
    Auction,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Sale => "SALE",
            Self::Rent => "RENT",
            Self::Lease => "LEASE",
            Self::Auction => "AUCTION",
        };
        write!(f, "{}", s)
    }
}

/// Kind of property being listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyType {
    /// Residential apartment unit.
    #[default]
    Apartment,

    /// Detached villa or house.
    Villa,

    /// Undeveloped land.
    Land,

    /// Office space.
    Office,

    /// Retail shop.
    Shop,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Apartment => "APARTMENT",
            Self::Villa => "VILLA",
            Self::Land => "LAND",
            Self::Office => "OFFICE",
            Self::Shop => "SHOP",
        };
        write!(f, "{}", s)
    }
}

/// Why a deal was canceled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CancellationReason {
    /// The buyer withdrew from the deal.
    BuyerWithdrawn,

    /// The seller withdrew from the deal.
    SellerWithdrawn,

    /// The buyer's financing fell through.
    FinancingFailed,

    /// A compliance problem blocked the deal.
    ComplianceIssue,

    /// Any other reason.
    Other,
}

impl fmt::Display for CancellationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::BuyerWithdrawn => "BUYER_WITHDRAWN",
            Self::SellerWithdrawn => "SELLER_WITHDRAWN",
            Self::FinancingFailed => "FINANCING_FAILED",
            Self::ComplianceIssue => "COMPLIANCE_ISSUE",
            Self::Other => "OTHER",
        };
        write!(f, "{}", s)
    }
}
