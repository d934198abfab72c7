//! Capital Gains - Brazilian stock market capital-gains tax calculator
//!
//! This library computes the tax owed on ordered sequences of buy/sell
//! operations under Brazilian swing-trade rules: weighted-average cost
//! basis, the R$ 20.000,00 exemption threshold, and loss carry-forward.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod model;
