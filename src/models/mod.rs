//! Models module
//!
//! Defines the constellation documents read and written by the converter.

pub mod constellation;

pub use constellation::{
    Constellation, LINE_COUNT, LegacyConstellation, LegacyGraph, Star, line_key,
};
