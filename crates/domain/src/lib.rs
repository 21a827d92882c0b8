#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
mod exercise;
mod muscle;
mod name;
mod reference;
mod requirement;
pub mod score;
mod service;

pub use exercise::*;
pub use muscle::*;
pub use name::*;
pub use reference::*;
pub use requirement::*;
pub use score::{
    Evaluation, GroupScore, Score, ScoreError, compressed_quality, evaluate, rank, score,
};
pub use service::*;
