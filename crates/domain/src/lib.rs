#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

//! Core of a workout catalog application: a fixed catalog of moves with
//! free-text and category filtering, and a generator for randomized daily
//! workout plans of one exercise per category.

pub mod catalog;

mod category;
mod image;
mod moves;
mod name;
mod plan;
mod service;

pub use category::{ALL, Category, CategoryError};
pub use image::ImageRef;
pub use moves::{Move, MoveFilter, MoveID};
pub use name::{Name, NameError};
pub use plan::{Exercise, ExerciseID, ExercisePool, Plan, PlanPools, PoolError};
pub use service::Service;
