//! Metro route planner.
//!
//! Answers: "On a train of this colour, what is the route from A to B with
//! the fewest stops?" Trains only stop at stations of their own colour or
//! at neutral stations, so riding through other stations is free.

pub mod cli;
pub mod domain;
pub mod network;
pub mod planner;
