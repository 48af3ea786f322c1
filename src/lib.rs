/*
    Top-level
*/

mod complex;
mod error;
mod number;
mod rational;
mod round;

pub mod bisection;
pub mod series;

pub use complex::*;
pub use error::*;
pub use number::*;
pub use rational::RationalNumber;
pub use round::*;
