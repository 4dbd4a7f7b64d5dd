//! Implementations of the survey analysis operations

mod frequency;
