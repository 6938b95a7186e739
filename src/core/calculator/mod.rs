pub mod forecast;
pub mod gaps;
pub mod normalize;
pub mod rules;
pub mod simulation;
pub mod surplus;
