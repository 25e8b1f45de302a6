// geometry/ - Feature shapes
//
// Immutable shape values that know how to stamp themselves onto a Grid.
// Membership is a hard boolean test, no anti-aliasing.

mod ellipse;

pub use ellipse::*;
