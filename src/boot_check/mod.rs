/// Domain layer - boot mode and patch level classification
///
/// Pure value objects and the evaluator. Nothing here performs I/O.
pub mod domain;
pub mod services;
