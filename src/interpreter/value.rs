/// Core value types.
///
/// Declares the `Value` enum with every runtime variant, the `HashKey`
/// type for the hashable subset, and the comparison and display behavior
/// shared by the evaluator, the builtins, and the embedding caller.
pub mod core;
