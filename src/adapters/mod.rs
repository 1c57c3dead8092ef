/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the outbound ports:
/// reading the project model, rendering graphs and writing them out.
pub mod outbound;
