/// Factories for selecting adapters at runtime
mod formatter_factory;

pub use formatter_factory::FormatterFactory;
