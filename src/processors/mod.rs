pub mod view_builder;

pub use view_builder::ComparisonViewBuilder;
