pub use crate::builder::CharmingBuilder;

mod builder;
