pub mod encoding;
pub mod engine;
pub mod feed;
pub mod layers;
pub mod legend;
pub mod pipeline;
pub mod render;

pub use crate::domain::model::{Earthquake, FeedBundle, Layer, LayerSet, MapDocument};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
