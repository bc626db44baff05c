use crate::domain::model::{FeedBundle, MapDocument};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn earthquake_endpoint(&self) -> &str;
    fn boundary_endpoint(&self) -> &str;
    fn output_path(&self) -> &str;
    fn map_title(&self) -> &str;
    fn map_center(&self) -> (f64, f64);
    fn map_zoom(&self) -> u8;
    fn request_timeout(&self) -> Duration;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<FeedBundle>;
    async fn transform(&self, feeds: FeedBundle) -> Result<MapDocument>;
    async fn load(&self, document: MapDocument) -> Result<String>;
}
