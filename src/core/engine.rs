use crate::core::Pipeline;
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::monitor::SystemMonitor;

pub struct MapEngine<P: Pipeline> {
    pipeline: P,
    #[cfg_attr(not(feature = "cli"), allow(dead_code))]
    monitor_enabled: bool,
}

impl<P: Pipeline> MapEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            monitor_enabled: false,
        }
    }

    pub fn new_with_monitoring(pipeline: P, monitor_enabled: bool) -> Self {
        Self {
            pipeline,
            monitor_enabled,
        }
    }

    pub async fn run(&self) -> Result<String> {
        #[cfg(feature = "cli")]
        let monitor = self.monitor_enabled.then(|| SystemMonitor::new(true));

        println!("Starting map build...");

        // Extract
        println!("Fetching feeds...");
        let feeds = self.pipeline.extract().await?;
        println!("Fetched {} earthquakes", feeds.earthquakes.len());

        // Transform
        println!("Building layers...");
        let document = self.pipeline.transform(feeds).await?;
        println!("Registered {} overlay layers", document.layers.len());

        // Load
        println!("Rendering map page...");
        let output_path = self.pipeline.load(document).await?;
        println!("Map written to: {}", output_path);

        #[cfg(feature = "cli")]
        if let Some(monitor) = &monitor {
            monitor.log_stats();
        }

        Ok(output_path)
    }
}
