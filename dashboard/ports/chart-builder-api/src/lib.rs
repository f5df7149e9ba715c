use async_trait::async_trait;

use domain_model::HistoryPoint;

#[async_trait]
pub trait ChartBuilderApi: Send + Sync + 'static {
    async fn build(&self, title: &str, points: Vec<HistoryPoint>) -> String;
}
