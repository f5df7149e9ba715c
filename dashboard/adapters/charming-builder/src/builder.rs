use async_trait::async_trait;
use charming::component::{Axis, Grid};
use charming::element::{AxisType, SplitLine, Tooltip, Trigger};
use charming::series::Line;
use charming::theme::Theme;
use charming::{Chart, HtmlRenderer};

use dashboard_chart_builder_api::ChartBuilderApi;
use domain_model::HistoryPoint;

pub struct CharmingBuilder;

#[async_trait]
impl ChartBuilderApi for CharmingBuilder {
    async fn build(&self, title: &str, points: Vec<HistoryPoint>) -> String {
        HtmlRenderer::new(title, 1200, 500)
            .theme(Theme::Default)
            .render(&build_chart(points))
            .unwrap()
    }
}

fn build_chart(points: Vec<HistoryPoint>) -> Chart {
    let timestamps = points
        .iter()
        .map(|point| point.timestamp.to_string())
        .collect();
    let prices: Vec<f64> = points.iter().map(|point| point.price_usd).collect();

    Chart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .x_axis(Axis::new().type_(AxisType::Category).data(timestamps))
        .y_axis(
            Axis::new()
                .scale(true)
                .split_line(SplitLine::new().show(false)),
        )
        .grid(Grid::new().bottom(80))
        .series(Line::new().name("Price (USD)").data(prices))
}
