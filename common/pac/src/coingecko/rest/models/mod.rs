mod market_chart;
mod request;
mod simple_price;

pub use market_chart::{MarketChartRequest, MarketChartResponse};
pub use request::Request;
pub use simple_price::{SimplePriceRequest, SimplePriceResponse};
