pub mod dto;
pub mod path_queries;

pub mod endpoints {
    pub const GET_PRICE: &str = "/price";
    pub const GET_PRICE_HISTORY: &str = "/price/history/:asset_id";
    pub const GET_EXCHANGE_RATE: &str = "/exchange-rate";
}
