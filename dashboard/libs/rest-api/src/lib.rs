pub mod dto;
pub mod path_queries;

pub mod endpoints {
    pub const GET_DASHBOARD: &str = "/";
    pub const GET_CHART: &str = "/chart/:asset_id";
    pub const GET_CONVERT: &str = "/convert";
}
