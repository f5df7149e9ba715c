pub use crate::client::TrackerRestClient;

mod client;
