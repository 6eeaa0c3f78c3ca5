/// Network adapters for remote package repositories
mod http_index_client;

pub use http_index_client::HttpIndexClient;
