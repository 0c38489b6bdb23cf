/// Network adapters for fetching the dataset over HTTP
mod http_dataset_client;

pub use http_dataset_client::HttpDatasetClient;
