#![allow(dead_code)]

use gemini_models::Client;

pub fn build_client(base_url: &str) -> Client {
    Client::builder()
        .api_key("test-key")
        .base_url(base_url)
        .build()
        .unwrap()
}

pub fn build_client_with_version(base_url: &str, api_version: &str) -> Client {
    Client::builder()
        .api_key("test-key")
        .base_url(base_url)
        .api_version(api_version)
        .build()
        .unwrap()
}
