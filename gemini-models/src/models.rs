//! Models API surface.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::client::ClientInner;
use crate::error::{Error, Result};
use crate::types::{ListModelsConfig, ListModelsResponse, Model};

#[derive(Clone)]
pub struct Models {
    pub(crate) inner: Arc<ClientInner>,
}

impl Models {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// 列出模型（基础列表，单次请求）。
    pub async fn list(&self) -> Result<ListModelsResponse> {
        self.list_with_config(ListModelsConfig::default()).await
    }

    /// 列出模型（带配置）。
    pub async fn list_with_config(&self, config: ListModelsConfig) -> Result<ListModelsResponse> {
        let url = build_models_list_url(&self.inner, &config)?;
        let request = self.inner.http.get(url);
        let response = self.inner.send(request).await?;
        decode_response(response).await
    }

    /// 获取单个模型信息。
    pub async fn get(&self, model: impl Into<String>) -> Result<Model> {
        let url = build_model_get_url(&self.inner, &model.into());
        let request = self.inner.http.get(url);
        let response = self.inner.send(request).await?;
        decode_response(response).await
    }
}

async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(Error::from_status(
            status.as_u16(),
            response.text().await.unwrap_or_default(),
        ));
    }
    Ok(response.json::<T>().await?)
}

fn transform_model_name(model: &str) -> String {
    if model.starts_with("models/") {
        model.to_string()
    } else {
        format!("models/{model}")
    }
}

fn build_model_get_url(inner: &ClientInner, model: &str) -> String {
    let base = &inner.api_client.base_url;
    let version = &inner.api_client.api_version;
    let model = transform_model_name(model);
    format!("{base}{version}/{model}")
}

fn build_models_list_url(inner: &ClientInner, config: &ListModelsConfig) -> Result<String> {
    let base = &inner.api_client.base_url;
    let version = &inner.api_client.api_version;
    let url = format!("{base}{version}/models");
    add_list_query_params(&url, config)
}

fn add_list_query_params(url: &str, config: &ListModelsConfig) -> Result<String> {
    if config.page_size.is_none() && config.page_token.is_none() {
        return Ok(url.to_string());
    }
    let mut url = reqwest::Url::parse(url).map_err(|err| Error::InvalidConfig {
        message: err.to_string(),
    })?;
    {
        let mut pairs = url.query_pairs_mut();
        if let Some(page_size) = config.page_size {
            pairs.append_pair("pageSize", &page_size.to_string());
        }
        if let Some(page_token) = &config.page_token {
            pairs.append_pair("pageToken", page_token);
        }
    }
    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_client_inner, test_client_inner_with_base};

    #[test]
    fn test_transform_model_name() {
        assert_eq!(
            transform_model_name("gemini-2.5-pro"),
            "models/gemini-2.5-pro"
        );
        assert_eq!(
            transform_model_name("models/gemini-2.5-pro"),
            "models/gemini-2.5-pro"
        );
    }

    #[test]
    fn test_build_model_get_url() {
        let inner = test_client_inner();
        assert_eq!(
            build_model_get_url(&inner, "gemini-2.5-pro"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-pro"
        );
    }

    #[test]
    fn test_build_models_list_url_default() {
        let inner = test_client_inner();
        let url = build_models_list_url(&inner, &ListModelsConfig::default()).unwrap();
        assert_eq!(url, "https://generativelanguage.googleapis.com/v1beta/models");
    }

    #[test]
    fn test_build_models_list_url_with_params() {
        let inner = test_client_inner_with_base("https://example.com/", "v1");
        let url = build_models_list_url(
            &inner,
            &ListModelsConfig {
                page_size: Some(3),
                page_token: Some("t".to_string()),
            },
        )
        .unwrap();
        assert!(url.starts_with("https://example.com/v1/models?"));
        assert!(url.contains("pageSize=3"));
        assert!(url.contains("pageToken=t"));
    }

    #[test]
    fn test_add_list_query_params_invalid_url() {
        let err = add_list_query_params(
            "http://[::1",
            &ListModelsConfig {
                page_size: Some(1),
                page_token: None,
            },
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }
}
