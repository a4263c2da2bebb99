use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use super::{GatewayError, Result, TaskGateway};
use crate::model::{RemoteConfig, Task, TaskId, TaskPayload};

/// Content type the demo backend expects on write calls
const JSON_UTF8: &str = "application/json; charset=UTF-8";

/// reqwest-backed gateway for a jsonplaceholder-style `/todos` service
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()?;
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))?;
        Ok(HttpGateway { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append `segments` to the base URL path, keeping any path prefix it has.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| GatewayError::Url(url::ParseError::RelativeUrlWithCannotBeABaseBase))?;
            path.pop_if_empty();
            path.extend(segments);
        }
        Ok(url)
    }

    fn write_request(&self, method: Method, url: Url, payload: &TaskPayload) -> Result<RequestBuilder> {
        let body = serde_json::to_vec(payload)?;
        Ok(self
            .client
            .request(method, url)
            .header(CONTENT_TYPE, JSON_UTF8)
            .body(body))
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status { status, body });
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[async_trait]
impl TaskGateway for HttpGateway {
    async fn fetch_seed_tasks(&self, limit: usize) -> Result<Vec<Task>> {
        let mut url = self.url(&["todos"])?;
        url.query_pairs_mut()
            .append_pair("_limit", &limit.to_string());
        tracing::debug!(%url, "fetching seed tasks");
        let tasks: Vec<Task> = self.send_json(self.client.get(url)).await?;
        tracing::debug!(count = tasks.len(), "seed tasks received");
        Ok(tasks)
    }

    async fn create_task(&self, payload: &TaskPayload) -> Result<Task> {
        let url = self.url(&["todos"])?;
        tracing::debug!(%url, title = %payload.title, "creating task");
        let builder = self.write_request(Method::POST, url, payload)?;
        self.send_json(builder).await
    }

    async fn update_task(&self, id: TaskId, payload: &TaskPayload) -> Result<Task> {
        let id_segment = id.to_string();
        let url = self.url(&["todos", id_segment.as_str()])?;
        tracing::debug!(%url, title = %payload.title, completed = payload.completed, "updating task");
        let builder = self.write_request(Method::PUT, url, payload)?;
        self.send_json(builder).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn gateway_for(server: &MockServer) -> HttpGateway {
        let config = RemoteConfig {
            base_url: server.uri(),
            ..RemoteConfig::default()
        };
        HttpGateway::new(&config).expect("gateway init")
    }

    #[test]
    fn test_url_keeps_base_path_prefix() {
        let config = RemoteConfig {
            base_url: "http://localhost:9000/api/".into(),
            ..RemoteConfig::default()
        };
        let gw = HttpGateway::new(&config).unwrap();
        assert_eq!(
            gw.url(&["todos", "7"]).unwrap().as_str(),
            "http://localhost:9000/api/todos/7"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        let config = RemoteConfig {
            base_url: "not a url".into(),
            ..RemoteConfig::default()
        };
        assert!(matches!(
            HttpGateway::new(&config),
            Err(GatewayError::Url(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_seed_tasks() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .and(query_param("_limit", "4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "userId": 1, "id": 1, "title": "delectus aut autem", "completed": false },
                { "userId": 1, "id": 2, "title": "quis ut nam", "completed": true }
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let tasks = gateway_for(&server).fetch_seed_tasks(4).await.unwrap();
        assert_eq!(
            tasks,
            vec![
                Task::new(1, "delectus aut autem", false),
                Task::new(2, "quis ut nam", true),
            ]
        );
    }

    #[tokio::test]
    async fn test_create_task_sends_wire_contract() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/todos"))
            .and(header("content-type", JSON_UTF8))
            .and(body_json(json!({ "title": "Buy milk", "completed": false })))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(json!({ "id": 201, "title": "Buy milk", "completed": false })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let task = gateway_for(&server)
            .create_task(&TaskPayload::new("Buy milk", false))
            .await
            .unwrap();
        assert_eq!(task, Task::new(201, "Buy milk", false));
    }

    #[tokio::test]
    async fn test_update_task_uses_put_with_id() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/todos/1"))
            .and(header("content-type", JSON_UTF8))
            .and(body_json(json!({ "title": "Renamed", "completed": true })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "id": 1, "title": "Renamed", "completed": true })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let task = gateway_for(&server)
            .update_task(1, &TaskPayload::new("Renamed", true))
            .await
            .unwrap();
        assert_eq!(task.title, "Renamed");
    }

    #[tokio::test]
    async fn test_server_error_maps_to_status() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/todos/201"))
            .respond_with(ResponseTemplate::new(500).set_body_string("{}"))
            .mount(&server)
            .await;

        let err = gateway_for(&server)
            .update_task(201, &TaskPayload::new("x", false))
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR));
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_json_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/todos"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = gateway_for(&server).fetch_seed_tasks(4).await.unwrap_err();
        assert!(matches!(err, GatewayError::Json(_)));
    }

    #[tokio::test]
    async fn test_unreachable_server_maps_to_http_error() {
        let server = MockServer::start().await;
        let gw = gateway_for(&server);
        drop(server);

        let err = gw.fetch_seed_tasks(4).await.unwrap_err();
        assert!(matches!(err, GatewayError::Http(_)));
    }
}
