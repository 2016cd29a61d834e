//! reqwest-backed [`CropApi`] implementation

use reqwest::{Client, Response};
use serde::Deserialize;
use url::Url;

use cropyield_core::prelude::*;
use cropyield_core::{DistrictRecord, PredictionRequest, PredictionResult};

use crate::api::CropApi;

/// Where the service listens when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:7860";

/// Relative path of the prediction endpoint
pub const PREDICT_PATH: &str = "predict";

/// Relative path of the district catalogue endpoint
pub const DISTRICTS_PATH: &str = "districts";

/// Error body the service returns alongside 4xx/5xx statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// HTTP client for the prediction service
#[derive(Debug, Clone)]
pub struct HttpCropApi {
    client: Client,
    base_url: Url,
}

impl HttpCropApi {
    /// Create a client rooted at `base_url`.
    ///
    /// The URL must be absolute `http` or `https`. A missing trailing slash is
    /// added so endpoint paths join under any path prefix. Requests carry no
    /// timeout: a call stays pending until the service answers or the
    /// connection fails.
    pub fn new(base_url: &str) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        let client = Client::builder()
            .build()
            .map_err(|e| Error::network(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::invalid_url(self.base_url.as_str(), e.to_string()))
    }
}

/// Validate and normalise a service base URL
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim()).map_err(|e| Error::invalid_url(raw, e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_url(
            raw,
            format!("unsupported scheme '{}'", url.scheme()),
        ));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Turn a non-2xx response into an [`Error::HttpStatus`] with `headline` as the
/// message, plus the service's own `{"error": ...}` text when it sent one.
async fn status_error(response: Response, headline: String) -> Error {
    let status = response.status().as_u16();
    let detail = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<ErrorBody>(&body).ok())
        .map(|body| body.error)
        .filter(|e| !e.trim().is_empty());

    let message = match detail {
        Some(detail) => format!("{headline}: {detail}"),
        None => headline,
    };
    Error::http_status(status, message)
}

async fn read_body(response: Response) -> Result<String> {
    response
        .text()
        .await
        .map_err(|e| Error::network(format!("failed to read response body: {e}")))
}

impl CropApi for HttpCropApi {
    async fn predict(&self, request: &PredictionRequest) -> Result<PredictionResult> {
        let url = self.endpoint(PREDICT_PATH)?;
        debug!("POST {} crop={} region={}", url, request.crop, request.region);

        let response = self
            .client
            .post(url)
            .json(request)
            .send()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let headline = format!("Server responded with {}", status.as_u16());
            let err = status_error(response, headline).await;
            warn!("Prediction request failed: {}", err);
            return Err(err);
        }

        let body = read_body(response).await?;
        let result: PredictionResult =
            serde_json::from_str(&body).map_err(|e| Error::malformed_body(e.to_string()))?;
        debug!("Prediction received: {:?}", result);
        Ok(result)
    }

    async fn list_districts(&self) -> Result<Vec<DistrictRecord>> {
        let url = self.endpoint(DISTRICTS_PATH)?;
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let headline = format!("Failed to fetch district data (status {})", status.as_u16());
            let err = status_error(response, headline).await;
            warn!("District request failed: {}", err);
            return Err(err);
        }

        let body = read_body(response).await?;
        let records: Vec<DistrictRecord> =
            serde_json::from_str(&body).map_err(|e| Error::malformed_body(e.to_string()))?;
        debug!("Loaded {} district records", records.len());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{StubResponse, StubServer};

    fn sample_request() -> PredictionRequest {
        PredictionRequest {
            nitrogen: "90".into(),
            phosphorous: "42".into(),
            potassium: "43".into(),
            ph: "6.5".into(),
            area: "2".into(),
            crop: "Rice".into(),
            region: "West Bengal".into(),
        }
    }

    #[test]
    fn test_parse_base_url_adds_trailing_slash() {
        let url = parse_base_url("http://127.0.0.1:7860").unwrap();
        assert_eq!(url.as_str(), "http://127.0.0.1:7860/");
        let url = parse_base_url("https://example.org/api").unwrap();
        assert_eq!(url.join(PREDICT_PATH).unwrap().as_str(), "https://example.org/api/predict");
    }

    #[test]
    fn test_parse_base_url_rejects_bad_input() {
        assert!(parse_base_url("not a url").unwrap_err().is_fatal());
        assert!(parse_base_url("ftp://example.org").is_err());
    }

    #[tokio::test]
    async fn test_predict_success() {
        let server = StubServer::start(vec![StubResponse::json(
            200,
            r#"{"prediction":{"predicted_production":4.2},"weather":{"temperature":30,"humidity":70,"rainfall":120}}"#,
        )])
        .await;
        let api = HttpCropApi::new(&server.base_url()).unwrap();

        let result = api.predict(&sample_request()).await.unwrap();
        assert_eq!(result.predicted_production().to_string(), "4.2 tonnes");

        let requests = server.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/predict");
        let sent = requests[0].json().unwrap();
        assert_eq!(sent["crop"], "Rice");
        assert_eq!(sent["region"], "West Bengal");
    }

    #[tokio::test]
    async fn test_predict_server_error_includes_status_and_detail() {
        let server = StubServer::start(vec![StubResponse::json(
            500,
            r#"{"error":"Failed to fetch weather data"}"#,
        )])
        .await;
        let api = HttpCropApi::new(&server.base_url()).unwrap();

        let err = api.predict(&sample_request()).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(
            err.to_string(),
            "Server responded with 500: Failed to fetch weather data"
        );
    }

    #[tokio::test]
    async fn test_predict_error_without_body_uses_headline() {
        let server = StubServer::start(vec![StubResponse::text(404, "nope")]).await;
        let api = HttpCropApi::new(&server.base_url()).unwrap();

        let err = api.predict(&sample_request()).await.unwrap_err();
        assert_eq!(err.to_string(), "Server responded with 404");
    }

    #[tokio::test]
    async fn test_predict_malformed_body() {
        let server = StubServer::start(vec![StubResponse::text(200, "<html>")]).await;
        let api = HttpCropApi::new(&server.base_url()).unwrap();

        let err = api.predict(&sample_request()).await.unwrap_err();
        assert_eq!(
            err.service_kind(),
            Some(cropyield_core::ServiceErrorKind::MalformedResponse)
        );
    }

    #[tokio::test]
    async fn test_list_districts_success() {
        let server = StubServer::start(vec![StubResponse::json(
            200,
            r#"[{"Name":"Nadia","Description":"Fertile plains","MajorCrops":"Rice; Jute","Fruits":null}]"#,
        )])
        .await;
        let api = HttpCropApi::new(&server.base_url()).unwrap();

        let records = api.list_districts().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Nadia");
        assert_eq!(records[0].major_crop_list(), vec!["Rice", "Jute"]);
        assert!(records[0].fruit_list().is_empty());
        assert_eq!(server.requests()[0].method, "GET");
        assert_eq!(server.requests()[0].path, "/districts");
    }

    #[tokio::test]
    async fn test_list_districts_status_failure() {
        let server = StubServer::start(vec![StubResponse::text(503, "")]).await;
        let api = HttpCropApi::new(&server.base_url()).unwrap();

        let err = api.list_districts().await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to fetch district data (status 503)");
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_service_still_succeeds() {
        let server = StubServer::start(vec![StubResponse::json(
            200,
            r#"[{"Name":"Hooghly","Description":"River delta","MajorCrops":"Potato"}]"#,
        )
        .delayed(std::time::Duration::from_secs(120))])
        .await;
        let api = HttpCropApi::new(&server.base_url()).unwrap();

        let records = api.list_districts().await.unwrap();
        assert_eq!(records[0].name, "Hooghly");
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_failure() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let api = HttpCropApi::new(&format!("http://{addr}")).unwrap();

        let err = api.list_districts().await.unwrap_err();
        assert_eq!(
            err.service_kind(),
            Some(cropyield_core::ServiceErrorKind::NetworkFailure)
        );
    }
}
