use reqwest::blocking::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use crate::models::{CompareRequest, ErrorInfo, ModelListing, RatingsRequest, ReportInfo, RoundInfo};

pub struct HTTPClient {
    pub base_url: String,
    client: Client,
}

impl HTTPClient {
    /// Comparisons wait on two upstream calls, so the timeout is generous.
    pub fn new(base_url: &str) -> Result<Self, String> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(150))
            .build()
            .map_err(|err| err.to_string())?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn models(&self) -> Result<ModelListing, String> {
        self.get("/models")
    }

    pub fn compare(&self, req: &CompareRequest) -> Result<RoundInfo, String> {
        self.post("/compare", req)
    }

    pub fn rate(&self, round_id: &str, req: &RatingsRequest) -> Result<RoundInfo, String> {
        self.post(&format!("/rounds/{}/ratings", round_id), req)
    }

    pub fn prefer(&self, round_id: &str, preference: Option<&str>) -> Result<RoundInfo, String> {
        self.post(
            &format!("/rounds/{}/preference", round_id),
            &json!({"preference": preference}),
        )
    }

    pub fn report(&self, round_id: &str) -> Result<ReportInfo, String> {
        self.get(&format!("/rounds/{}/report", round_id))
    }

    pub fn rounds(&self, limit: usize) -> Result<Vec<RoundInfo>, String> {
        let value: Value = self.get(&format!("/rounds?limit={}", limit))?;
        let rounds = value.get("rounds").cloned().unwrap_or_else(|| json!([]));
        serde_json::from_value(rounds).map_err(|err| err.to_string())
    }

    fn get<T: DeserializeOwned>(&self, route: &str) -> Result<T, String> {
        let resp = self
            .client
            .get(format!("{}{}", self.base_url, route))
            .send()
            .map_err(|err| err.to_string())?;
        decode(resp)
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, route: &str, body: &B) -> Result<T, String> {
        let resp = self
            .client
            .post(format!("{}{}", self.base_url, route))
            .json(body)
            .send()
            .map_err(|err| err.to_string())?;
        decode(resp)
    }
}

fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, String> {
    if resp.status().is_success() {
        return resp.json::<T>().map_err(|err| err.to_string());
    }
    let status = resp.status();
    let body = resp.text().unwrap_or_default();
    match serde_json::from_str::<ErrorInfo>(&body) {
        Ok(info) => Err(format!("{} ({})", info.error, info.code)),
        Err(_) => Err(format!("http {}: {}", status.as_u16(), body)),
    }
}
