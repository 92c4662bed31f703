// crates/framematch-net/src/client.rs
//
// Blocking HTTP client for the detection endpoint. Runs on the upload
// thread, never on the UI thread.

use std::time::Duration;

use framematch_core::detection::DetectionResponse;
use framematch_core::helpers::url::upload_url;
use framematch_core::media_types::UploadJob;
use ureq::SendBody;

use crate::error::TransportError;
use crate::multipart::MultipartBody;
use crate::progress::ProgressReader;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(600);

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub endpoint: String,
    /// Whole-request budget. Detection on long videos runs server-side
    /// before the response starts, so this is generous.
    pub timeout:  Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout:  DEFAULT_TIMEOUT,
        }
    }
}

pub struct DetectionClient {
    agent:  ureq::Agent,
    config: ClientConfig,
}

impl DetectionClient {
    pub fn new(config: ClientConfig) -> Self {
        let agent_config = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout))
            // The service answers failures with a JSON body and a 5xx status;
            // those must reach the controller as `success: false`.
            .http_status_as_error(false)
            .build();
        Self {
            agent: ureq::Agent::new_with_config(agent_config),
            config,
        }
    }

    /// POST the job's image and video as one multipart body. `on_progress`
    /// receives `(bytes_sent, bytes_total)` while the body is streamed.
    pub fn upload<F>(&self, job: &UploadJob, on_progress: F) -> Result<DetectionResponse, TransportError>
    where
        F: FnMut(u64, u64),
    {
        let body = MultipartBody::from_files(&[
            ("image", &job.image),
            ("video", &job.video),
        ])?;
        let url          = upload_url(&self.config.endpoint);
        let content_type = body.content_type();
        let total        = body.content_length();

        tracing::debug!(job_id = %job.job_id, %url, bytes = total, "POST");

        let mut reader = ProgressReader::new(body.into_reader(), total, on_progress);
        let mut resp = self
            .agent
            .post(&url)
            .header("Content-Type", &content_type)
            .header("Content-Length", &total.to_string())
            .send(SendBody::from_reader(&mut reader))?;

        let status = resp.status().as_u16();
        let text = resp.body_mut().read_to_string()?;
        tracing::debug!(job_id = %job.job_id, status, bytes = text.len(), "response received");

        DetectionResponse::from_json(&text).map_err(|source| TransportError::Malformed { status, source })
    }
}
