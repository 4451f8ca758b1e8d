//! Request assembly
//!
//! Produces the `(verb, url, body)` triple handed to an HTTP transport. The
//! transport itself, and the authorization header it attaches, live outside
//! this crate.

pub mod codec;

use serde::Serialize;

use crate::domain::model::Job;
use crate::endpoint::{Endpoint, HttpMethod};
use crate::error::TnpResult;

/// A request ready for a transport to send
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ApiRequest {
    fn without_body(endpoint: Endpoint, base_url: &str, params: &[&str]) -> TnpResult<Self> {
        let bound = endpoint.url(base_url, params)?;
        Ok(Self {
            method: bound.method,
            url: bound.path,
            body: None,
        })
    }

    pub fn auth_token(base_url: &str, site_id: &str) -> TnpResult<Self> {
        Self::without_body(Endpoint::AuthToken, base_url, &[site_id])
    }

    /// Job submission carrying the compact JSON encoding of `job`
    pub fn create_job(base_url: &str, site_id: &str, job: &Job) -> TnpResult<Self> {
        let mut request = Self::without_body(Endpoint::CreateJob, base_url, &[site_id])?;
        request.body = Some(codec::to_json(job)?);
        Ok(request)
    }

    pub fn list_jobs(base_url: &str, site_id: &str) -> TnpResult<Self> {
        Self::without_body(Endpoint::ListJobs, base_url, &[site_id])
    }

    pub fn job_detail(base_url: &str, site_id: &str, job_id: &str) -> TnpResult<Self> {
        Self::without_body(Endpoint::JobDetail, base_url, &[site_id, job_id])
    }

    pub fn stop_job(base_url: &str, site_id: &str, job_id: &str) -> TnpResult<Self> {
        Self::without_body(Endpoint::StopJob, base_url, &[site_id, job_id])
    }

    pub fn restart_job(base_url: &str, site_id: &str, job_id: &str) -> TnpResult<Self> {
        Self::without_body(Endpoint::RestartJob, base_url, &[site_id, job_id])
    }
}
