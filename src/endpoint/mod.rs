//! Endpoint registry and positional URL templating
//!
//! Each [`Endpoint`] carries a path pattern with `%s` / `%N$s` placeholders
//! and an HTTP verb. Binding checks the placeholder count against the
//! supplied parameters before substituting, so a call site can never build a
//! path with a dangling or surplus segment.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::Serialize;

use crate::error::EndpointError;

/// Public host of the processing service
pub const DEFAULT_API_BASE_URL: &str = "https://tnp.doverunner.com";

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"%(\d+\$)?s").expect("placeholder pattern is valid"));

/// HTTP verb used by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operations exposed by the processing service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    AuthToken,
    CreateJob,
    ListJobs,
    JobDetail,
    StopJob,
    RestartJob,
}

/// A bound endpoint: verb plus fully substituted path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoundEndpoint {
    pub method: HttpMethod,
    pub path: String,
}

impl Endpoint {
    pub const ALL: [Endpoint; 6] = [
        Endpoint::AuthToken,
        Endpoint::CreateJob,
        Endpoint::ListJobs,
        Endpoint::JobDetail,
        Endpoint::StopJob,
        Endpoint::RestartJob,
    ];

    /// Path template; parameters are ordered site id, then job id
    pub fn pattern(&self) -> &'static str {
        match self {
            Endpoint::AuthToken => "/api/token/%s",
            Endpoint::CreateJob => "/api/job/%s",
            Endpoint::ListJobs => "/api/job/%s",
            Endpoint::JobDetail => "/api/job/%1$s/%2$s",
            Endpoint::StopJob => "/api/job/%1$s/%2$s/stop",
            Endpoint::RestartJob => "/api/job/%1$s/%2$s/restart",
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            Endpoint::AuthToken | Endpoint::CreateJob => HttpMethod::Post,
            Endpoint::ListJobs | Endpoint::JobDetail => HttpMethod::Get,
            Endpoint::StopJob | Endpoint::RestartJob => HttpMethod::Put,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::AuthToken => "auth-token",
            Endpoint::CreateJob => "create-job",
            Endpoint::ListJobs => "list-jobs",
            Endpoint::JobDetail => "job-detail",
            Endpoint::StopJob => "stop-job",
            Endpoint::RestartJob => "restart-job",
        }
    }

    /// Number of parameters the pattern expects
    pub fn arity(&self) -> usize {
        count_placeholders(self.pattern())
    }

    /// Bind parameters into the path template
    pub fn bind<S: AsRef<str>>(&self, params: &[S]) -> Result<BoundEndpoint, EndpointError> {
        let path = render(self.pattern(), params)?;
        Ok(BoundEndpoint {
            method: self.method(),
            path,
        })
    }

    /// Bind parameters and prefix the service base URL
    pub fn url<S: AsRef<str>>(
        &self,
        base_url: &str,
        params: &[S],
    ) -> Result<BoundEndpoint, EndpointError> {
        let bound = self.bind(params)?;
        Ok(BoundEndpoint {
            method: bound.method,
            path: format!("{}{}", base_url.trim_end_matches('/'), bound.path),
        })
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Endpoint {
    type Err = EndpointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Endpoint::ALL
            .into_iter()
            .find(|endpoint| endpoint.name() == wanted)
            .ok_or_else(|| EndpointError::UnknownEndpoint {
                name: s.to_string(),
            })
    }
}

/// Count `%s` and `%N$s` specifiers in a pattern
pub fn count_placeholders(pattern: &str) -> usize {
    PLACEHOLDER.find_iter(pattern).count()
}

/// Substitute parameters into a pattern after checking arity
///
/// `%s` takes the next sequential parameter, `%N$s` takes parameter `N`
/// (1-based) wherever it appears.
pub fn render<S: AsRef<str>>(pattern: &str, params: &[S]) -> Result<String, EndpointError> {
    let expected = count_placeholders(pattern);
    if expected != params.len() {
        return Err(EndpointError::ArityMismatch {
            expected,
            provided: params.len(),
        });
    }

    let mut next_sequential = 0;
    let mut failure = None;
    let rendered = PLACEHOLDER.replace_all(pattern, |caps: &Captures<'_>| {
        let slot = match caps.get(1) {
            Some(explicit) => explicit
                .as_str()
                .trim_end_matches('$')
                .parse::<usize>()
                .ok()
                .and_then(|index| index.checked_sub(1)),
            None => {
                let slot = next_sequential;
                next_sequential += 1;
                Some(slot)
            }
        };

        match slot.and_then(|index| params.get(index)) {
            Some(value) => value.as_ref().to_string(),
            None => {
                if failure.is_none() {
                    failure = Some(EndpointError::MissingArgument {
                        index: slot.map_or(0, |index| index + 1),
                        provided: params.len(),
                    });
                }
                String::new()
            }
        }
    });

    match failure {
        Some(err) => Err(err),
        None => Ok(rendered.into_owned()),
    }
}
