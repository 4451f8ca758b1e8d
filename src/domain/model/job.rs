// Job assembly - top-level specification submitted to the service

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::errors::DomainError;
use crate::domain::model::{Input, Output};
use crate::domain::rules::{require_text, require_value, AudioConsistency};

/// A complete, internally consistent transcode-and-package job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "JobBuilder")]
pub struct Job {
    job_name: String,
    content_id: String,
    input: Input,
    output: Output,
}

impl Job {
    pub fn builder() -> JobBuilder {
        JobBuilder::default()
    }

    pub fn job_name(&self) -> &str {
        &self.job_name
    }

    pub fn content_id(&self) -> &str {
        &self.content_id
    }

    pub fn input(&self) -> &Input {
        &self.input
    }

    pub fn output(&self) -> &Output {
        &self.output
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct JobBuilder {
    job_name: Option<String>,
    content_id: Option<String>,
    input: Option<Input>,
    output: Option<Output>,
}

impl JobBuilder {
    pub fn job_name(mut self, job_name: impl Into<String>) -> Self {
        self.job_name = Some(job_name.into());
        self
    }

    pub fn content_id(mut self, content_id: impl Into<String>) -> Self {
        self.content_id = Some(content_id.into());
        self
    }

    pub fn input(mut self, input: Input) -> Self {
        self.input = Some(input);
        self
    }

    pub fn output(mut self, output: Output) -> Self {
        self.output = Some(output);
        self
    }

    /// Validate required fields, then the input/output audio agreement
    pub fn build(self) -> Result<Job, DomainError> {
        let job_name = require_text(
            self.job_name,
            "The 'jobName' field is required when creating a Job.",
        )?;
        let content_id = require_text(
            self.content_id,
            "The 'contentId' field is required when creating a Job.",
        )?;
        let input = require_value(
            self.input,
            "The 'input' field is required when creating a Job.",
        )?;
        let output = require_value(
            self.output,
            "The 'output' field is required when creating a Job.",
        )?;

        AudioConsistency::validate(&input, &output)?;

        debug!(
            job_name = %job_name,
            content_id = %content_id,
            files = input.files().len(),
            transcodings = output.transcodings().len(),
            "Job specification assembled"
        );

        Ok(Job {
            job_name,
            content_id,
            input,
            output,
        })
    }
}

impl TryFrom<JobBuilder> for Job {
    type Error = DomainError;

    fn try_from(builder: JobBuilder) -> Result<Self, Self::Error> {
        builder.build()
    }
}
