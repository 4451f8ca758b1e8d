//! Command implementations

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::args::{EndpointArgs, RenderArgs, ValidateArgs};
use crate::config::Settings;
use crate::domain::model::{Job, Region, Transcoding};
use crate::endpoint::Endpoint;
use crate::request::codec;
use crate::request::ApiRequest;

/// Execute the validate command
pub fn validate(args: ValidateArgs) -> Result<()> {
    info!(spec = %args.spec.display(), "Validating job specification");

    let job = codec::load_job(&args.spec)
        .with_context(|| format!("Invalid job specification: {}", args.spec.display()))?;

    println!("{}", summarize(&job));
    Ok(())
}

/// Execute the render command
pub fn render(args: RenderArgs, settings: &Settings) -> Result<()> {
    let site_id = settings.require_site_id()?;
    info!(spec = %args.spec.display(), site_id, "Rendering create-job request");

    let job = codec::load_job(&args.spec)
        .with_context(|| format!("Invalid job specification: {}", args.spec.display()))?;
    let request = ApiRequest::create_job(&settings.api_base_url, site_id, &job)
        .context("Failed to assemble create-job request")?;

    println!("{} {}", request.method, request.url);
    if let Some(body) = request.body {
        let body = if args.pretty {
            codec::to_json_pretty(&job)?
        } else {
            body
        };
        println!("{}", body);
    }
    Ok(())
}

/// Execute the endpoint command
pub fn endpoint(args: EndpointArgs, settings: &Settings) -> Result<()> {
    let endpoint: Endpoint = args.name.parse()?;
    debug!(%endpoint, params = ?args.params, "Binding endpoint");

    let bound = endpoint
        .url(&settings.api_base_url, args.params.as_slice())
        .with_context(|| format!("Failed to bind endpoint {}", endpoint))?;

    println!("{} {}", bound.method, bound.path);
    Ok(())
}

/// Execute the regions command
pub fn regions(settings: &Settings) -> Result<()> {
    println!("{:<10} {:<6} {}", "NAME", "CODE", "AWS");
    for region in Region::ALL {
        let marker = if settings.region == Some(region) { " *" } else { "" };
        println!(
            "{:<10} {:<6} {}{}",
            region.name(),
            region.region_code(),
            region.aws_code(),
            marker
        );
    }
    Ok(())
}

fn summarize(job: &Job) -> String {
    let output = job.output();
    let (audio, video) = output
        .transcodings()
        .iter()
        .fold((0, 0), |(audio, video), transcoding| match transcoding {
            Transcoding::Audio(_) => (audio + 1, video),
            Transcoding::Video(_) => (audio, video + 1),
        });

    let packaging = output.packaging();
    let formats: Vec<&str> = [
        ("dash", packaging.dash()),
        ("hls", packaging.hls()),
        ("cmaf", packaging.cmaf()),
    ]
    .into_iter()
    .filter_map(|(name, enabled)| enabled.then_some(name))
    .collect();

    format!(
        "Job '{}' (content '{}') is valid\n  input files: {}\n  transcodings: {} video, {} audio\n  packaging: {}\n  drm: {}",
        job.job_name(),
        job.content_id(),
        job.input().files().len(),
        video,
        audio,
        formats.join(", "),
        match output.drm().and_then(|drm| drm.enabled()) {
            Some(true) => "enabled",
            _ => "disabled",
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_counts_variants() {
        let job = codec::from_json(
            r#"{
            "job_name": "job",
            "content_id": "cid",
            "input": {
                "storage_id": "in",
                "files": [{ "file_type": "multi", "file_path": "in.mp4",
                            "audios": [{ "in": { "track": 1 }, "remap": { "track": 0 } }] }]
            },
            "output": {
                "storage_id": "out",
                "path": "out",
                "transcodings": [
                    { "track_id": "v1", "track_type": "video", "codec": "h264",
                      "height": 1080, "width": 1920, "bitrate": 5000 },
                    { "track_id": "a1", "track_type": "audio", "codec": "aac",
                      "sources": [{ "track": 0 }] }
                ],
                "packaging": { "dash": true, "hls": true },
                "drm": { "enabled": true }
            }
        }"#,
        )
        .unwrap();

        let summary = summarize(&job);
        assert!(summary.contains("Job 'job' (content 'cid') is valid"));
        assert!(summary.contains("transcodings: 1 video, 1 audio"));
        assert!(summary.contains("packaging: dash, hls"));
        assert!(summary.contains("drm: enabled"));
    }
}
