use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use tnp_cli::domain::model::*;
use tnp_cli::endpoint::DEFAULT_API_BASE_URL;
use tnp_cli::request::codec::{self, SpecFormat};
use tnp_cli::*;

/// Shared fixtures
mod test_utils {
    use super::*;

    pub fn track(index: i32) -> Track {
        Track::new(index).unwrap()
    }

    /// A job exercising every optional branch of the model
    pub fn full_job() -> Job {
        let input = Input::builder()
            .storage_id("input-storage")
            .file(
                InputFile::builder()
                    .file_type(FileType::Multi)
                    .file_path("input/movie.mp4")
                    .audio(
                        Audio::builder()
                            .input(track(1))
                            .remap(track(0))
                            .build()
                            .unwrap(),
                    )
                    .build()
                    .unwrap(),
            )
            .subtitle(
                Subtitle::builder()
                    .file_path("input/movie.ko.vtt")
                    .language("ko")
                    .build()
                    .unwrap(),
            )
            .build()
            .unwrap();

        let output = Output::builder()
            .storage_id("output-storage")
            .path("output/movie")
            .default_language("ko")
            .transcoding(
                VideoTranscoding::builder()
                    .track_id("video_1080")
                    .track_type(FileType::Video)
                    .codec("h264")
                    .height(1080)
                    .width(1920)
                    .bitrate_mode(BitrateMode::Vbr)
                    .min_bitrate(3000)
                    .max_bitrate(6000)
                    .build()
                    .unwrap(),
            )
            .transcoding(
                VideoTranscoding::builder()
                    .track_id("video_720")
                    .track_type(FileType::Video)
                    .codec("h264")
                    .height(720)
                    .width(1280)
                    .bitrate(2500)
                    .bandwidth(2800)
                    .build()
                    .unwrap(),
            )
            .transcoding(
                AudioTranscoding::builder()
                    .track_id("audio_ko")
                    .track_type(FileType::Audio)
                    .track_name("Korean")
                    .codec("aac")
                    .language("ko")
                    .source(track(0))
                    .build()
                    .unwrap(),
            )
            .packaging(
                Packaging::builder()
                    .dash(true)
                    .hls(true)
                    .option(
                        PackagingOption::builder()
                            .min_buffer_time(4)
                            .enable_average_bandwidth_mpd(true)
                            .subtitle_format(SubtitleFormat::builder().hls("webvtt").build().unwrap())
                            .build()
                            .unwrap(),
                    )
                    .build()
                    .unwrap(),
            )
            .drm(
                Drm::builder()
                    .enabled(true)
                    .option(DrmOption::builder().multi_key(true).clear_lead(10).build())
                    .build(),
            )
            .forensic_watermarking(ForensicWatermarking::new(true))
            .job_noti_id(1234)
            .build()
            .unwrap();

        Job::builder()
            .job_name("movie-job")
            .content_id("movie-001")
            .input(input)
            .output(output)
            .build()
            .unwrap()
    }

    pub fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }
}

use test_utils::*;

const YAML_JOB: &str = r#"
job_name: movie-job
content_id: movie-001
input:
  storage_id: input-storage
  files:
    - file_type: multi
      file_path: input/movie.mp4
      audios:
        - in: { track: 1 }
          remap: { track: 0 }
output:
  storage_id: output-storage
  path: output/movie
  transcodings:
    - track_id: video_720
      track_type: video
      codec: h264
      height: 720
      width: 1280
      bitrate: 2500
    - track_id: audio_ko
      track_type: audio
      codec: aac
      sources:
        - track: 0
  packaging:
    hls: true
"#;

const TOML_JOB: &str = r#"
job_name = "movie-job"
content_id = "movie-001"

[input]
storage_id = "input-storage"

[[input.files]]
file_type = "multi"
file_path = "input/movie.mp4"
audios = [{ in = { track = 1 }, remap = { track = 0 } }]

[output]
storage_id = "output-storage"
path = "output/movie"

[[output.transcodings]]
track_id = "video_720"
track_type = "video"
codec = "h264"
height = 720
width = 1280
bitrate = 2500

[[output.transcodings]]
track_id = "audio_ko"
track_type = "audio"
codec = "aac"
sources = [{ track = 0 }]

[output.packaging]
hls = true
"#;

#[test]
fn test_full_job_round_trip() {
    let job = full_job();
    let encoded = codec::to_json(&job).unwrap();

    let decoded = codec::from_json(&encoded).unwrap();
    assert_eq!(decoded, job);
    assert_eq!(codec::to_json(&decoded).unwrap(), encoded);
    assert!(!encoded.contains("null"));
}

#[test]
fn test_round_trip_keeps_variant_for_any_track_type() {
    let input = Input::builder()
        .storage_id("in")
        .file(
            InputFile::builder()
                .file_type(FileType::Multi)
                .file_path("input/movie.mp4")
                .audio(Audio::builder().input(track(1)).remap(track(0)).build().unwrap())
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    let output = Output::builder()
        .storage_id("out")
        .path("out")
        .transcoding(
            AudioTranscoding::builder()
                .track_id("audio_mix")
                .track_type(FileType::Multi)
                .codec("aac")
                .source(track(0))
                .build()
                .unwrap(),
        )
        .transcoding(
            VideoTranscoding::builder()
                .track_id("video_720")
                .track_type(FileType::Multi)
                .codec("h264")
                .height(720)
                .width(1280)
                .crf(23)
                .bitrate_mode(BitrateMode::Vbr)
                .build()
                .unwrap(),
        )
        .packaging(Packaging::builder().cmaf(true).build().unwrap())
        .build()
        .unwrap();
    let job = Job::builder()
        .job_name("mixed")
        .content_id("cid")
        .input(input)
        .output(output)
        .build()
        .unwrap();

    let decoded = codec::from_json(&codec::to_json(&job).unwrap()).unwrap();
    assert_eq!(decoded, job);
    assert!(decoded.output().transcodings()[0].has_audio_info());
    assert!(!decoded.output().transcodings()[1].has_audio_info());
}

#[test]
fn test_wire_field_names() {
    let value: serde_json::Value = serde_json::from_str(&codec::to_json(&full_job()).unwrap()).unwrap();

    let audio = &value["input"]["files"][0]["audios"][0];
    assert_eq!(audio["in"]["track"], 1);
    assert_eq!(audio["remap"]["track"], 0);

    let output = &value["output"];
    assert_eq!(output["transcodings"][0]["bitrate_mode"], "vbr");
    assert!(output["transcodings"][0].get("bitrate").is_none());
    assert_eq!(output["transcodings"][2]["sources"][0]["track"], 0);
    assert!(output["transcodings"][1].get("sources").is_none());
    assert!(output["packaging"].get("cmaf").is_none());
    assert_eq!(output["packaging"]["option"]["min_buffer_time"], 4);
    assert_eq!(output["drm"]["option"]["generate_tracktype_manifests"], false);
    assert_eq!(output["drm"]["option"]["max_uhd1_height"], 2160);
    assert_eq!(output["forensic_watermarking"]["enabled"], true);
    assert_eq!(output["job_noti_id"], 1234);
}

#[test]
fn test_loaders_agree_across_formats() {
    let dir = TempDir::new().unwrap();
    let yaml = codec::load_job(write(&dir, "job.yaml", YAML_JOB)).unwrap();
    let toml = codec::load_job(write(&dir, "job.toml", TOML_JOB)).unwrap();
    let json_text = codec::to_json_pretty(&yaml).unwrap();
    let json = codec::load_job(write(&dir, "job.json", &json_text)).unwrap();
    let bare = codec::load_job(write(&dir, "job.spec", &json_text)).unwrap();

    assert_eq!(yaml, toml);
    assert_eq!(yaml, json);
    assert_eq!(yaml, bare);
    assert!(yaml.output().transcodings()[1].has_audio_info());
}

#[test]
fn test_invalid_file_fails_with_builder_message() {
    let dir = TempDir::new().unwrap();
    let broken = YAML_JOB.replace("hls: true", "hls: false");
    let err = codec::load_job(write(&dir, "job.yml", &broken)).unwrap_err();
    assert!(err
        .to_string()
        .contains("[E001] Required input value is missing. - At least one of 'dash', 'hls', or 'cmaf' must be true when creating Packaging."));

    let missing = codec::load_job(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(missing, TnpError::Io(_)));

    let garbage = codec::decode("{ not json", SpecFormat::Json).unwrap_err();
    assert!(matches!(garbage, TnpError::Codec { .. }));
}

#[test]
fn test_audio_consistency_across_job() {
    let input = Input::builder()
        .storage_id("in")
        .file(
            InputFile::builder()
                .file_type(FileType::Audio)
                .file_path("input/a.m4a")
                .audio(Audio::builder().input(track(0)).remap(track(0)).build().unwrap())
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    let output = Output::builder()
        .storage_id("out")
        .path("out")
        .transcoding(
            VideoTranscoding::builder()
                .track_id("v")
                .track_type(FileType::Video)
                .codec("h264")
                .height(720)
                .width(1280)
                .bitrate(3000)
                .build()
                .unwrap(),
        )
        .packaging(Packaging::builder().hls(true).build().unwrap())
        .build()
        .unwrap();

    let err = Job::builder()
        .job_name("job")
        .content_id("cid")
        .input(input)
        .output(output)
        .build()
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::MissingRequiredValue);
    assert_eq!(
        err.to_string(),
        "[E001] Required input value is missing. - The audio information in 'input' and 'output' must be consistent when creating a Job."
    );
}

#[test]
fn test_create_job_request() {
    let job = full_job();
    let request = ApiRequest::create_job(DEFAULT_API_BASE_URL, "SITE", &job).unwrap();
    assert_eq!(request.method, HttpMethod::Post);
    assert_eq!(request.url, "https://tnp.doverunner.com/api/job/SITE");
    assert_eq!(request.body.unwrap(), codec::to_json(&job).unwrap());

    let list = ApiRequest::list_jobs("http://localhost:9000/", "SITE").unwrap();
    assert_eq!(list.method, HttpMethod::Get);
    assert_eq!(list.url, "http://localhost:9000/api/job/SITE");

    let restart = ApiRequest::restart_job(DEFAULT_API_BASE_URL, "SITE", "77").unwrap();
    assert_eq!(restart.method, HttpMethod::Put);
    assert!(restart.url.ends_with("/api/job/SITE/77/restart"));
}

#[test]
fn test_endpoint_parameter_order() {
    let forward = Endpoint::JobDetail.bind(&["TEST", "777"]).unwrap();
    let reversed = Endpoint::JobDetail.bind(&["777", "TEST"]).unwrap();
    assert_eq!(forward.path, "/api/job/TEST/777");
    assert_eq!(reversed.path, "/api/job/777/TEST");

    let err = Endpoint::StopJob.bind(&["TEST"]).unwrap_err();
    assert_eq!(
        err,
        EndpointError::ArityMismatch {
            expected: 2,
            provided: 1
        }
    );
}

#[test]
fn test_region_lookup() {
    for region in Region::ALL {
        assert_eq!(region.region_code().parse::<Region>().unwrap(), region);
        assert_eq!(region.aws_code().parse::<Region>().unwrap(), region);
        assert_eq!(region.name().to_uppercase().parse::<Region>().unwrap(), region);
    }
    let err = "eu-west-1".parse::<Region>().unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidValue);
}
