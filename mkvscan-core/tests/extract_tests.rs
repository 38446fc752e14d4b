// mkvscan-core/tests/extract_tests.rs
//
// Exercises metadata extraction against synthetic ffprobe JSON, without
// touching a real ffprobe binary.

use mkvscan_core::{ProbeOutput, QualityTier, TierLadder, extract_record, parse_probe_output};

fn probe_from_json(raw: &str) -> ProbeOutput {
    parse_probe_output(raw.as_bytes()).expect("test JSON should parse")
}

#[test]
fn test_full_record_extraction() {
    let probe = probe_from_json(
        r#"{
            "streams": [
                {
                    "index": 0,
                    "codec_type": "video",
                    "codec_name": "h264",
                    "width": 1920,
                    "height": 1080,
                    "avg_frame_rate": "24000/1001"
                },
                {
                    "index": 1,
                    "codec_type": "audio",
                    "codec_name": "aac",
                    "tags": { "language": "eng" }
                },
                {
                    "index": 2,
                    "codec_type": "audio",
                    "codec_name": "flac",
                    "tags": { "language": "jpn" }
                },
                {
                    "index": 3,
                    "codec_type": "subtitle",
                    "codec_name": "subrip",
                    "tags": { "language": "eng" }
                }
            ]
        }"#,
    );

    let record = extract_record("movie.mkv", &probe, &TierLadder::default());

    assert_eq!(record.display_name, "movie.mkv");
    assert_eq!(record.width, Some(1920));
    assert_eq!(record.height, Some(1080));
    assert_eq!(record.resolution().as_deref(), Some("1920x1080"));
    assert_eq!(record.frame_rate.as_deref(), Some("23.976"));
    assert_eq!(record.video_codec.as_deref(), Some("h264"));
    assert_eq!(record.quality, QualityTier::Fhd);
    assert_eq!(record.audio_tracks, vec!["eng (aac)", "jpn (flac)"]);
    assert_eq!(record.subtitle_tracks, vec!["eng (subrip)"]);
}

#[test]
fn test_audio_track_order_is_preserved_not_sorted() {
    let probe = probe_from_json(
        r#"{
            "streams": [
                { "codec_type": "audio", "codec_name": "flac", "tags": { "language": "jpn" } },
                { "codec_type": "audio", "codec_name": "aac", "tags": { "language": "eng" } }
            ]
        }"#,
    );

    let record = extract_record("a.mkv", &probe, &TierLadder::default());
    assert_eq!(record.audio_tracks, vec!["jpn (flac)", "eng (aac)"]);
}

#[test]
fn test_only_first_video_stream_is_consulted() {
    let probe = probe_from_json(
        r#"{
            "streams": [
                { "codec_type": "video", "codec_name": "hevc", "width": 3840, "height": 2160, "avg_frame_rate": "24/1" },
                { "codec_type": "video", "codec_name": "mjpeg", "width": 640, "height": 360 }
            ]
        }"#,
    );

    let record = extract_record("uhd.mkv", &probe, &TierLadder::default());
    assert_eq!(record.width, Some(3840));
    assert_eq!(record.video_codec.as_deref(), Some("hevc"));
    assert_eq!(record.quality, QualityTier::FourK);
    assert_eq!(record.frame_rate.as_deref(), Some("24"));
}

#[test]
fn test_untagged_tracks_default_to_und() {
    let probe = probe_from_json(
        r#"{
            "streams": [
                { "codec_type": "audio", "codec_name": "ac3" },
                { "codec_type": "audio", "tags": { "language": "fra" } }
            ]
        }"#,
    );

    let record = extract_record("a.mkv", &probe, &TierLadder::default());
    assert_eq!(record.audio_tracks, vec!["und (ac3)", "fra"]);
}

#[test]
fn test_no_video_stream_yields_unknown_tier() {
    let probe = probe_from_json(
        r#"{
            "streams": [
                { "codec_type": "audio", "codec_name": "opus", "tags": { "language": "eng" } }
            ]
        }"#,
    );

    let record = extract_record("audio-only.mkv", &probe, &TierLadder::default());
    assert_eq!(record.width, None);
    assert_eq!(record.quality, QualityTier::Unknown);
    assert_eq!(record.resolution(), None);
    assert_eq!(record.audio_tracks, vec!["eng (opus)"]);
}

#[test]
fn test_zero_over_zero_frame_rate_is_absent() {
    let probe = probe_from_json(
        r#"{
            "streams": [
                { "codec_type": "video", "width": 1280, "height": 720, "avg_frame_rate": "0/0" }
            ]
        }"#,
    );

    let record = extract_record("v.mkv", &probe, &TierLadder::default());
    assert_eq!(record.frame_rate, None);
    assert_eq!(record.quality, QualityTier::Hd);
}

#[test]
fn test_negative_dimensions_degrade_to_absent() {
    let probe = probe_from_json(
        r#"{
            "streams": [
                { "codec_type": "video", "codec_name": "h264", "width": -1, "height": 1080 }
            ]
        }"#,
    );

    let record = extract_record("bad.mkv", &probe, &TierLadder::default());
    assert_eq!(record.width, None);
    assert_eq!(record.height, Some(1080));
    assert_eq!(record.resolution(), None);
    assert_eq!(record.quality, QualityTier::Unknown);
}

#[test]
fn test_empty_probe_output_yields_unavailable_shape() {
    let probe = probe_from_json("{}");

    let record = extract_record("empty.mkv", &probe, &TierLadder::default());
    assert_eq!(record.width, None);
    assert_eq!(record.frame_rate, None);
    assert_eq!(record.video_codec, None);
    assert!(record.audio_tracks.is_empty());
    assert!(record.subtitle_tracks.is_empty());
    assert_eq!(record.quality, QualityTier::Unknown);
}

#[test]
fn test_record_serializes_tier_as_label() {
    let probe = probe_from_json(
        r#"{ "streams": [ { "codec_type": "video", "width": 2560, "height": 1440 } ] }"#,
    );

    let record = extract_record("wqhd.mkv", &probe, &TierLadder::default());
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["quality"], "2K");
    assert_eq!(json["width"], 2560);
    assert!(json["frame_rate"].is_null());
}
