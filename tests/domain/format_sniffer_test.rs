use transcription_api::domain::{AudioFormat, detect_audio_format};

use crate::helpers::build_wav;

#[test]
fn given_buffers_shorter_than_four_bytes_when_detecting_then_returns_unknown() {
    for data in [&b""[..], &b"R"[..], &b"RI"[..], &[0xFF, 0xFB, 0x90][..]] {
        assert_eq!(
            detect_audio_format(data, Some("clip.wav")),
            AudioFormat::Unknown
        );
    }
}

#[test]
fn given_riff_wave_header_when_detecting_then_returns_wav_regardless_of_filename() {
    let wav = build_wav(16);

    assert_eq!(detect_audio_format(&wav, None), AudioFormat::Wav);
    assert_eq!(detect_audio_format(&wav, Some("song.mp3")), AudioFormat::Wav);
}

#[test]
fn given_riff_without_wave_marker_when_detecting_then_falls_back_to_extension() {
    let data = b"RIFF\x00\x00\x00\x00AVI LIST";

    assert_eq!(detect_audio_format(data, Some("movie.ogg")), AudioFormat::Ogg);
    assert_eq!(detect_audio_format(data, None), AudioFormat::Unknown);
}

#[test]
fn given_mpeg_frame_sync_when_detecting_then_returns_mp3() {
    let data = [0xFF, 0xFB, 0x90, 0x64, 0x00];

    assert_eq!(detect_audio_format(&data, None), AudioFormat::Mp3);
}

#[test]
fn given_partial_frame_sync_when_detecting_then_is_not_mp3() {
    let data = [0xFF, 0xC0, 0x00, 0x00];

    assert_eq!(detect_audio_format(&data, None), AudioFormat::Unknown);
}

#[test]
fn given_ftyp_box_at_offset_four_when_detecting_then_returns_mp4() {
    let data = b"\x00\x00\x00\x20ftypisom\x00\x00\x02\x00";

    assert_eq!(detect_audio_format(data, Some("voice.m4a")), AudioFormat::Mp4);
}

#[test]
fn given_flac_marker_when_detecting_then_returns_flac() {
    let data = b"fLaC\x00\x00\x00\x22";

    assert_eq!(detect_audio_format(data, None), AudioFormat::Flac);
}

#[test]
fn given_four_byte_flac_marker_when_detecting_then_returns_flac() {
    assert_eq!(detect_audio_format(b"fLaC", None), AudioFormat::Flac);
}

#[test]
fn given_no_signature_and_uppercase_extension_when_detecting_then_matches_case_insensitively() {
    let data = b"OggS\x00\x02\x00\x00";

    assert_eq!(detect_audio_format(data, Some("clip.OGG")), AudioFormat::Ogg);
}

#[test]
fn given_no_signature_when_detecting_then_each_known_extension_maps() {
    let data = b"\x00\x01\x02\x03\x04\x05\x06\x07";
    let cases = [
        ("a.wav", AudioFormat::Wav),
        ("a.mp3", AudioFormat::Mp3),
        ("a.mp4", AudioFormat::Mp4),
        ("a.m4a", AudioFormat::M4a),
        ("a.flac", AudioFormat::Flac),
        ("a.ogg", AudioFormat::Ogg),
        ("dir/a.Opus", AudioFormat::Opus),
    ];

    for (filename, expected) in cases {
        assert_eq!(detect_audio_format(data, Some(filename)), expected, "{}", filename);
    }
}

#[test]
fn given_no_signature_and_unknown_or_missing_extension_when_detecting_then_returns_unknown() {
    let data = b"plain text, not audio";

    assert_eq!(detect_audio_format(data, None), AudioFormat::Unknown);
    assert_eq!(detect_audio_format(data, Some("notes.txt")), AudioFormat::Unknown);
    assert_eq!(detect_audio_format(data, Some("README")), AudioFormat::Unknown);
    assert_eq!(detect_audio_format(data, Some("unknown")), AudioFormat::Unknown);
}

#[test]
fn given_dotfile_name_when_detecting_then_uses_text_after_leading_dot() {
    let data = b"\x00\x01\x02\x03\x04";

    assert_eq!(detect_audio_format(data, Some(".ogg")), AudioFormat::Ogg);
    assert_eq!(detect_audio_format(data, Some("uploads/.flac")), AudioFormat::Flac);
    assert_eq!(detect_audio_format(data, Some("clip.")), AudioFormat::Unknown);
}

#[test]
fn given_same_input_when_detecting_twice_then_result_is_identical() {
    let data = [0xFF, 0xF3, 0x44, 0xC4];

    assert_eq!(
        detect_audio_format(&data, Some("x.flac")),
        detect_audio_format(&data, Some("x.flac"))
    );
}

#[test]
fn given_format_when_displayed_then_uses_lowercase_label() {
    assert_eq!(AudioFormat::M4a.to_string(), "m4a");
    assert_eq!(AudioFormat::Unknown.as_str(), "unknown");
}
