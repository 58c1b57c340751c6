use super::audio_format::AudioFormat;

const RIFF: &[u8; 4] = b"RIFF";
const WAVE: &[u8; 4] = b"WAVE";
const FTYP: &[u8; 4] = b"ftyp";
const FLAC: &[u8; 4] = b"fLaC";

/// Classifies an audio buffer by its header, falling back to the filename
/// extension. Total over all inputs: anything unrecognised is `Unknown`.
pub fn detect_audio_format(data: &[u8], filename: Option<&str>) -> AudioFormat {
    if data.len() < 4 {
        return AudioFormat::Unknown;
    }

    if let Some(format) = sniff_signature(data) {
        return format;
    }

    filename
        .and_then(extension)
        .map(AudioFormat::from_extension)
        .unwrap_or(AudioFormat::Unknown)
}

/// Text after the last `.` of the final path segment. A leading dot counts,
/// so `.ogg` yields `ogg`.
fn extension(filename: &str) -> Option<&str> {
    let segment = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    segment
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

fn sniff_signature(data: &[u8]) -> Option<AudioFormat> {
    if data.len() >= 12 && &data[0..4] == RIFF && &data[8..12] == WAVE {
        return Some(AudioFormat::Wav);
    }

    // MPEG audio frame sync: 11 set bits.
    if data[0] == 0xFF && (data[1] & 0xE0) == 0xE0 {
        return Some(AudioFormat::Mp3);
    }

    if data.len() >= 8 && &data[4..8] == FTYP {
        return Some(AudioFormat::Mp4);
    }

    if &data[0..4] == FLAC {
        return Some(AudioFormat::Flac);
    }

    None
}
