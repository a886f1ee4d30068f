use super::*;
use std::path::Path;

fn track(number: Option<u32>, title: Option<&str>) -> TrackMetadata {
    TrackMetadata {
        track_number: number,
        title: title.map(str::to_string),
        ..TrackMetadata::default()
    }
}

#[test]
fn pad_track_number_left_pads_with_zeros_up_to_width() {
    for width in 1..=5usize {
        for number in [0u32, 1, 9, 10, 99, 100, 1234, 123_456] {
            let padded = pad_track_number(number, width);
            let digits = number.to_string();
            assert!(padded.len() >= width);
            assert!(padded.ends_with(&digits));
            if digits.len() < width {
                assert_eq!(padded.len(), width);
                assert!(padded[..width - digits.len()].chars().all(|c| c == '0'));
            } else {
                assert_eq!(padded, digits);
            }
        }
    }
}

#[test]
fn proposed_file_name_keeps_extension_case_and_dot() {
    let settings = NamingSettings::default();
    assert_eq!(
        proposed_file_name(&track(Some(1), Some("A")), Path::new("/m/x.flac"), &settings),
        "01. A.flac"
    );
    assert_eq!(
        proposed_file_name(&track(Some(7), Some("Song")), Path::new("/m/x.MP3"), &settings),
        "07. Song.MP3"
    );
    assert_eq!(
        proposed_file_name(&track(Some(12), Some("Song")), Path::new("/m/noext"), &settings),
        "12. Song"
    );
}

#[test]
fn proposed_file_name_honours_configured_width() {
    let settings = NamingSettings {
        tracknum_width: 3,
        ..NamingSettings::default()
    };
    assert_eq!(
        proposed_file_name(&track(Some(4), Some("Intro")), Path::new("a.flac"), &settings),
        "004. Intro.flac"
    );
}

#[test]
fn proposed_file_name_uses_placeholder_for_unknown_track_and_title() {
    let settings = NamingSettings::default();
    assert_eq!(
        proposed_file_name(&track(None, Some("A")), Path::new("a.flac"), &settings),
        "00. A.flac"
    );
    assert_eq!(
        proposed_file_name(&track(Some(3), None), Path::new("a.flac"), &settings),
        "03. .flac"
    );

    let settings = NamingSettings {
        missing_track_number: 99,
        ..NamingSettings::default()
    };
    assert_eq!(
        proposed_file_name(&track(None, Some("A")), Path::new("a.flac"), &settings),
        "99. A.flac"
    );
}

#[test]
fn quality_label_requires_both_rate_and_depth_above_cd() {
    assert_eq!(QualityLabel::classify(48_000, 24), QualityLabel::HiRes);
    assert_eq!(QualityLabel::classify(96_000, 24), QualityLabel::HiRes);
    assert_eq!(QualityLabel::classify(44_100, 16), QualityLabel::Cd);
    assert_eq!(QualityLabel::classify(44_100, 24), QualityLabel::Cd);
    assert_eq!(QualityLabel::classify(48_000, 16), QualityLabel::Cd);
    assert_eq!(QualityLabel::HiRes.to_string(), "Hi-Res");
    assert_eq!(QualityLabel::Cd.to_string(), "CD");
}

#[test]
fn format_khz_keeps_one_decimal_for_whole_rates() {
    assert_eq!(format_khz(44_100), "44.1");
    assert_eq!(format_khz(48_000), "48.0");
    assert_eq!(format_khz(96_000), "96.0");
    assert_eq!(format_khz(88_200), "88.2");
    assert_eq!(format_khz(22_050), "22.05");
    assert_eq!(format_khz(192_000), "192.0");
}

#[test]
fn folder_name_full_form() {
    let cd = Quality {
        sample_rate_hz: 44_100,
        bit_depth_bits: 16,
    };
    assert_eq!(folder_name("X", "Y", Some(cd)), "[CD] X - Y [44.1kHz／16bit]");

    let hires = Quality {
        sample_rate_hz: 96_000,
        bit_depth_bits: 24,
    };
    assert_eq!(
        folder_name("Album", "Band", Some(hires)),
        "[Hi-Res] Album - Band [96.0kHz／24bit]"
    );
}

#[test]
fn folder_name_drops_empty_artist_segment() {
    let cd = Quality {
        sample_rate_hz: 44_100,
        bit_depth_bits: 16,
    };
    let name = folder_name("X", "", Some(cd));
    assert_eq!(name, "[CD] X [44.1kHz／16bit]");
    assert!(!name.contains(" - "));
}

#[test]
fn folder_name_without_quality_has_no_label_or_suffix() {
    assert_eq!(folder_name("X", "Y", None), "X - Y");
    assert_eq!(folder_name("X", "", None), "X");
}
