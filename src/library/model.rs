/// Tags and stream properties read from a single audio file.
///
/// Every field is optional: a file without a given tag still gets renamed and
/// still contributes an "unknown" value to the folder aggregates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackMetadata {
    pub artist: Option<String>,
    pub title: Option<String>,
    pub album: Option<String>,
    pub sample_rate_hz: Option<u32>,
    pub bit_depth_bits: Option<u8>,
    pub track_number: Option<u32>,
}
