use std::collections::BTreeSet;

use crate::library::TrackMetadata;

/// Distinct values seen across all tagged files of one run.
///
/// `None` members stand for files where the tag was absent. Only files that
/// were successfully read are folded in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateState {
    pub artists: BTreeSet<Option<String>>,
    pub albums: BTreeSet<Option<String>>,
    pub sample_rates: BTreeSet<Option<u32>>,
    pub bit_depths: BTreeSet<Option<u8>>,
}

impl AggregateState {
    pub fn observe(&mut self, metadata: &TrackMetadata) {
        self.artists.insert(metadata.artist.clone());
        self.albums.insert(metadata.album.clone());
        self.sample_rates.insert(metadata.sample_rate_hz);
        self.bit_depths.insert(metadata.bit_depth_bits);
    }

    /// True when no file was tagged during the pass.
    pub fn is_empty(&self) -> bool {
        self.artists.is_empty()
            && self.albums.is_empty()
            && self.sample_rates.is_empty()
            && self.bit_depths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(artist: Option<&str>, rate: Option<u32>) -> TrackMetadata {
        TrackMetadata {
            artist: artist.map(str::to_string),
            album: Some("X".into()),
            sample_rate_hz: rate,
            bit_depth_bits: Some(16),
            ..TrackMetadata::default()
        }
    }

    #[test]
    fn observe_deduplicates_values() {
        let mut state = AggregateState::default();
        state.observe(&meta(Some("Y"), Some(44_100)));
        state.observe(&meta(Some("Y"), Some(44_100)));

        assert_eq!(state.artists.len(), 1);
        assert_eq!(state.albums.len(), 1);
        assert_eq!(state.sample_rates.len(), 1);
        assert_eq!(state.bit_depths.len(), 1);
    }

    #[test]
    fn is_empty_until_first_observation() {
        let mut state = AggregateState::default();
        assert!(state.is_empty());
        state.observe(&TrackMetadata::default());
        assert!(!state.is_empty());
    }

    #[test]
    fn observe_keeps_unknown_as_its_own_value() {
        let mut state = AggregateState::default();
        state.observe(&meta(Some("Y"), Some(44_100)));
        state.observe(&meta(None, None));

        assert_eq!(state.artists.len(), 2);
        assert!(state.artists.contains(&None));
        assert!(state.sample_rates.contains(&None));
        assert_eq!(state.albums.len(), 1);
    }
}
