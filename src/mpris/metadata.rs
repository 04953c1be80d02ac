use std::{collections::HashMap, time::Duration};

use crate::value::DynamicValue;

const TRACK_ID: &str = "mpris:trackid";
const LENGTH: &str = "mpris:length";
const ART_URL: &str = "mpris:artUrl";
const ALBUM: &str = "xesam:album";
const ALBUM_ARTIST: &str = "xesam:albumArtist";
const ARTIST: &str = "xesam:artist";
const DISC_NUMBER: &str = "xesam:discNumber";
const TITLE: &str = "xesam:title";
const TRACK_NUMBER: &str = "xesam:trackNumber";
const URL: &str = "xesam:url";

/// Metadata of the current track, as read from a player's `Metadata` property.
///
/// MPRIS makes every key optional, so the accessors never fail: a missing key
/// or a value of an unexpected type yields the type's zero value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata(HashMap<String, DynamicValue>);

impl From<HashMap<String, DynamicValue>> for Metadata {
    fn from(entries: HashMap<String, DynamicValue>) -> Self {
        Self(entries)
    }
}

impl Metadata {
    /// Raw value stored under `key`
    pub fn get(&self, key: &str) -> Option<&DynamicValue> {
        self.0.get(key)
    }

    /// All keys the player reported
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Whether the player reported no metadata at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the metadata, returning the underlying map
    pub fn into_inner(self) -> HashMap<String, DynamicValue> {
        self.0
    }

    /// MPRIS track identifier (`mpris:trackid`)
    ///
    /// Players disagree on whether this is an object path or a string; both
    /// are accepted.
    pub fn track_id(&self) -> String {
        match self.0.get(TRACK_ID) {
            Some(DynamicValue::ObjectPath(path)) => path.clone(),
            Some(DynamicValue::Str(id)) => id.clone(),
            _ => String::new(),
        }
    }

    /// Track length in microseconds (`mpris:length`)
    ///
    /// MPRIS declares the key as a signed 64-bit integer but some players send
    /// it unsigned; both are accepted, negative lengths read as zero.
    pub fn length(&self) -> u64 {
        match self.0.get(LENGTH) {
            Some(DynamicValue::UInt64(length)) => *length,
            Some(DynamicValue::Int64(length)) => u64::try_from(*length).unwrap_or(0),
            _ => 0,
        }
    }

    /// Track length, or `None` when unknown
    pub fn length_duration(&self) -> Option<Duration> {
        match self.length() {
            0 => None,
            micros => Some(Duration::from_micros(micros)),
        }
    }

    /// URL to album artwork image (`mpris:artUrl`)
    pub fn art_url(&self) -> String {
        self.string(ART_URL)
    }

    /// Album name (`xesam:album`)
    pub fn album(&self) -> String {
        self.string(ALBUM)
    }

    /// Album artists (`xesam:albumArtist`)
    pub fn album_artists(&self) -> Vec<String> {
        self.strings(ALBUM_ARTIST)
    }

    /// Track artists (`xesam:artist`)
    pub fn artists(&self) -> Vec<String> {
        self.strings(ARTIST)
    }

    /// Disc number within the album (`xesam:discNumber`)
    pub fn disc_number(&self) -> i32 {
        self.int(DISC_NUMBER)
    }

    /// Track title (`xesam:title`)
    pub fn title(&self) -> String {
        self.string(TITLE)
    }

    /// Track number within the disc (`xesam:trackNumber`)
    pub fn track_number(&self) -> i32 {
        self.int(TRACK_NUMBER)
    }

    /// Location of the media file (`xesam:url`)
    pub fn url(&self) -> String {
        self.string(URL)
    }

    fn string(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(DynamicValue::Str(value)) => value.clone(),
            _ => String::new(),
        }
    }

    fn strings(&self, key: &str) -> Vec<String> {
        match self.0.get(key) {
            Some(DynamicValue::StrList(values)) => values.clone(),
            _ => Vec::new(),
        }
    }

    fn int(&self, key: &str) -> i32 {
        match self.0.get(key) {
            Some(DynamicValue::Int32(value)) => *value,
            _ => 0,
        }
    }
}
