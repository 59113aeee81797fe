//! Envelope-shape detection for `responseData`.

use serde_json::Value;

/// Keys under which the API may nest the ad array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKey {
    Items,
    Records,
    Data,
    Results,
}

impl CollectionKey {
    /// Probe order. The first key holding an array wins.
    pub const PRIORITY: [CollectionKey; 4] = [
        CollectionKey::Items,
        CollectionKey::Records,
        CollectionKey::Data,
        CollectionKey::Results,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CollectionKey::Items => "items",
            CollectionKey::Records => "records",
            CollectionKey::Data => "data",
            CollectionKey::Results => "results",
        }
    }
}

/// The closed set of payload shapes the normalizer understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    /// Absent, `null`, or a scalar: nothing to show.
    Empty,
    /// A bare array of records.
    Array,
    /// An object holding the records under a collection key.
    Wrapped(CollectionKey),
    /// An object that is itself one record.
    Single,
}

#[must_use]
pub fn classify_payload(payload: Option<&Value>) -> PayloadShape {
    match payload {
        Some(Value::Array(_)) => PayloadShape::Array,
        Some(Value::Object(map)) => CollectionKey::PRIORITY
            .into_iter()
            .find(|key| map.get(key.as_str()).is_some_and(Value::is_array))
            .map_or(PayloadShape::Single, PayloadShape::Wrapped),
        _ => PayloadShape::Empty,
    }
}

/// Extracts the raw ad records from a payload without copying them.
///
/// Order is preserved and nothing is deduplicated.
#[must_use]
pub fn normalize_payload(payload: Option<&Value>) -> &[Value] {
    let Some(value) = payload else {
        return &[];
    };
    match classify_payload(payload) {
        PayloadShape::Empty => &[],
        PayloadShape::Array => value.as_array().map(Vec::as_slice).unwrap_or_default(),
        PayloadShape::Wrapped(key) => value
            .get(key.as_str())
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default(),
        PayloadShape::Single => std::slice::from_ref(value),
    }
}
