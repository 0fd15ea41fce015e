use crate::profile::error::DurationError;
use mongodb::bson::Bson;
use mongodb::bson::spec::ElementType;
use std::fmt;
use std::time::Duration;

/// Operation latency as recorded in the profiler's `millis` field.
///
/// The server stores it as a BSON int32: a 4-byte little-endian payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct ProfileDuration(Duration);

impl ProfileDuration {
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }

    /// Decode a raw BSON element payload.
    pub fn decode(kind: ElementType, payload: &[u8]) -> Result<Self, DurationError> {
        if kind != ElementType::Int32 {
            return Err(DurationError::UnexpectedKind { kind });
        }

        let bytes: [u8; 4] = payload
            .try_into()
            .map_err(|_| DurationError::WrongLength { len: payload.len() })?;

        Ok(Self::from_millis(u64::from(u32::from_le_bytes(bytes))))
    }

    pub fn as_millis(&self) -> u64 {
        self.0.as_millis() as u64
    }

    pub fn as_duration(&self) -> Duration {
        self.0
    }
}

impl TryFrom<&Bson> for ProfileDuration {
    type Error = DurationError;

    fn try_from(value: &Bson) -> Result<Self, Self::Error> {
        match value {
            Bson::Int32(ms) => Self::decode(ElementType::Int32, &ms.to_le_bytes()),
            other => Err(DurationError::UnexpectedKind {
                kind: other.element_type(),
            }),
        }
    }
}

/// Renders like `0s`, `15ms`, `1.5s`, `1m1s`, `1h0m0s`.
impl fmt::Display for ProfileDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ms = self.as_millis();
        if ms == 0 {
            return f.write_str("0s");
        }
        if ms < 1000 {
            return write!(f, "{ms}ms");
        }

        let secs = ms / 1000;
        let frac = ms % 1000;
        let (hours, minutes, seconds) = (secs / 3600, (secs % 3600) / 60, secs % 60);

        if hours > 0 {
            write!(f, "{hours}h")?;
        }
        if hours > 0 || minutes > 0 {
            write!(f, "{minutes}m")?;
        }
        write!(f, "{seconds}")?;
        if frac > 0 {
            let frac = format!("{frac:03}");
            write!(f, ".{}", frac.trim_end_matches('0'))?;
        }
        f.write_str("s")
    }
}
