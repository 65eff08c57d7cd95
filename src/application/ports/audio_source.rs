//! Audio source port interface

use async_trait::async_trait;

use crate::domain::error::EncodeError;
use crate::domain::transcription::AudioData;

/// Port for reading audio to be subtitled.
///
/// A source is read once per generation call.
#[async_trait]
pub trait AudioSource: Send + Sync {
    /// Read the full contents together with the declared media type.
    async fn read(&self) -> Result<AudioData, EncodeError>;

    /// Human-readable name of the source (for logs)
    fn name(&self) -> String;
}
