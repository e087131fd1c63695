use candle_core::Device;
use tracing::debug;

#[cfg(any(feature = "metal", feature = "cuda"))]
use tracing::{info, warn};

use super::error::EmbeddingError;

/// Picks the compute device for the encoder.
///
/// GPU backends are tried only when compiled in (`cuda` first, then `metal`); any failure
/// falls through to CPU, which always succeeds.
pub fn select_device() -> Result<Device, EmbeddingError> {
    #[cfg(feature = "cuda")]
    {
        match Device::new_cuda(0) {
            Ok(device) => {
                info!("Encoding on CUDA device 0");
                return Ok(device);
            }
            Err(e) => warn!(error = %e, "CUDA unavailable for encoder"),
        }
    }

    #[cfg(feature = "metal")]
    {
        match Device::new_metal(0) {
            Ok(device) => {
                info!("Encoding on Metal device 0");
                return Ok(device);
            }
            Err(e) => warn!(error = %e, "Metal unavailable for encoder"),
        }
    }

    debug!("Encoding on CPU");
    Ok(Device::Cpu)
}
