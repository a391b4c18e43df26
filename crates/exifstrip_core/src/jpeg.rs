use crate::error::{CoreError, Result};

pub const SOI: [u8; 2] = [0xFF, 0xD8];
pub const EOI: u8 = 0xD9;
pub const SOS: u8 = 0xDA;
pub const DQT: u8 = 0xDB;
pub const DHT: u8 = 0xC4;
pub const SOF0: u8 = 0xC0;
pub const APP0: u8 = 0xE0;
pub const APP1: u8 = 0xE1;
pub const APP2: u8 = 0xE2;
pub const COM: u8 = 0xFE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerType {
    Sos,
    Eoi,
    App1,
    Other(u8),
}

impl MarkerType {
    #[inline]
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            0xDA => Self::Sos,
            0xD9 => Self::Eoi,
            0xE1 => Self::App1,
            b => Self::Other(b),
        }
    }

    #[inline]
    pub fn to_byte(&self) -> u8 {
        match self {
            Self::Sos => 0xDA,
            Self::Eoi => 0xD9,
            Self::App1 => 0xE1,
            Self::Other(b) => *b,
        }
    }
}

/// Rewrites a JPEG byte stream with every APP1 (EXIF) segment removed.
///
/// Segments other than APP1 are copied through unchanged, in their original
/// order. Once SOS or EOI is reached the rest of the buffer is copied
/// verbatim, entropy-coded scan data included. The output is never larger
/// than the input.
pub fn strip_exif(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() < 4 {
        return Err(CoreError::InvalidFormat("Data too short for JPEG".into()));
    }
    if data[0] != 0xFF || data[1] != 0xD8 {
        return Err(CoreError::InvalidFormat("Missing JPEG SOI marker".into()));
    }

    let mut output = Vec::with_capacity(data.len());
    output.extend_from_slice(&SOI);

    let mut pos: usize = 2;
    while pos + 4 <= data.len() && data[pos] == 0xFF {
        let marker = MarkerType::from_byte(data[pos + 1]);
        let length = u16::from_be_bytes([data[pos + 2], data[pos + 3]]) as usize;
        let segment_end = pos + 2 + length;
        // Validated before dispatch, so even a tail-copy marker with a bogus
        // declared length is rejected.
        if segment_end > data.len() {
            return Err(CoreError::TruncatedSegment {
                offset: pos,
                segment_end,
                len: data.len(),
            });
        }

        match marker {
            MarkerType::Sos | MarkerType::Eoi => {
                output.extend_from_slice(&data[pos..]);
                break;
            }
            MarkerType::App1 => pos = segment_end,
            MarkerType::Other(_) => {
                output.extend_from_slice(&data[pos..segment_end]);
                pos = segment_end;
            }
        }
    }

    Ok(output)
}
