use crate::model::FEATURE_COUNT;
use crate::pb::FlowRecord;

use std::fmt;

/// Rejected inbound record. Surfaced to the caller as an invalid
/// argument status; the service never retries.
#[derive(Debug, PartialEq, Eq)]
pub enum FeatureError {
    FieldOutOfRange {
        field: &'static str,
        value: u32,
        max: u32,
    },
}

impl fmt::Display for FeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldOutOfRange { field, value, max } => {
                write!(f, "{} = {} exceeds the field maximum {}", field, value, max)
            }
        }
    }
}

fn check_range(field: &'static str, value: u32, max: u32) -> Result<(), FeatureError> {
    if value > max {
        return Err(FeatureError::FieldOutOfRange { field, value, max });
    }
    Ok(())
}

/// Maps a flow record to the vector the model consumes.
///
/// The field order below is the order the model was trained on and must
/// never change.
pub fn feature_vector(record: &FlowRecord) -> Result<[f64; FEATURE_COUNT], FeatureError> {
    // the wire types are wider than the fields' domains
    check_range("l4_src_port", record.l4_src_port, u16::MAX as u32)?;
    check_range("l4_dst_port", record.l4_dst_port, u16::MAX as u32)?;
    check_range("protocol", record.protocol, u8::MAX as u32)?;
    check_range("tcp_flags", record.tcp_flags, u8::MAX as u32)?;

    Ok([
        record.l4_src_port as f64,
        record.l4_dst_port as f64,
        record.protocol as f64,
        record.l7_protocol as f64,
        record.in_bytes as f64,
        record.out_bytes as f64,
        record.in_packets as f64,
        record.out_packets as f64,
        record.tcp_flags as f64,
        record.flow_duration_ms as f64,
    ])
}
