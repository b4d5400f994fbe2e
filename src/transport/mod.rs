//! Transport layer: HTTP and wire-format details (serialization/deserialization).

mod send_file_voice;
mod signature;

pub use send_file_voice::{
    decode_send_file_voice_json_response, encode_send_file_voice_json, send_file_voice_url,
};
pub use signature::calculate_signature;
