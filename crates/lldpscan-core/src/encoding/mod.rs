/// Encode/decode functions for BER primitives (integers, strings, OIDs).
pub mod primitives;
/// Zero-copy byte reader for decoding SNMP messages.
pub mod reader;
/// BER identifier octets and length headers.
pub mod tag;
/// Bounded, growable byte writer for encoding SNMP messages.
pub mod writer;
