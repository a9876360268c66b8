//! Conversion between DER and raw (R‖S) ECDSA signature encodings
//!
//! ECDSA primitives emit `SEQUENCE { INTEGER r, INTEGER s }`; JOSE embeds the
//! plain concatenation of R and S. Padding detection is parity based: a DER
//! INTEGER with an odd encoded length carries one leading `0x00` that was added
//! to keep a high-bit-set value positive, an even encoded length carries none.
//! Any disagreement between that rule and the actual leading byte is reported
//! as [`JwtError::MalformedSignatureEncoding`].

use crate::error::{JwtError, JwtResult};
use der::asn1::{AnyRef, UintRef};
use der::{Decode, Encode, Header, Reader, SliceReader, Tag, Tagged};

/// Rewrite a DER ECDSA signature into its raw R‖S form
///
/// # Errors
/// Returns [`JwtError::MalformedSignatureEncoding`] if the input is not a
/// SEQUENCE of exactly two INTEGERs, or if an INTEGER's padding is
/// inconsistent with its encoded length.
pub fn der_to_raw(signature: &[u8]) -> JwtResult<Vec<u8>> {
    let mut reader = SliceReader::new(signature)?;
    let (r, s) = reader.sequence(|seq| {
        let r = AnyRef::decode(seq)?;
        let s = AnyRef::decode(seq)?;
        Ok((r, s))
    })?;
    reader.finish(())?;

    let r = strip_padding("R", integer_bytes("R", r)?)?;
    let s = strip_padding("S", integer_bytes("S", s)?)?;
    tracing::trace!(r_len = r.len(), s_len = s.len(), "decoded DER signature");

    let mut raw = Vec::with_capacity(r.len() + s.len());
    raw.extend_from_slice(r);
    raw.extend_from_slice(s);
    Ok(raw)
}

/// Rewrite a raw R‖S signature into a DER SEQUENCE of two INTEGERs
///
/// Each half is encoded as a minimal DER INTEGER. The conversion is the
/// inverse of [`der_to_raw`] whenever neither half starts with a zero byte.
///
/// # Errors
/// Returns [`JwtError::MalformedSignatureEncoding`] if the input is empty or
/// has an odd length.
pub fn raw_to_der(signature: &[u8]) -> JwtResult<Vec<u8>> {
    if signature.is_empty() || signature.len() % 2 != 0 {
        return Err(JwtError::malformed(format!(
            "raw signature length {} is not a positive even number",
            signature.len()
        )));
    }
    let (r, s) = signature.split_at(signature.len() / 2);
    let r = UintRef::new(r)?;
    let s = UintRef::new(s)?;

    let header = Header::new(Tag::Sequence, (r.encoded_len()? + s.encoded_len()?)?)?;
    let mut der = Vec::with_capacity(signature.len() + 8);
    header.encode_to_vec(&mut der)?;
    r.encode_to_vec(&mut der)?;
    s.encode_to_vec(&mut der)?;
    Ok(der)
}

fn integer_bytes<'a>(component: &str, value: AnyRef<'a>) -> JwtResult<&'a [u8]> {
    if value.tag() != Tag::Integer {
        return Err(JwtError::malformed(format!(
            "{component} is tagged {} instead of INTEGER",
            value.tag()
        )));
    }
    let bytes = value.value();
    if bytes.is_empty() {
        return Err(JwtError::malformed(format!("{component} is an empty INTEGER")));
    }
    Ok(bytes)
}

fn strip_padding<'a>(component: &str, bytes: &'a [u8]) -> JwtResult<&'a [u8]> {
    let offset = bytes.len() & 0x01;
    let leading = bytes[0];
    let padded = offset == 1;

    if padded != (leading == 0x00) {
        tracing::warn!(
            component,
            len = bytes.len(),
            leading,
            "DER signature padding inconsistent with encoded length"
        );
        return Err(JwtError::malformed(format!(
            "{component} has {} encoded bytes but leading byte {leading:#04x}",
            bytes.len()
        )));
    }
    if !padded && leading & 0x80 != 0 {
        tracing::warn!(component, leading, "DER signature integer is negative");
        return Err(JwtError::malformed(format!(
            "{component} has its high bit set without a padding byte"
        )));
    }
    Ok(&bytes[offset..])
}
