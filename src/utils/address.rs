use crate::{constants::ADDRESS_LENGTH, models::HelperError};

/// Returns the address packed at the start of `data`, as lowercase `0x` hex.
///
/// Used on paymaster and factory call data, where the first 20 bytes are the
/// contract address followed by its payload. Returns `None` if `data` is
/// shorter than an address.
pub fn get_addr(data: impl AsRef<[u8]>) -> Option<String> {
    let data = data.as_ref();
    if data.len() < ADDRESS_LENGTH {
        return None;
    }
    Some(format!("0x{}", hex::encode(&data[..ADDRESS_LENGTH])))
}

/// Same as [`get_addr`] for `0x`-prefixed hex input.
pub fn get_addr_from_hex(data: &str) -> Result<Option<String>, HelperError> {
    let digits = data
        .strip_prefix("0x")
        .or_else(|| data.strip_prefix("0X"))
        .unwrap_or(data);
    let bytes = hex::decode(digits)
        .map_err(|e| HelperError::InvalidHex(format!("{}: {}", data, e)))?;
    Ok(get_addr(bytes))
}
