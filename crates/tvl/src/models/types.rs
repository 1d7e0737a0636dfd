use std::borrow::Cow;

/// Chain identifier (e.g., "ethereum") - mostly static constants
pub type Chain = Cow<'static, str>;

/// Asset symbol as used in the address book (e.g., "DAI")
pub type AssetSymbol = Cow<'static, str>;

/// On-chain contract address in canonical checksum form
pub type Address = Cow<'static, str>;
