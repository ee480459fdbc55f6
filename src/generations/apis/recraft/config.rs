pub static API_URL: &str = "https://external.api.recraft.ai/v1/images/generations";

/// Image URLs containing this host are served by Recraft itself and get
/// re-encoded. Plain substring match.
pub static IMAGE_HOST: &str = "img.recraft.ai";

pub static DEFAULT_MODEL: &str = "recraftv3";
pub static DEFAULT_RESPONSE_FORMAT: &str = "url";
pub static DEFAULT_NUMBER: u8 = 1;

/// Requested from upstream regardless of client input.
pub static OUTPUT_FORMAT: &str = "png";
