pub const DEFAULT_DAEMON_URL: &str = "http://localhost:8001";
pub const DEFAULT_SPLINTERD_URL: &str = "http://localhost:8085";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const SABRE_FAMILY_NAME: &str = "sabre";
pub const SABRE_FAMILY_VERSION: &str = "0.5";

pub const MESSAGE_CONTRACT_NAME: &str = "sawtooth_message";
pub const MESSAGE_CONTRACT_VERSION: &str = "1.0";
pub const MESSAGE_CONTRACT_NAMESPACE: &str = "f8daf5";
pub const MESSAGE_CONTRACT_PATH: &str = "message-tp-rust.wasm";

pub const STATUS_CONTRACT_NAME: &str = "sawtooth_status";
pub const STATUS_CONTRACT_VERSION: &str = "1.0";
pub const STATUS_CONTRACT_NAMESPACE: &str = "df3dbd";
pub const STATUS_CONTRACT_PATH: &str = "status-tp-rust.wasm";
