//! Test fixtures and constants.

/// Secret used by the prefix scenarios.
pub const ONE_TWO: &str = r#"{"one":"value", "two":"value"}"#;

/// Secret whose keys differ only in case.
pub const MIXED_CASE: &str = r#"{"testKey1":"value", "testkey2":"value"}"#;

/// Secret with a value that needs quoting everywhere.
pub const TRICKY_VALUE: &str = r#"{"one":"va=lu\"e"}"#;

/// Realistic application secret.
pub const APP_SECRET: &str = r#"{
  "DATABASE_URL": "postgres://app:p@ss w0rd@db.internal:5432/app",
  "API_KEY": "sk-test-12345",
  "JWT_SECRET": "it's a \"secret\" #1 = $HOME",
  "TLS_KEY": "-----BEGIN KEY-----\nMIIB\n-----END KEY-----"
}"#;

/// Values that stress dotenv and shell quoting.
pub const HARD_VALUES: &[&str] = &[
    "value with spaces",
    "a=b=c",
    "p@ss#word",
    "say \"hi\"",
    "it's",
    "''",
    "$HOME ${PATH} `id` $(id)",
    "back\\slash\\",
    "C:\\dir\\",
    "\\'",
    "\\",
    "line1\nline2",
    "trailing newline\n",
    "\ttabbed\t",
    "  padded  ",
    "",
    "こんにちは 🌍",
    "!*?[]{}|&;<>~",
];
