use chrono::{FixedOffset, Offset, Utc};
use std::env;

/// Default exchange offset (IST, UTC+05:30).
const DEFAULT_UTC_OFFSET_SECS: i32 = 5 * 3600 + 30 * 60;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Exchange local time offset used to decide intraday mode.
    pub market_offset: FixedOffset,
    /// Suggested re-evaluation interval while intraday rules apply (seconds).
    pub intraday_refresh_secs: u64,
    /// Suggested re-evaluation interval outside market hours (seconds).
    pub long_term_refresh_secs: u64,
    /// Prefix for price levels in signal reasons.
    pub currency_symbol: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let market_offset = env::var("MARKET_UTC_OFFSET")
            .ok()
            .and_then(|v| parse_utc_offset(&v))
            .unwrap_or_else(default_offset);

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            market_offset,
            intraday_refresh_secs: env::var("INTRADAY_REFRESH_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(300),
            long_term_refresh_secs: env::var("LONG_TERM_REFRESH_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(3600),
            currency_symbol: env::var("CURRENCY_SYMBOL").unwrap_or_else(|_| "₹".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

fn default_offset() -> FixedOffset {
    FixedOffset::east_opt(DEFAULT_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Parse a signed offset such as `+05:30` or `-0400`.
pub fn parse_utc_offset(value: &str) -> Option<FixedOffset> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_utc_offset_with_colon() {
        let offset = parse_utc_offset("+05:30").unwrap();
        assert_eq!(offset.local_minus_utc(), 19_800);
    }

    #[test]
    fn test_parse_utc_offset_negative() {
        let offset = parse_utc_offset("-04:00").unwrap();
        assert_eq!(offset.local_minus_utc(), -14_400);
    }

    #[test]
    fn test_parse_utc_offset_trims_whitespace() {
        let offset = parse_utc_offset(" +05:30\n").unwrap();
        assert_eq!(offset.local_minus_utc(), 19_800);
    }

    #[test]
    fn test_parse_utc_offset_invalid() {
        assert!(parse_utc_offset("").is_none());
        assert!(parse_utc_offset("IST").is_none());
        assert!(parse_utc_offset("05:30").is_none());
    }

    #[test]
    fn test_default_offset_is_ist() {
        assert_eq!(default_offset().local_minus_utc(), 19_800);
    }

    #[test]
    fn test_config_clone() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            market_offset: default_offset(),
            intraday_refresh_secs: 300,
            long_term_refresh_secs: 3600,
            currency_symbol: "$".to_string(),
        };

        let cloned = config.clone();
        assert_eq!(cloned.host, config.host);
        assert_eq!(cloned.port, 8080);
        assert_eq!(cloned.currency_symbol, "$");
    }
}
